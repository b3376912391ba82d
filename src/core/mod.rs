pub mod batch;
pub mod capacitor;
pub mod circuits;
pub mod color_code;
pub mod decade;
pub mod e_series;
pub mod smd;

pub use crate::domain::colors::{ColorBand, ColorFacets};
pub use crate::domain::model::{BandCount, NearestMatch, ResistorReading, Series};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
