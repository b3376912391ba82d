pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::Command, CliConfig};
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::batch::{run_batch, run_batch_file, BatchRecord, BatchSummary};
pub use crate::core::capacitor::{decode_capacitor, CapacitanceUnit, CapacitorReading};
pub use crate::core::circuits::{
    divider_output, divider_required_r2, led_resistor, solve_ohms_law, DividerSolution,
    LedResistor, OhmsLawInput, OhmsLawResult,
};
pub use crate::core::color_code::{decode, decode_names, encode};
pub use crate::core::e_series::find_nearest;
pub use crate::core::smd::decode_smd;
pub use crate::domain::colors::ColorBand;
pub use crate::domain::model::{BandCount, NearestMatch, OutputFormat, ResistorReading, Series};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::{ResistorError, Result};
pub use crate::utils::format::format_resistance;
