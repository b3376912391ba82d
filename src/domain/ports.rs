use crate::domain::model::{BandCount, OutputFormat, Series};

/// Defaults the CLI falls back to when a command leaves them unspecified.
pub trait ConfigProvider: Send + Sync {
    fn default_series(&self) -> Series;
    fn default_band_count(&self) -> BandCount;
    fn output_format(&self) -> OutputFormat;
}
