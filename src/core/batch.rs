//! CSV batch lookup: one target resistance per row in, nearest standard
//! value and its color bands out.

use crate::core::color_code::encode;
use crate::core::e_series::find_nearest;
use crate::domain::model::{BandCount, Series};
use crate::utils::error::{ResistorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct BatchRow {
    target_ohms: f64,
    #[serde(default)]
    series: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub target_ohms: f64,
    pub series: Series,
    pub nearest: f64,
    pub is_exact: bool,
    pub difference: f64,
    pub bands_4: String,
    pub bands_5: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub exact: usize,
    /// Rows whose nearest value has no color-band representation.
    pub unencodable: usize,
}

fn band_string(ohms: f64, band_count: BandCount) -> Option<String> {
    match encode(ohms, band_count) {
        Ok(bands) => Some(
            bands
                .iter()
                .map(|b| b.name())
                .collect::<Vec<_>>()
                .join("-"),
        ),
        Err(e) => {
            tracing::warn!(ohms, %band_count, error = %e, "cannot express value as color bands");
            None
        }
    }
}

pub fn run_batch<R: Read, W: Write>(
    reader: R,
    writer: W,
    default_series: Series,
) -> Result<BatchSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (index, row) in csv_reader.deserialize::<BatchRow>().enumerate() {
        let row = row?;
        let series = match row.series.as_deref() {
            Some(name) if !name.is_empty() => {
                name.parse::<Series>()
                    .map_err(|_| ResistorError::InvalidConfigValueError {
                        field: format!("row {} series", index + 1),
                        value: name.to_string(),
                        reason: "Must be one of: E12, E24, E96".to_string(),
                    })?
            }
            _ => default_series,
        };

        let nearest = find_nearest(row.target_ohms, series);
        let bands_4 = band_string(nearest.value, BandCount::Four);
        let bands_5 = band_string(nearest.value, BandCount::Five);
        let bands_4 = bands_4.unwrap_or_default();
        let bands_5 = bands_5.unwrap_or_default();
        if bands_4.is_empty() || bands_5.is_empty() {
            summary.unencodable += 1;
        }

        csv_writer.serialize(BatchRecord {
            target_ohms: row.target_ohms,
            series,
            nearest: nearest.value,
            is_exact: nearest.is_exact,
            difference: nearest.absolute_difference,
            bands_4,
            bands_5,
        })?;

        summary.rows += 1;
        if nearest.is_exact {
            summary.exact += 1;
        }
    }

    csv_writer.flush()?;
    tracing::info!(
        rows = summary.rows,
        exact = summary.exact,
        unencodable = summary.unencodable,
        "batch complete"
    );
    Ok(summary)
}

/// [`run_batch`] over files, creating the output's parent directory if needed.
///
/// Rows are buffered in memory and the output file is only written once every
/// row has been processed, so a failed run leaves no partial output behind.
pub fn run_batch_file(input: &Path, output: &Path, default_series: Series) -> Result<BatchSummary> {
    tracing::info!("Reading targets from {}", input.display());
    let reader = fs::File::open(input)?;

    let mut buffer = Vec::<u8>::new();
    let summary = run_batch(reader, &mut buffer, default_series)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, &buffer)?;
    tracing::info!("Results written to {}", output.display());
    Ok(summary)
}
