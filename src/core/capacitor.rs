use crate::utils::error::{ResistorError, Result};
use crate::utils::format::trim_decimals;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacitanceUnit {
    #[serde(rename = "pF")]
    Picofarad,
    #[serde(rename = "nF")]
    Nanofarad,
    #[serde(rename = "µF")]
    Microfarad,
}

impl fmt::Display for CapacitanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CapacitanceUnit::Picofarad => "pF",
            CapacitanceUnit::Nanofarad => "nF",
            CapacitanceUnit::Microfarad => "µF",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitorReading {
    pub code: String,
    pub picofarads: f64,
    /// `picofarads` expressed in `unit`.
    pub value: f64,
    pub unit: CapacitanceUnit,
    /// e.g. `100nF / 0.10µF`
    pub display: String,
}

/// Decodes a three-digit ceramic capacitor marking (`104` = 10 × 10^4 pF).
pub fn decode_capacitor(code: &str) -> Result<CapacitorReading> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResistorError::InvalidCapacitorCode(code.to_string()));
    }

    let bytes = trimmed.as_bytes();
    let significand = f64::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
    let exponent = i32::from(bytes[2] - b'0');
    let picofarads = significand * 10f64.powi(exponent);

    let (value, unit, alternate) = if picofarads >= 1_000_000.0 {
        let value = picofarads / 1_000_000.0;
        let alt = format!(" / {}nF", trim_decimals(picofarads / 1_000.0, 3));
        (value, CapacitanceUnit::Microfarad, alt)
    } else if picofarads >= 1_000.0 {
        let value = picofarads / 1_000.0;
        let alt = if picofarads >= 10_000.0 {
            let decimals = if picofarads % 1_000_000.0 == 0.0 { 0 } else { 2 };
            format!(" / {:.*}µF", decimals, picofarads / 1_000_000.0)
        } else {
            String::new()
        };
        (value, CapacitanceUnit::Nanofarad, alt)
    } else {
        (picofarads, CapacitanceUnit::Picofarad, String::new())
    };

    let rendered = format!("{}{}{}", trim_decimals(value, 3), unit, alternate);
    tracing::debug!(code = trimmed, picofarads, display = %rendered, "decoded capacitor code");

    Ok(CapacitorReading {
        code: trimmed.to_string(),
        picofarads,
        value,
        unit,
        display: rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanofarad_with_microfarad_alternate() {
        let reading = decode_capacitor("104").unwrap();
        assert_eq!(reading.picofarads, 100_000.0);
        assert_eq!(reading.unit, CapacitanceUnit::Nanofarad);
        assert_eq!(reading.value, 100.0);
        assert_eq!(reading.display, "100nF / 0.10µF");
    }

    #[test]
    fn test_microfarad() {
        let reading = decode_capacitor("105").unwrap();
        assert_eq!(reading.unit, CapacitanceUnit::Microfarad);
        assert_eq!(reading.value, 1.0);
        assert_eq!(reading.display, "1µF / 1000nF");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(decode_capacitor("220").unwrap().display, "22pF");
        assert_eq!(decode_capacitor("102").unwrap().display, "1nF");
        assert_eq!(decode_capacitor("473").unwrap().display, "47nF / 0.05µF");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        for code in ["", "10", "1044", "1O4", "abc"] {
            assert!(matches!(
                decode_capacitor(code),
                Err(ResistorError::InvalidCapacitorCode(_))
            ));
        }
    }
}
