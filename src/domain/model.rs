use crate::utils::error::{ResistorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of painted bands on a through-hole resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BandCount {
    Four,
    Five,
    Six,
}

impl BandCount {
    pub fn count(self) -> usize {
        match self {
            BandCount::Four => 4,
            BandCount::Five => 5,
            BandCount::Six => 6,
        }
    }

    pub fn significant_digits(self) -> usize {
        match self {
            BandCount::Four => 2,
            BandCount::Five | BandCount::Six => 3,
        }
    }

    pub fn multiplier_index(self) -> usize {
        self.significant_digits()
    }

    pub fn tolerance_index(self) -> usize {
        self.significant_digits() + 1
    }

    /// Band count used to read `colors` painted bands. An explicit count wins,
    /// then the number of colors when it is 4 to 6, then `default`.
    pub fn for_decode(explicit: Option<u8>, colors: usize, default: BandCount) -> Result<Self> {
        match explicit {
            Some(n) => BandCount::try_from(n),
            None => match colors {
                4 => Ok(BandCount::Four),
                5 => Ok(BandCount::Five),
                6 => Ok(BandCount::Six),
                _ => Ok(default),
            },
        }
    }

    /// Band count used to paint a value. There is no 6-band encoding, so a
    /// 6-band default falls back to the 5-band layout with the same digits.
    pub fn for_encode(explicit: Option<u8>, default: BandCount) -> Result<Self> {
        match explicit {
            Some(n) => BandCount::try_from(n),
            None => match default {
                BandCount::Six => Ok(BandCount::Five),
                other => Ok(other),
            },
        }
    }
}

impl TryFrom<u8> for BandCount {
    type Error = ResistorError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            4 => Ok(BandCount::Four),
            5 => Ok(BandCount::Five),
            6 => Ok(BandCount::Six),
            other => Err(ResistorError::UnsupportedBandCount(other)),
        }
    }
}

impl From<BandCount> for u8 {
    fn from(value: BandCount) -> Self {
        value.count() as u8
    }
}

impl fmt::Display for BandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// IEC 60063 preferred-number series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Series {
    E12,
    E24,
    E96,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::E12, Series::E24, Series::E96];

    pub fn name(self) -> &'static str {
        match self {
            Series::E12 => "E12",
            Series::E24 => "E24",
            Series::E96 => "E96",
        }
    }
}

impl FromStr for Series {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Series::ALL
            .iter()
            .copied()
            .find(|series| series.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ResistorError::InvalidConfigValueError {
                field: "series".to_string(),
                value: s.to_string(),
                reason: "Must be one of: E12, E24, E96".to_string(),
            })
    }
}

impl TryFrom<String> for Series {
    type Error = ResistorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Series> for String {
    fn from(value: Series) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value of a color-banded resistor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistorReading {
    pub ohms: f64,
    pub tolerance_percent: f64,
    pub temp_coeff_ppm: Option<u32>,
}

/// Closest preferred value to a requested resistance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch {
    pub is_exact: bool,
    pub value: f64,
    pub absolute_difference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ResistorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ResistorError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: "Must be one of: text, json".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_count_conversion() {
        assert_eq!(BandCount::try_from(5).unwrap(), BandCount::Five);
        assert!(matches!(
            BandCount::try_from(3),
            Err(ResistorError::UnsupportedBandCount(3))
        ));
        assert_eq!(BandCount::Six.tolerance_index(), 4);
        assert_eq!(BandCount::Four.multiplier_index(), 2);
    }

    #[test]
    fn test_decode_band_count_from_colors() {
        assert_eq!(BandCount::for_decode(None, 5, BandCount::Four).unwrap(), BandCount::Five);
        assert_eq!(BandCount::for_decode(None, 6, BandCount::Four).unwrap(), BandCount::Six);
        // three colors is a 4-band resistor missing its tolerance band
        assert_eq!(BandCount::for_decode(None, 3, BandCount::Five).unwrap(), BandCount::Five);
        assert_eq!(BandCount::for_decode(Some(4), 5, BandCount::Six).unwrap(), BandCount::Four);
        assert!(BandCount::for_decode(Some(7), 4, BandCount::Four).is_err());
    }

    #[test]
    fn test_encode_band_count_never_six() {
        assert_eq!(BandCount::for_encode(None, BandCount::Six).unwrap(), BandCount::Five);
        assert_eq!(BandCount::for_encode(None, BandCount::Four).unwrap(), BandCount::Four);
        assert_eq!(BandCount::for_encode(Some(5), BandCount::Four).unwrap(), BandCount::Five);
        // an explicit 6 is passed through and rejected by the encoder
        assert_eq!(BandCount::for_encode(Some(6), BandCount::Four).unwrap(), BandCount::Six);
    }

    #[test]
    fn test_series_serde_roundtrip() {
        let series: Series = serde_json::from_str("\"e12\"").unwrap();
        assert_eq!(series, Series::E12);
        assert_eq!(serde_json::to_string(&Series::E96).unwrap(), "\"E96\"");
        assert!(serde_json::from_str::<Series>("\"E6\"").is_err());
    }

    #[test]
    fn test_series_from_str() {
        assert_eq!("e96".parse::<Series>().unwrap(), Series::E96);
        assert!("E6".parse::<Series>().is_err());
    }
}
