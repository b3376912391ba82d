use serde::{Deserialize, Serialize};
use std::fmt;

/// A painted stripe color on a through-hole resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
    /// No fourth/fifth band painted at all (±20%).
    #[serde(rename = "none")]
    Unmarked,
}

/// What a color means in each band position. `None` means the color is not
/// valid in that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorFacets {
    pub digit: Option<u8>,
    /// Power of ten, so 2 means ×100 and -1 means ×0.1.
    pub multiplier_exponent: Option<i32>,
    pub tolerance_percent: Option<f64>,
    pub temp_coeff_ppm: Option<u32>,
}

const fn facets(
    digit: Option<u8>,
    multiplier_exponent: Option<i32>,
    tolerance_percent: Option<f64>,
    temp_coeff_ppm: Option<u32>,
) -> ColorFacets {
    ColorFacets {
        digit,
        multiplier_exponent,
        tolerance_percent,
        temp_coeff_ppm,
    }
}

/// Indexed in the same order as [`ColorBand::ALL`].
static COLOR_TABLE: [ColorFacets; 13] = [
    facets(Some(0), Some(0), None, Some(250)),
    facets(Some(1), Some(1), Some(1.0), Some(100)),
    facets(Some(2), Some(2), Some(2.0), Some(50)),
    facets(Some(3), Some(3), None, Some(15)),
    facets(Some(4), Some(4), None, Some(25)),
    facets(Some(5), Some(5), Some(0.5), Some(20)),
    facets(Some(6), Some(6), Some(0.25), Some(10)),
    facets(Some(7), Some(7), Some(0.1), Some(5)),
    facets(Some(8), Some(8), Some(0.05), Some(1)),
    facets(Some(9), Some(9), None, None),
    facets(None, Some(-1), Some(5.0), None),
    facets(None, Some(-2), Some(10.0), None),
    facets(None, None, Some(20.0), None),
];

impl ColorBand {
    pub const ALL: [ColorBand; 13] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Gray,
        ColorBand::White,
        ColorBand::Gold,
        ColorBand::Silver,
        ColorBand::Unmarked,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "black",
            ColorBand::Brown => "brown",
            ColorBand::Red => "red",
            ColorBand::Orange => "orange",
            ColorBand::Yellow => "yellow",
            ColorBand::Green => "green",
            ColorBand::Blue => "blue",
            ColorBand::Violet => "violet",
            ColorBand::Gray => "gray",
            ColorBand::White => "white",
            ColorBand::Gold => "gold",
            ColorBand::Silver => "silver",
            ColorBand::Unmarked => "none",
        }
    }

    /// Case-insensitive lookup; accepts "grey" for gray.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "grey" {
            return Some(ColorBand::Gray);
        }
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn facets(self) -> &'static ColorFacets {
        &COLOR_TABLE[self as usize]
    }

    pub fn from_multiplier_exponent(exponent: i32) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.facets().multiplier_exponent == Some(exponent))
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
