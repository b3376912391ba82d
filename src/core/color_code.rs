use crate::core::decade::{decompose, scale};
use crate::domain::colors::ColorBand;
use crate::domain::model::{BandCount, ResistorReading};
use crate::utils::error::{ResistorError, Result};

/// Tolerance of a resistor with no tolerance band painted.
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 20.0;

const MIN_MULTIPLIER_EXPONENT: i32 = -2;
const MAX_MULTIPLIER_EXPONENT: i32 = 9;

fn invalid_color(color: ColorBand, index: usize, reason: &str) -> ResistorError {
    ResistorError::InvalidColor {
        name: color.name().to_string(),
        position: index + 1,
        reason: reason.to_string(),
    }
}

fn band_at(bands: &[ColorBand], index: usize) -> Result<ColorBand> {
    bands
        .get(index)
        .copied()
        .ok_or(ResistorError::MissingBand { position: index + 1 })
}

/// Reads resistance, tolerance and (6-band only) temperature coefficient
/// from a sequence of bands. Bands past `band_count` are ignored; a missing
/// tolerance band means ±20%.
pub fn decode(bands: &[ColorBand], band_count: BandCount) -> Result<ResistorReading> {
    let digit_bands = band_count.significant_digits();

    let mut significand: u32 = 0;
    for index in 0..digit_bands {
        let color = band_at(bands, index)?;
        let digit = color
            .facets()
            .digit
            .ok_or_else(|| invalid_color(color, index, "not a digit color"))?;
        significand = significand * 10 + u32::from(digit);
    }

    let multiplier_index = band_count.multiplier_index();
    let multiplier_color = band_at(bands, multiplier_index)?;
    let exponent = multiplier_color
        .facets()
        .multiplier_exponent
        .ok_or_else(|| invalid_color(multiplier_color, multiplier_index, "not a multiplier color"))?;

    let tolerance_index = band_count.tolerance_index();
    let tolerance_percent = match bands.get(tolerance_index).copied() {
        Some(color) => color
            .facets()
            .tolerance_percent
            .ok_or_else(|| invalid_color(color, tolerance_index, "not a tolerance color"))?,
        None => DEFAULT_TOLERANCE_PERCENT,
    };

    let temp_coeff_ppm = match band_count {
        BandCount::Six => match bands.get(5).copied() {
            Some(color) => Some(
                color
                    .facets()
                    .temp_coeff_ppm
                    .ok_or_else(|| invalid_color(color, 5, "not a temperature coefficient color"))?,
            ),
            None => None,
        },
        BandCount::Four | BandCount::Five => None,
    };

    let reading = ResistorReading {
        ohms: scale(f64::from(significand), exponent),
        tolerance_percent,
        temp_coeff_ppm,
    };
    tracing::debug!(?bands, %band_count, ohms = reading.ohms, "decoded color bands");
    Ok(reading)
}

/// Same as [`decode`], starting from color names such as `"yellow"`.
pub fn decode_names<S: AsRef<str>>(names: &[S], band_count: BandCount) -> Result<ResistorReading> {
    let bands = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = name.as_ref();
            ColorBand::from_name(name).ok_or_else(|| ResistorError::InvalidColor {
                name: name.to_string(),
                position: index + 1,
                reason: "unknown color".to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    decode(&bands, band_count)
}

/// Picks the band colors for a resistance: digits, multiplier, then a fixed
/// tolerance band (gold for 4 bands, brown for 5).
///
/// Non-positive or non-finite input yields an empty sequence. Values whose
/// multiplier would fall outside silver (10^-2) to white (10^9) fail with
/// [`ResistorError::UnsupportedMultiplier`].
pub fn encode(ohms: f64, band_count: BandCount) -> Result<Vec<ColorBand>> {
    let tolerance = match band_count {
        BandCount::Four => ColorBand::Gold,
        BandCount::Five => ColorBand::Brown,
        BandCount::Six => return Err(ResistorError::UnsupportedBandCount(6)),
    };

    let Some(decade) = decompose(ohms) else {
        tracing::debug!(ohms, "non-positive resistance, nothing to encode");
        return Ok(Vec::new());
    };

    let digit_count = band_count.significant_digits() as u32;
    let mut exponent = decade.exponent - (digit_count as i32 - 1);
    let mut digits = scale(ohms, -exponent).round() as u64;

    // 99.6 rounds to 100: keep the digit count by moving one decade up
    if digits >= 10u64.pow(digit_count) {
        digits /= 10;
        exponent += 1;
    }

    // 0.22 with three digits is 220 × 10^-3; silver stops at 10^-2, so fold
    // trailing zeros into the multiplier and let a leading black band pad.
    while exponent < MIN_MULTIPLIER_EXPONENT && digits % 10 == 0 && digits > 0 {
        digits /= 10;
        exponent += 1;
    }

    if !(MIN_MULTIPLIER_EXPONENT..=MAX_MULTIPLIER_EXPONENT).contains(&exponent) {
        return Err(ResistorError::UnsupportedMultiplier { exponent });
    }

    let mut bands = Vec::with_capacity(digit_count as usize + 2);
    for place in (0..digit_count).rev() {
        let digit = ((digits / 10u64.pow(place)) % 10) as u8;
        // black..white occupy the first ten slots of ColorBand::ALL
        bands.push(ColorBand::ALL[usize::from(digit)]);
    }
    bands.push(
        ColorBand::from_multiplier_exponent(exponent)
            .ok_or(ResistorError::UnsupportedMultiplier { exponent })?,
    );
    bands.push(tolerance);

    tracing::debug!(ohms, %band_count, ?bands, "encoded resistance");
    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::domain::colors::ColorBand::*;

    #[test]
    fn test_decode_four_band() {
        let reading = decode(&[Brown, Black, Red, Gold], BandCount::Four).unwrap();
        assert_eq!(reading.ohms, 1000.0);
        assert_eq!(reading.tolerance_percent, 5.0);
        assert_eq!(reading.temp_coeff_ppm, None);
    }

    #[test]
    fn test_decode_missing_tolerance_band_is_twenty_percent() {
        let reading = decode(&[Yellow, Violet, Red], BandCount::Four).unwrap();
        assert_eq!(reading.ohms, 4700.0);
        assert_eq!(reading.tolerance_percent, DEFAULT_TOLERANCE_PERCENT);
    }

    #[test]
    fn test_decode_fractional_multiplier() {
        let reading = decode(&[Red, Red, Silver, Gold], BandCount::Four).unwrap();
        assert_relative_eq!(reading.ohms, 0.22, max_relative = 1e-12);
    }

    #[test]
    fn test_decode_rejects_missing_digit() {
        let err = decode(&[Brown], BandCount::Four).unwrap_err();
        assert!(matches!(err, ResistorError::MissingBand { position: 2 }));
    }

    #[test]
    fn test_decode_rejects_wrong_facet() {
        let err = decode(&[Brown, Black, Unmarked, Gold], BandCount::Four).unwrap_err();
        assert!(matches!(err, ResistorError::InvalidColor { position: 3, .. }));

        let err = decode(&[Brown, Black, Red, Orange], BandCount::Four).unwrap_err();
        assert!(matches!(err, ResistorError::InvalidColor { position: 4, .. }));
    }

    #[test]
    fn test_decode_names_unknown_color() {
        let err = decode_names(&["brown", "black", "magenta", "gold"], BandCount::Four).unwrap_err();
        match err {
            ResistorError::InvalidColor { name, position, .. } => {
                assert_eq!(name, "magenta");
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_encode_common_values() {
        assert_eq!(encode(4700.0, BandCount::Four).unwrap(), vec![Yellow, Violet, Red, Gold]);
        assert_eq!(encode(100.0, BandCount::Four).unwrap(), vec![Brown, Black, Brown, Gold]);
        assert_eq!(
            encode(4750.0, BandCount::Five).unwrap(),
            vec![Yellow, Violet, Green, Brown, Brown]
        );
    }

    #[test]
    fn test_encode_rounding_carry() {
        // 996 is 99.6 × 10, which rounds to 100 × 10 and carries to 10 × 100
        assert_eq!(encode(996.0, BandCount::Four).unwrap(), vec![Brown, Black, Red, Gold]);
        assert_eq!(encode(9996.0, BandCount::Five).unwrap(), vec![Brown, Black, Black, Red, Brown]);
    }

    #[test]
    fn test_encode_sub_ohm() {
        assert_eq!(encode(0.22, BandCount::Four).unwrap(), vec![Red, Red, Silver, Gold]);
        assert_eq!(
            encode(0.22, BandCount::Five).unwrap(),
            vec![Black, Red, Red, Silver, Brown]
        );
        assert_eq!(encode(0.01, BandCount::Four).unwrap(), vec![Black, Brown, Silver, Gold]);
    }

    #[test]
    fn test_encode_non_positive_is_empty() {
        assert!(encode(0.0, BandCount::Four).unwrap().is_empty());
        assert!(encode(-47.0, BandCount::Five).unwrap().is_empty());
        assert!(encode(f64::NAN, BandCount::Four).unwrap().is_empty());
    }

    #[test]
    fn test_encode_out_of_range_multiplier() {
        assert!(matches!(
            encode(1e12, BandCount::Four),
            Err(ResistorError::UnsupportedMultiplier { exponent: 11 })
        ));
        assert!(matches!(
            encode(0.123, BandCount::Five),
            Err(ResistorError::UnsupportedMultiplier { exponent: -3 })
        ));
        // subnormal but still positive: out of range, not "nothing to encode"
        assert!(matches!(
            encode(3.3e-310, BandCount::Four),
            Err(ResistorError::UnsupportedMultiplier { exponent: -311 })
        ));
    }

    #[test]
    fn test_encode_six_bands_unsupported() {
        assert!(matches!(
            encode(1000.0, BandCount::Six),
            Err(ResistorError::UnsupportedBandCount(6))
        ));
    }
}
