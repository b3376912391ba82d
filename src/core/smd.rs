//! Surface-mount resistor markings.
//!
//! * `103`  → 10 × 10^3 = 10 kΩ
//! * `1002` → 100 × 10^2 = 10 kΩ
//! * `4R7`, `R47`, `47R` → the `R` stands in for the decimal point

use crate::core::decade::scale;
use crate::utils::error::{ResistorError, Result};

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn digits_times_power(significand: &str, exponent: &str) -> Option<f64> {
    let significand: u32 = significand.parse().ok()?;
    let exponent: i32 = exponent.parse().ok()?;
    Some(scale(f64::from(significand), exponent))
}

pub fn decode_smd(code: &str) -> Result<f64> {
    let normalized = code.trim().to_ascii_uppercase();
    let invalid = || ResistorError::InvalidSmdCode(code.to_string());

    let ohms = if all_digits(&normalized) && normalized.len() == 3 {
        digits_times_power(&normalized[..2], &normalized[2..])
    } else if all_digits(&normalized) && normalized.len() == 4 {
        digits_times_power(&normalized[..3], &normalized[3..])
    } else if let Some((whole, fraction)) = normalized.split_once('R') {
        let well_formed = (whole.is_empty() || all_digits(whole))
            && (fraction.is_empty() || all_digits(fraction))
            && !(whole.is_empty() && fraction.is_empty());
        if well_formed {
            format!("{}.{}", whole, fraction).parse::<f64>().ok()
        } else {
            None
        }
    } else {
        None
    };

    let ohms = ohms.ok_or_else(invalid)?;
    tracing::debug!(code, ohms, "decoded SMD code");
    Ok(ohms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_digit_codes() {
        assert_eq!(decode_smd("103").unwrap(), 10_000.0);
        assert_eq!(decode_smd("472").unwrap(), 4_700.0);
        assert_eq!(decode_smd("100").unwrap(), 10.0);
    }

    #[test]
    fn test_four_digit_codes() {
        assert_eq!(decode_smd("1002").unwrap(), 10_000.0);
        assert_eq!(decode_smd("4701").unwrap(), 4_700.0);
    }

    #[test]
    fn test_r_notation() {
        assert_relative_eq!(decode_smd("4R7").unwrap(), 4.7);
        assert_relative_eq!(decode_smd("r47").unwrap(), 0.47);
        assert_relative_eq!(decode_smd("47R").unwrap(), 47.0);
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "R", "10", "12345", "4R7R", "ABC", "4K7"] {
            assert!(
                matches!(decode_smd(code), Err(ResistorError::InvalidSmdCode(_))),
                "{:?} should be rejected",
                code
            );
        }
    }
}
