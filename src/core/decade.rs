//! Power-of-ten decomposition shared by the color codec and the E-series finder.
//!
//! `floor(log10(x))` can land one decade off near exact powers of ten, so
//! [`decompose`] re-checks the mantissa and corrects the exponent by one step.

/// `value == mantissa × 10^exponent` with `1 <= mantissa < 10`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decade {
    pub exponent: i32,
    pub mantissa: f64,
}

/// 10^exponent. Negative exponents divide so that 10^-2 is the same double as 1/100.
pub fn pow10(exponent: i32) -> f64 {
    scale(1.0, exponent)
}

/// `value × 10^exponent`, dividing for negative exponents.
pub fn scale(value: f64, exponent: i32) -> f64 {
    // 10^309 and beyond overflow, so subnormal inputs are scaled in two halves
    if exponent.abs() > 300 {
        let half = exponent / 2;
        return scale(scale(value, half), exponent - half);
    }
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

/// Splits a finite positive number into exponent and mantissa.
/// Returns `None` for zero, negative, NaN or infinite input.
pub fn decompose(value: f64) -> Option<Decade> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let mut exponent = value.log10().floor() as i32;
    let mut mantissa = scale(value, -exponent);

    if mantissa >= 10.0 {
        exponent += 1;
        mantissa = scale(value, -exponent);
    } else if mantissa < 1.0 {
        exponent -= 1;
        mantissa = scale(value, -exponent);
    }

    // lost subnormal precision can still leave the mantissa on a boundary
    if !(1.0..10.0).contains(&mantissa) {
        return None;
    }

    Some(Decade { exponent, mantissa })
}
