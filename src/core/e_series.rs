use crate::core::decade::{decompose, pow10};
use crate::domain::model::{NearestMatch, Series};

/// Mantissa distance under which a target counts as a member of the series.
pub const EXACT_EPSILON: f64 = 1e-6;

pub static E12_VALUES: [f64; 12] = [
    1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2,
];

pub static E24_VALUES: [f64; 24] = [
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, //
    3.3, 3.6, 3.9, 4.3, 4.7, 5.1, 5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

pub static E96_VALUES: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, //
    1.33, 1.37, 1.40, 1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, //
    1.78, 1.82, 1.87, 1.91, 1.96, 2.00, 2.05, 2.10, 2.15, 2.21, 2.26, 2.32, //
    2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09, //
    3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12, //
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, //
    5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, //
    7.50, 7.68, 7.87, 8.06, 8.25, 8.45, 8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

impl Series {
    /// Ascending mantissas in [1.0, 10.0).
    pub fn values(self) -> &'static [f64] {
        match self {
            Series::E12 => &E12_VALUES,
            Series::E24 => &E24_VALUES,
            Series::E96 => &E96_VALUES,
        }
    }
}

/// First entry with the smallest distance to `mantissa`; earlier entries win ties.
fn closest_entry(mantissa: f64, table: &[f64]) -> (f64, f64) {
    let mut closest = table[0];
    let mut min_diff = (mantissa - closest).abs();

    for &entry in &table[1..] {
        let diff = (mantissa - entry).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = entry;
        }
    }

    (closest, min_diff)
}

/// Closest standard value to `target_ohms` within the same decade.
///
/// Zero, negative and non-finite targets do not fail: they return
/// `value == 0` with the target echoed back as the difference.
pub fn find_nearest(target_ohms: f64, series: Series) -> NearestMatch {
    let Some(decade) = decompose(target_ohms) else {
        tracing::debug!(target_ohms, %series, "no decade for target, returning sentinel");
        return NearestMatch {
            is_exact: false,
            value: 0.0,
            absolute_difference: target_ohms,
        };
    };

    let (closest, min_diff) = closest_entry(decade.mantissa, series.values());
    let value = closest * pow10(decade.exponent);

    let nearest = NearestMatch {
        is_exact: min_diff < EXACT_EPSILON,
        value,
        absolute_difference: (target_ohms - value).abs(),
    };
    tracing::trace!(target_ohms, %series, ?nearest, "nearest preferred value");
    nearest
}
