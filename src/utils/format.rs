/// Renders a resistance with an Ω, kΩ or MΩ suffix and at most two decimals.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        format!("{}MΩ", trim_decimals(ohms / 1_000_000.0, 2))
    } else if ohms >= 1_000.0 {
        format!("{}kΩ", trim_decimals(ohms / 1_000.0, 2))
    } else {
        format!("{}Ω", trim_decimals(ohms, 2))
    }
}

/// Fixed-point rendering with trailing zeros (and a bare point) removed.
pub fn trim_decimals(value: f64, max_decimals: usize) -> String {
    let fixed = format!("{:.*}", max_decimals, value);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resistance_units() {
        assert_eq!(format_resistance(4700.0), "4.7kΩ");
        assert_eq!(format_resistance(1_000_000.0), "1MΩ");
        assert_eq!(format_resistance(220.0), "220Ω");
        assert_eq!(format_resistance(0.47), "0.47Ω");
        assert_eq!(format_resistance(1_234.0), "1.23kΩ");
    }

    #[test]
    fn test_trim_decimals() {
        assert_eq!(trim_decimals(2.50, 2), "2.5");
        assert_eq!(trim_decimals(10.0, 2), "10");
        assert_eq!(trim_decimals(0.001, 2), "0");
    }
}
