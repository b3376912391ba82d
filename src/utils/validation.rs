use crate::utils::error::{ResistorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects zero, negative, NaN and infinite quantities.
pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ResistorError::InvalidMagnitude {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Err(ResistorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Must be one of: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("ohms", 4.7).is_ok());
        assert!(validate_positive("ohms", 0.0).is_err());
        assert!(validate_positive("ohms", -1.0).is_err());
        assert!(validate_positive("ohms", f64::NAN).is_err());
        assert!(validate_positive("ohms", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "JSON", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "yaml", &["text", "json"]).is_err());
    }
}
