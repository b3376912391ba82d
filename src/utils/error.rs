use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResistorError {
    #[error("Invalid color '{name}' at band {position}: {reason}")]
    InvalidColor {
        name: String,
        position: usize,
        reason: String,
    },

    #[error("Missing band at position {position}")]
    MissingBand { position: usize },

    #[error("Unsupported band count: {0}")]
    UnsupportedBandCount(u8),

    #[error("No multiplier color exists for 10^{exponent}")]
    UnsupportedMultiplier { exponent: i32 },

    #[error("Invalid magnitude for {field}: {value}")]
    InvalidMagnitude { field: String, value: f64 },

    #[error("At least two quantities are required, got {given}")]
    InsufficientInputs { given: usize },

    #[error("Invalid SMD code: {0}")]
    InvalidSmdCode(String),

    #[error("Invalid capacitor code: {0}")]
    InvalidCapacitorCode(String),

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ResistorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ResistorError::InvalidColor { .. }
            | ResistorError::MissingBand { .. }
            | ResistorError::UnsupportedBandCount(_)
            | ResistorError::UnsupportedMultiplier { .. }
            | ResistorError::InvalidMagnitude { .. }
            | ResistorError::InsufficientInputs { .. }
            | ResistorError::InvalidSmdCode(_)
            | ResistorError::InvalidCapacitorCode(_) => ErrorCategory::Input,
            ResistorError::ConfigValidationError { .. }
            | ResistorError::InvalidConfigValueError { .. }
            | ResistorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ResistorError::IoError(_)
            | ResistorError::CsvError(_)
            | ResistorError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResistorError::InvalidColor { .. } => {
                "Use black..white for digits, gold/silver for small multipliers and none for an unmarked tolerance band"
            }
            ResistorError::MissingBand { .. } => "Provide at least as many bands as the selected band count",
            ResistorError::UnsupportedBandCount(_) => "Use 4 or 5 bands when encoding, 4, 5 or 6 when decoding",
            ResistorError::UnsupportedMultiplier { .. } => {
                "Color bands cover 0.01 Ω to 99 GΩ; use a value inside that range"
            }
            ResistorError::InvalidMagnitude { .. } => "Check that the inputs are positive and physically consistent",
            ResistorError::InsufficientInputs { .. } => "Give any two of voltage, current, resistance and power",
            ResistorError::InvalidSmdCode(_) => "Use a 3-digit, 4-digit or R-notation code such as 103, 1002 or 4R7",
            ResistorError::InvalidCapacitorCode(_) => "Use a 3-digit code such as 104",
            ResistorError::ConfigValidationError { .. }
            | ResistorError::InvalidConfigValueError { .. }
            | ResistorError::MissingConfigError { .. } => "Check the configuration file and command-line flags",
            ResistorError::IoError(_) => "Check that the file exists and is readable/writable",
            ResistorError::CsvError(_) => "Check the CSV header and that each row has a numeric target_ohms",
            ResistorError::SerializationError(_) => "Retry without --json",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ResistorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_high_severity() {
        let err = ResistorError::MissingBand { position: 2 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = ResistorError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("System error"));
    }
}
