use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid format: '{input}' ({reason})")]
    FormatError { input: String, reason: String },

    #[error("Unknown time zone: '{zone}'")]
    TimeZoneError { zone: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    TimeZone,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FormatError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn time_zone(zone: impl Into<String>) -> Self {
        CalcError::TimeZoneError { zone: zone.into() }
    }

    pub fn is_format_error(&self) -> bool {
        matches!(self, CalcError::FormatError { .. })
    }

    pub fn is_time_zone_error(&self) -> bool {
        matches!(self, CalcError::TimeZoneError { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::FormatError { .. } => ErrorCategory::Format,
            CalcError::TimeZoneError { .. } => ErrorCategory::TimeZone,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::Io,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 輸入錯誤是確定性的，不會出現 Medium (可重試)
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Format | ErrorCategory::TimeZone => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::FormatError { input, .. } => {
                format!("Could not understand '{}'", input)
            }
            CalcError::TimeZoneError { zone } => {
                format!("'{}' is not a known IANA time zone", zone)
            }
            CalcError::IoError(e) => format!("Could not read input: {}", e),
            CalcError::SerializationError(e) => format!("Could not write output: {}", e),
            CalcError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not valid for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Format => {
                "Use an RFC 3339 timestamp such as 2023-01-01T00:00:00+09:00 and HH:mm:ss elapsed times"
            }
            ErrorCategory::TimeZone => {
                "Run with --list-zones to see the supported IANA identifiers"
            }
            ErrorCategory::Configuration => "Check the TOML file and command line flags",
            ErrorCategory::Io => "Check that the input file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_time_zone_errors_are_distinct() {
        let format = CalcError::format("abc", "expected HH:mm:ss");
        let zone = CalcError::time_zone("Mars/Olympus");

        assert!(format.is_format_error());
        assert!(!format.is_time_zone_error());
        assert!(zone.is_time_zone_error());
        assert_ne!(format.category(), zone.category());
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = CalcError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
