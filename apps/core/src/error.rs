use std::io;
use thiserror::Error;

/// Application-wide error type for everything around the engine.
///
/// The analysis itself is total and never fails; these errors come from
/// reading input, loading configuration and writing output.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents rejected input (wrong file type, binary content, bad encoding).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., invalid environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents failures while serializing analysis output.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        AppError::Validation(format!("Invalid UTF-8 content: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            AppError::Validation("bad".into()).to_string(),
            "Validation error: bad"
        );
        assert_eq!(AppError::Config("x".into()).to_string(), "Configuration error: x");
    }

    #[test]
    fn test_json_error_is_serialization() {
        let err: AppError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, AppError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: JSON error:"));
    }

    #[test]
    fn test_utf8_error_is_validation() {
        let err: AppError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
