//! Configuration errors.

use super::error_code::{self, ParleyErrorCode};

/// Errors raised while building or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },
}

impl ParleyErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => error_code::MISSING_PARAMETER,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
