//! Core error types for the patrimony dashboard.
//!
//! These errors are transport-agnostic. The api-client crate converts HTTP and
//! decoding failures into these types so callers never see `reqwest` errors.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for dashboard operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {message}")]
    Api {
        /// HTTP status returned by the backend, when one was received.
        status: Option<u16>,
        message: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Builds an API error without an HTTP status (transport or decode failure).
    pub fn api(message: impl Into<String>) -> Self {
        Error::Api {
            status: None,
            message: message.into(),
        }
    }

    /// Builds an API error carrying the backend status code.
    pub fn api_status(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}
