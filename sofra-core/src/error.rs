//! Error types for sofra.

use thiserror::Error;

use crate::model::Country;

/// Errors that can occur in sofra operations.
#[derive(Error, Debug)]
pub enum SofraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown city '{city}' for {country}")]
    UnknownCity { city: String, country: Country },

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidClockTime(String),

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Prayer time lookup failed: {0}")]
    PrayerApi(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for sofra operations.
pub type SofraResult<T> = Result<T, SofraError>;
