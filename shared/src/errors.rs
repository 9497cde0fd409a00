//! Error types for Humanize

use thiserror::Error;

/// Result type alias using Humanize Error
pub type Result<T> = std::result::Result<T, Error>;

/// Humanize error types
#[derive(Error, Debug)]
pub enum Error {
    /// Ordinal or offset falls outside the representable calendar range
    #[error("{unit} value out of range: {value}")]
    OutOfRange { unit: &'static str, value: i64 },

    /// Invalid formatter configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn out_of_range(unit: &'static str, value: impl Into<i64>) -> Self {
        Error::OutOfRange {
            unit,
            value: value.into(),
        }
    }

    /// Returns the error code for render responses
    pub fn code(&self) -> &'static str {
        match self {
            Error::OutOfRange { .. } => "out_of_range",
            Error::InvalidConfig(_) => "invalid_config",
        }
    }
}
