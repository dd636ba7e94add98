//! Common error types for recache.

use thiserror::Error;

/// Errors raised while converting external data into store values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON text could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON number outside the i64/f64 range.
    #[error("unsupported number: {0}")]
    UnsupportedNumber(String),

    /// The JSON shape does not fit where it was found.
    #[error("expected {expected} at {at}, got {actual}")]
    UnexpectedShape {
        at: String,
        expected: String,
        actual: String,
    },
}

impl CoreError {
    pub fn unexpected_shape(
        at: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedShape {
            at: at.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for core conversions.
pub type CoreResult<T> = Result<T, CoreError>;
