//! Mutation error types.

use recache_core::{CoreError, Id, Shape};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while applying a mutation.
///
/// Every error is raised before a replacement store is produced; the input
/// store is never left half-written.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Missing collection: {key}")]
    MissingKey { key: String },

    #[error("Record not found: id {id} in collection {key}")]
    RecordNotFound { key: String, id: Id },

    #[error("Malformed payload for {kind}: {message}")]
    MalformedPayload { kind: String, message: String },

    #[error("Shape mismatch for collection {key}: expected {expected}, found {actual}")]
    ShapeMismatch {
        key: String,
        expected: Shape,
        actual: Shape,
    },

    #[error("Missing relation: {path} on record {id} in collection {key}")]
    MissingRelation { key: String, id: Id, path: String },

    #[error("Value conversion failed: {0}")]
    Core(#[from] CoreError),
}

impl MutationError {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub fn record_not_found(key: impl Into<String>, id: &Id) -> Self {
        Self::RecordNotFound {
            key: key.into(),
            id: id.clone(),
        }
    }

    pub fn malformed_payload(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn shape_mismatch(key: impl Into<String>, expected: Shape, actual: Shape) -> Self {
        Self::ShapeMismatch {
            key: key.into(),
            expected,
            actual,
        }
    }

    pub fn missing_relation(key: impl Into<String>, id: &Id, path: impl Into<String>) -> Self {
        Self::MissingRelation {
            key: key.into(),
            id: id.clone(),
            path: path.into(),
        }
    }
}
