//! Journal error types.

use recache_mutation::MutationError;
use thiserror::Error;

use crate::entry::Seq;

/// Journal errors.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A recorded command failed while replaying.
    #[error("replay failed at seq {seq}: {source}")]
    Replay {
        seq: Seq,
        #[source]
        source: MutationError,
    },

    /// An exported journal could not be read back.
    #[error("invalid journal format: {message}")]
    InvalidFormat { message: String },

    /// Entry not found.
    #[error("entry not found at seq {seq}")]
    EntryNotFound { seq: Seq },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl JournalError {
    pub fn replay(seq: Seq, source: MutationError) -> Self {
        Self::Replay { seq, source }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub fn entry_not_found(seq: Seq) -> Self {
        Self::EntryNotFound { seq }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;
