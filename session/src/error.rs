//! Session error types.

use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Mutation error.
    #[error("mutation error: {0}")]
    MutationError(#[from] recache_mutation::MutationError),

    /// Journal error.
    #[error("journal error: {0}")]
    JournalError(#[from] recache_journal::JournalError),

    /// The journal no longer reproduces the current store.
    #[error("journal diverged from store at generation {generation}")]
    Diverged { generation: u64 },
}

impl SessionError {
    pub fn diverged(generation: u64) -> Self {
        Self::Diverged { generation }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
