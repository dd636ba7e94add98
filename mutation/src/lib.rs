//! Recache Mutation
//!
//! Pure mutation engine for normalized client-side cache stores.
//!
//! A command names a collection key and an edit. Applying it never touches
//! the input store: the result is a new store that shares every untouched
//! collection, record and relation list with the input.
//!
//! # Module Structure
//!
//! - `command` - The nine mutation kinds and the typed command enum
//! - `action` - The `{type, payload}` wire form and its decoding
//! - `executor` - `MutationExecutor` and the `apply` entry points
//! - `ops/` - Shared edit catalogue (append, remove, merge, link, unlink)
//! - `strategy/` - Structural-sharing and copy-on-write draft navigation
//! - `config` - Engine configuration
//! - `error` - Error types for mutation failures

mod action;
mod command;
mod config;
mod error;
mod executor;
mod ops;
mod strategy;

pub use action::{Action, ActionPayload};
pub use command::{MutationCommand, MutationKind, UnknownKind};
pub use config::{EngineConfig, Strategy};
pub use error::{MutationError, MutationResult};
pub use executor::{apply, apply_draft, MutationExecutor};
