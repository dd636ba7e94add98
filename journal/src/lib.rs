//! Recache Journal
//!
//! Ordered log of applied mutation commands.
//!
//! Responsibilities:
//! - Record every command that produced a new store
//! - Replay the log onto a base store to reproduce a later one
//! - Export and import the log in the action wire form

mod entry;
mod error;
mod journal;

pub use entry::{JournalRecord, Seq};
pub use error::{JournalError, JournalResult};
pub use journal::{MemoryJournal, ReplayStats};
