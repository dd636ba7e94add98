//! Journal entry types.

use recache_mutation::MutationCommand;

/// Sequence number - unique, increasing identifier for each entry.
pub type Seq = u64;

/// A journal record: a command with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    pub seq: Seq,
    pub command: MutationCommand,
}

impl JournalRecord {
    pub fn new(seq: Seq, command: MutationCommand) -> Self {
        Self { seq, command }
    }
}
