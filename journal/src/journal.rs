//! In-memory command journal.

use recache_core::Store;
use recache_mutation::{MutationCommand, MutationExecutor};
use serde_json::Value as Json;
use tracing::debug;

use crate::entry::{JournalRecord, Seq};
use crate::error::{JournalError, JournalResult};

/// In-memory journal of applied commands.
#[derive(Debug, Clone)]
pub struct MemoryJournal {
    /// All recorded entries, in sequence order.
    entries: Vec<JournalRecord>,
    /// Next sequence number to assign.
    next_seq: Seq,
}

impl Default for MemoryJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryJournal {
    /// Create a new empty journal.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }

    /// Append a command to the journal.
    pub fn append(&mut self, command: MutationCommand) -> Seq {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(JournalRecord::new(seq, command));
        seq
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalRecord] {
        &self.entries
    }

    /// Get entry by sequence number.
    pub fn get(&self, seq: Seq) -> Option<&JournalRecord> {
        self.entries.iter().find(|r| r.seq == seq)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sequence number of the most recent entry.
    pub fn last_seq(&self) -> Option<Seq> {
        self.entries.last().map(|r| r.seq)
    }

    /// Drop every entry after `seq`. Sequence numbers are not reused.
    pub fn truncate_after(&mut self, seq: Seq) -> JournalResult<usize> {
        if seq != 0 && self.get(seq).is_none() {
            return Err(JournalError::entry_not_found(seq));
        }
        let before = self.entries.len();
        self.entries.retain(|r| r.seq <= seq);
        Ok(before - self.entries.len())
    }

    /// Replay every entry onto `base`, returning the resulting store.
    pub fn replay(&self, base: &Store, executor: &MutationExecutor) -> JournalResult<Store> {
        self.replay_with_stats(base, executor).map(|(store, _)| store)
    }

    /// Replay every entry onto `base`, also reporting what was replayed.
    pub fn replay_with_stats(
        &self,
        base: &Store,
        executor: &MutationExecutor,
    ) -> JournalResult<(Store, ReplayStats)> {
        let mut stats = ReplayStats::default();
        let mut store = base.clone();

        for record in &self.entries {
            if record.command.is_noop() {
                stats.noops_skipped += 1;
                continue;
            }
            store = executor
                .apply(&store, &record.command)
                .map_err(|e| JournalError::replay(record.seq, e))?;
            stats.entries_replayed += 1;
        }

        debug!(
            replayed = stats.entries_replayed,
            skipped = stats.noops_skipped,
            "journal replayed"
        );
        Ok((store, stats))
    }

    /// Export the journal as a JSON array of actions.
    pub fn to_json(&self) -> JournalResult<Json> {
        let actions = self
            .entries
            .iter()
            .map(|r| {
                serde_json::to_value(r.command.to_action())
                    .map_err(|e| JournalError::serialization(format!("seq {}: {}", r.seq, e)))
            })
            .collect::<JournalResult<Vec<_>>>()?;
        Ok(Json::Array(actions))
    }

    /// Rebuild a journal from an exported JSON array of actions.
    pub fn from_json(json: &Json) -> JournalResult<Self> {
        let actions = json
            .as_array()
            .ok_or_else(|| JournalError::invalid_format("expected an array of actions"))?;

        let mut journal = Self::new();
        for (index, action) in actions.iter().enumerate() {
            let command = MutationCommand::from_json(action).map_err(|e| {
                JournalError::invalid_format(format!("action {}: {}", index, e))
            })?;
            journal.append(command);
        }
        Ok(journal)
    }
}

/// Statistics from a journal replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    /// Number of commands applied.
    pub entries_replayed: usize,
    /// Number of NOOP entries skipped.
    pub noops_skipped: usize,
}
