//! Session manager.

use recache_core::Store;
use recache_journal::MemoryJournal;
use recache_mutation::{EngineConfig, MutationCommand, MutationExecutor};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};

/// Generation counter; advances once per store-changing command.
pub type Generation = u64;

/// A recache session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Store the session started from.
    initial: Store,
    /// Current store.
    store: Store,
    executor: MutationExecutor,
    /// Every applied command, in order.
    journal: MemoryJournal,
    generation: Generation,
}

impl Session {
    /// Create a session over `store` with the default configuration.
    pub fn new(store: Store) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Create a session with an explicit engine configuration.
    pub fn with_config(store: Store, config: EngineConfig) -> Self {
        Self {
            initial: store.clone(),
            store,
            executor: MutationExecutor::new(config),
            journal: MemoryJournal::new(),
            generation: 0,
        }
    }

    /// Get a reference to the current store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// A handle to the current store. Later applies never affect it.
    pub fn snapshot(&self) -> Store {
        self.store.clone()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn journal(&self) -> &MemoryJournal {
        &self.journal
    }

    pub fn config(&self) -> &EngineConfig {
        self.executor.config()
    }

    /// Apply a command to the current store.
    ///
    /// On success the store is replaced, the command is journaled and the
    /// generation advances. `Noop` changes nothing. On error the store, the
    /// journal and the generation are all left as they were.
    pub fn apply(&mut self, command: MutationCommand) -> SessionResult<Generation> {
        if command.is_noop() {
            return Ok(self.generation);
        }

        let next = self.executor.apply(&self.store, &command)?;
        self.store = next;
        self.journal.append(command);
        self.generation += 1;

        debug!(generation = self.generation, "store advanced");
        Ok(self.generation)
    }

    /// Apply a batch of commands atomically: either all are applied, or
    /// none are and the first error is returned.
    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = MutationCommand>,
    ) -> SessionResult<Generation> {
        let commands: Vec<_> = commands.into_iter().filter(|c| !c.is_noop()).collect();
        let next = self.executor.apply_all(&self.store, &commands)?;

        self.store = next;
        for command in commands {
            self.journal.append(command);
            self.generation += 1;
        }

        debug!(generation = self.generation, "store advanced by batch");
        Ok(self.generation)
    }

    /// Decode an action from JSON text and apply it.
    pub fn dispatch_json(&mut self, text: &str) -> SessionResult<Generation> {
        let command = MutationCommand::parse(text)?;
        self.apply(command)
    }

    /// Replay the journal onto the initial store. The result equals the
    /// current store.
    pub fn rebuild(&self) -> SessionResult<Store> {
        let rebuilt = self.journal.replay(&self.initial, &self.executor)?;
        if rebuilt != self.store {
            return Err(SessionError::diverged(self.generation));
        }
        info!(
            generation = self.generation,
            entries = self.journal.len(),
            "store rebuilt from journal"
        );
        Ok(rebuilt)
    }

    /// Discard all changes and return to the initial store.
    pub fn reset(&mut self) {
        info!(generation = self.generation, "session reset");
        self.store = self.initial.clone();
        self.journal = MemoryJournal::new();
        self.generation = 0;
    }
}
