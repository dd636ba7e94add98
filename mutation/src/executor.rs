//! Mutation executor - plans a command and runs it with a strategy.
//!
//! Commands are reduced to a step by `ops::plan`; the configured strategy
//! only decides how the edited container is reached:
//! - `Strategy::Structural` - `StructuralRewrite`
//! - `Strategy::Draft` - `DraftRewrite`

use recache_core::Store;
use serde_json::Value as Json;
use tracing::{debug, trace};

use crate::command::MutationCommand;
use crate::config::{EngineConfig, Strategy};
use crate::error::MutationResult;
use crate::ops;
use crate::strategy::{DraftRewrite, StructuralRewrite};

/// Mutation executor.
#[derive(Debug, Clone, Default)]
pub struct MutationExecutor {
    config: EngineConfig,
}

impl MutationExecutor {
    /// Create a new executor.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Apply one command, returning the new store.
    ///
    /// `Noop` returns a handle to the input store itself. On error no store
    /// is returned and the input is unchanged.
    pub fn apply(&self, store: &Store, command: &MutationCommand) -> MutationResult<Store> {
        let Some(step) = ops::plan(command) else {
            trace!("noop mutation");
            return Ok(store.clone());
        };

        debug!(
            kind = %command.kind(),
            key = command.key().unwrap_or_default(),
            strategy = self.config.strategy.as_str(),
            "applying mutation"
        );

        match self.config.strategy {
            Strategy::Structural => ops::run(&StructuralRewrite, store, step, &self.config),
            Strategy::Draft => ops::run(&DraftRewrite, store, step, &self.config),
        }
    }

    /// Apply commands in order. Stops at the first error; no partial store
    /// is returned.
    pub fn apply_all<'c, I>(&self, store: &Store, commands: I) -> MutationResult<Store>
    where
        I: IntoIterator<Item = &'c MutationCommand>,
    {
        commands
            .into_iter()
            .try_fold(store.clone(), |current, command| self.apply(&current, command))
    }

    /// Decode a wire action and apply it.
    pub fn apply_json(&self, store: &Store, action: &Json) -> MutationResult<Store> {
        let command = MutationCommand::from_json(action)?;
        self.apply(store, &command)
    }
}

/// Apply a command with the structural-sharing strategy and default config.
pub fn apply(store: &Store, command: &MutationCommand) -> MutationResult<Store> {
    MutationExecutor::default().apply(store, command)
}

/// Apply a command with the copy-on-write draft strategy and default config.
pub fn apply_draft(store: &Store, command: &MutationCommand) -> MutationResult<Store> {
    MutationExecutor::new(EngineConfig::draft()).apply(store, command)
}
