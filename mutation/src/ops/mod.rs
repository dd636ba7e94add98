//! Mutation operation implementations.
//!
//! Every command kind is planned into one of six steps, and each step is
//! implemented once, in its own module, against the `Rewrite` navigation
//! trait. Both evaluation strategies therefore run the same catalogue.

mod connect;
mod create;
mod delete;
mod disconnect;
mod update;

use recache_core::{Id, Record, Store};

use crate::command::{MutationCommand, MutationKind};
use crate::config::EngineConfig;
use crate::error::MutationResult;
use crate::strategy::Rewrite;

/// A planned edit, borrowed from the command it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step<'c> {
    /// Append a record to a sequence.
    Append { key: &'c str, value: &'c Record },
    /// Remove records with `id` from a sequence.
    Remove { key: &'c str, id: &'c Id },
    /// Shallow-merge into a record of a sequence.
    MergeRecord {
        key: &'c str,
        id: &'c Id,
        patch: &'c Record,
    },
    /// Shallow-merge into a singleton.
    MergeSingleton { key: &'c str, patch: &'c Record },
    /// Append to a relation list.
    Link {
        key: &'c str,
        id: &'c Id,
        path: &'c str,
        value: &'c Record,
    },
    /// Remove from a relation list the elements sharing `related`'s id.
    Unlink {
        kind: MutationKind,
        key: &'c str,
        id: &'c Id,
        path: &'c str,
        related: &'c Record,
    },
}

/// Reduce a command to its step. `None` means the command is a no-op.
pub(crate) fn plan(command: &MutationCommand) -> Option<Step<'_>> {
    Some(match command {
        MutationCommand::CreateArray { key, value } => Step::Append { key, value },
        MutationCommand::UpdateArray { key, id, value } => Step::MergeRecord {
            key,
            id,
            patch: value,
        },
        MutationCommand::DeleteArray { key, id } => Step::Remove { key, id },
        MutationCommand::UpdateObject { key, value } => Step::MergeSingleton { key, patch: value },
        MutationCommand::Connect {
            key,
            id,
            path,
            value,
        }
        | MutationCommand::CreateAndConnect {
            key,
            id,
            path,
            value,
        } => Step::Link {
            key,
            id,
            path,
            value,
        },
        MutationCommand::Disconnect {
            key,
            id,
            path,
            value,
        }
        | MutationCommand::DisconnectAndDelete {
            key,
            id,
            path,
            value,
        } => Step::Unlink {
            kind: command.kind(),
            key,
            id,
            path,
            related: value,
        },
        MutationCommand::Noop => return None,
    })
}

/// Run a step with the given strategy.
pub(crate) fn run<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    step: Step<'_>,
    config: &EngineConfig,
) -> MutationResult<Store> {
    match step {
        Step::Append { key, value } => {
            create::execute_append(rewrite, store, key, value, config.create_missing_collections)
        }
        Step::Remove { key, id } => delete::execute_remove(rewrite, store, key, id),
        Step::MergeRecord { key, id, patch } => {
            update::execute_merge_record(rewrite, store, key, id, patch)
        }
        Step::MergeSingleton { key, patch } => {
            update::execute_merge_singleton(rewrite, store, key, patch)
        }
        Step::Link {
            key,
            id,
            path,
            value,
        } => connect::execute_link(rewrite, store, key, id, path, value),
        Step::Unlink {
            kind,
            key,
            id,
            path,
            related,
        } => disconnect::execute_unlink(rewrite, store, kind, key, id, path, related),
    }
}
