//! Mutation commands.
//!
//! A command is a tagged union with one variant per mutation kind. Each
//! variant carries exactly the fields its kind needs, so a command that is
//! missing a target id or a relation path cannot be constructed.

use std::fmt;
use std::str::FromStr;

use recache_core::{Id, Record};
use thiserror::Error;

/// The catalogue of mutation kinds, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    CreateArray,
    UpdateArray,
    DeleteArray,
    UpdateObject,
    Connect,
    Disconnect,
    CreateAndConnect,
    DisconnectAndDelete,
    Noop,
}

impl MutationKind {
    pub const ALL: [MutationKind; 9] = [
        MutationKind::CreateArray,
        MutationKind::UpdateArray,
        MutationKind::DeleteArray,
        MutationKind::UpdateObject,
        MutationKind::Connect,
        MutationKind::Disconnect,
        MutationKind::CreateAndConnect,
        MutationKind::DisconnectAndDelete,
        MutationKind::Noop,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::CreateArray => "CREATE_ARRAY",
            MutationKind::UpdateArray => "UPDATE_ARRAY",
            MutationKind::DeleteArray => "DELETE_ARRAY",
            MutationKind::UpdateObject => "UPDATE_OBJECT",
            MutationKind::Connect => "CONNECT",
            MutationKind::Disconnect => "DISCONNECT",
            MutationKind::CreateAndConnect => "CREATE_AND_CONNECT",
            MutationKind::DisconnectAndDelete => "DISCONNECT_AND_DELETE",
            MutationKind::Noop => "NOOP",
        }
    }
}

/// A wire name that matches no mutation kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mutation kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for MutationKind {
    type Err = UnknownKind;

    /// Look up a kind by its exact wire name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownKind(name.to_string()))
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured request describing one state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationCommand {
    /// Append `value` to the sequence at `key`.
    CreateArray { key: String, value: Record },
    /// Shallow-merge `value` into the record `id` of the sequence at `key`.
    UpdateArray { key: String, id: Id, value: Record },
    /// Remove the records with `id` from the sequence at `key`.
    DeleteArray { key: String, id: Id },
    /// Shallow-merge `value` into the singleton at `key`.
    UpdateObject { key: String, value: Record },
    /// Append `value` to relation `path` of record `id` in `key`.
    Connect {
        key: String,
        id: Id,
        path: String,
        value: Record,
    },
    /// Remove the element whose id equals `value`'s id from relation `path`
    /// of record `id` in `key`.
    Disconnect {
        key: String,
        id: Id,
        path: String,
        value: Record,
    },
    /// Same effect as `Connect`.
    CreateAndConnect {
        key: String,
        id: Id,
        path: String,
        value: Record,
    },
    /// Same effect as `Disconnect`. Removing the referenced record from its
    /// owning collection needs a separate `DeleteArray`.
    DisconnectAndDelete {
        key: String,
        id: Id,
        path: String,
        value: Record,
    },
    /// Leaves the store unchanged.
    Noop,
}

impl MutationCommand {
    pub fn create_array(key: impl Into<String>, value: Record) -> Self {
        Self::CreateArray {
            key: key.into(),
            value,
        }
    }

    pub fn update_array(key: impl Into<String>, id: impl Into<Id>, value: Record) -> Self {
        Self::UpdateArray {
            key: key.into(),
            id: id.into(),
            value,
        }
    }

    pub fn delete_array(key: impl Into<String>, id: impl Into<Id>) -> Self {
        Self::DeleteArray {
            key: key.into(),
            id: id.into(),
        }
    }

    pub fn update_object(key: impl Into<String>, value: Record) -> Self {
        Self::UpdateObject {
            key: key.into(),
            value,
        }
    }

    pub fn connect(
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        value: Record,
    ) -> Self {
        Self::Connect {
            key: key.into(),
            id: id.into(),
            path: path.into(),
            value,
        }
    }

    pub fn disconnect(
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        value: Record,
    ) -> Self {
        Self::Disconnect {
            key: key.into(),
            id: id.into(),
            path: path.into(),
            value,
        }
    }

    pub fn create_and_connect(
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        value: Record,
    ) -> Self {
        Self::CreateAndConnect {
            key: key.into(),
            id: id.into(),
            path: path.into(),
            value,
        }
    }

    pub fn disconnect_and_delete(
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        value: Record,
    ) -> Self {
        Self::DisconnectAndDelete {
            key: key.into(),
            id: id.into(),
            path: path.into(),
            value,
        }
    }

    /// The kind of this command.
    pub fn kind(&self) -> MutationKind {
        match self {
            MutationCommand::CreateArray { .. } => MutationKind::CreateArray,
            MutationCommand::UpdateArray { .. } => MutationKind::UpdateArray,
            MutationCommand::DeleteArray { .. } => MutationKind::DeleteArray,
            MutationCommand::UpdateObject { .. } => MutationKind::UpdateObject,
            MutationCommand::Connect { .. } => MutationKind::Connect,
            MutationCommand::Disconnect { .. } => MutationKind::Disconnect,
            MutationCommand::CreateAndConnect { .. } => MutationKind::CreateAndConnect,
            MutationCommand::DisconnectAndDelete { .. } => MutationKind::DisconnectAndDelete,
            MutationCommand::Noop => MutationKind::Noop,
        }
    }

    /// The target collection key, if the command has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            MutationCommand::CreateArray { key, .. }
            | MutationCommand::UpdateArray { key, .. }
            | MutationCommand::DeleteArray { key, .. }
            | MutationCommand::UpdateObject { key, .. }
            | MutationCommand::Connect { key, .. }
            | MutationCommand::Disconnect { key, .. }
            | MutationCommand::CreateAndConnect { key, .. }
            | MutationCommand::DisconnectAndDelete { key, .. } => Some(key),
            MutationCommand::Noop => None,
        }
    }

    /// Returns true for commands that leave every store unchanged.
    pub fn is_noop(&self) -> bool {
        matches!(self, MutationCommand::Noop)
    }
}
