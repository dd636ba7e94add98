//! Action wire form.
//!
//! The dispatch layer hands mutations over as
//! `{"type": "<KIND>", "payload": {"key", "id", "value", "path"}}`.
//! Unknown types decode to `Noop`; missing or wrong-shaped payload fields
//! are reported as `MalformedPayload`.

use recache_core::{Id, Record, Value};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use tracing::warn;

use crate::command::{MutationCommand, MutationKind};
use crate::error::{MutationError, MutationResult};

/// A dispatched action as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: ActionPayload,
}

/// The loosely-typed payload of an action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Field extraction bound to the kind being decoded, for error reporting.
struct Fields<'a> {
    kind: MutationKind,
    payload: &'a ActionPayload,
}

impl Fields<'_> {
    fn malformed(&self, message: impl Into<String>) -> MutationError {
        MutationError::malformed_payload(self.kind.as_str(), message)
    }

    fn key(&self) -> MutationResult<String> {
        self.payload
            .key
            .clone()
            .ok_or_else(|| self.malformed("missing `key`"))
    }

    fn path(&self) -> MutationResult<String> {
        self.payload
            .path
            .clone()
            .ok_or_else(|| self.malformed("missing `path`"))
    }

    fn id(&self) -> MutationResult<Id> {
        match &self.payload.id {
            Some(Json::String(s)) => Ok(Id::Str(s.clone())),
            Some(Json::Number(n)) => n
                .as_i64()
                .map(Id::Int)
                .ok_or_else(|| self.malformed(format!("`id` {} is not an integer", n))),
            Some(other) => Err(self.malformed(format!("`id` must be a string or integer, got {}", other))),
            None => Err(self.malformed("missing `id`")),
        }
    }

    fn value(&self) -> MutationResult<Record> {
        let json = self
            .payload
            .value
            .as_ref()
            .ok_or_else(|| self.malformed("missing `value`"))?;
        match Value::from_json(json)? {
            Value::Record(record) => Ok(Record::clone(&record)),
            other => Err(self.malformed(format!("`value` must be an object, got {}", other.type_name()))),
        }
    }
}

impl MutationCommand {
    /// Decode a dispatched action.
    pub fn from_action(action: &Action) -> MutationResult<MutationCommand> {
        let kind = match action.kind.parse::<MutationKind>() {
            Ok(kind) => kind,
            Err(unknown) => {
                warn!(error = %unknown, "treating as NOOP");
                return Ok(MutationCommand::Noop);
            }
        };

        let fields = Fields {
            kind,
            payload: &action.payload,
        };

        Ok(match kind {
            MutationKind::CreateArray => MutationCommand::CreateArray {
                key: fields.key()?,
                value: fields.value()?,
            },
            MutationKind::UpdateArray => MutationCommand::UpdateArray {
                key: fields.key()?,
                id: fields.id()?,
                value: fields.value()?,
            },
            MutationKind::DeleteArray => MutationCommand::DeleteArray {
                key: fields.key()?,
                id: fields.id()?,
            },
            MutationKind::UpdateObject => MutationCommand::UpdateObject {
                key: fields.key()?,
                value: fields.value()?,
            },
            MutationKind::Connect => MutationCommand::Connect {
                key: fields.key()?,
                id: fields.id()?,
                path: fields.path()?,
                value: fields.value()?,
            },
            MutationKind::Disconnect => MutationCommand::Disconnect {
                key: fields.key()?,
                id: fields.id()?,
                path: fields.path()?,
                value: fields.value()?,
            },
            MutationKind::CreateAndConnect => MutationCommand::CreateAndConnect {
                key: fields.key()?,
                id: fields.id()?,
                path: fields.path()?,
                value: fields.value()?,
            },
            MutationKind::DisconnectAndDelete => MutationCommand::DisconnectAndDelete {
                key: fields.key()?,
                id: fields.id()?,
                path: fields.path()?,
                value: fields.value()?,
            },
            MutationKind::Noop => MutationCommand::Noop,
        })
    }

    /// Decode an action from a JSON value.
    pub fn from_json(json: &Json) -> MutationResult<MutationCommand> {
        let action = Action::deserialize(json)
            .map_err(|e| MutationError::malformed_payload("action", e.to_string()))?;
        Self::from_action(&action)
    }

    /// Decode an action from JSON text.
    pub fn parse(text: &str) -> MutationResult<MutationCommand> {
        let action: Action = serde_json::from_str(text)
            .map_err(|e| MutationError::malformed_payload("action", e.to_string()))?;
        Self::from_action(&action)
    }

    /// Encode this command in the action wire form.
    pub fn to_action(&self) -> Action {
        let mut payload = ActionPayload::default();
        match self {
            MutationCommand::CreateArray { key, value }
            | MutationCommand::UpdateObject { key, value } => {
                payload.key = Some(key.clone());
                payload.value = Some(value.to_json());
            }
            MutationCommand::UpdateArray { key, id, value } => {
                payload.key = Some(key.clone());
                payload.id = Some(id.to_value().to_json());
                payload.value = Some(value.to_json());
            }
            MutationCommand::DeleteArray { key, id } => {
                payload.key = Some(key.clone());
                payload.id = Some(id.to_value().to_json());
            }
            MutationCommand::Connect {
                key,
                id,
                path,
                value,
            }
            | MutationCommand::Disconnect {
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
            }
            | MutationCommand::DisconnectAndDelete {
                key,
                id,
                path,
                value,
            } => {
                payload.key = Some(key.clone());
                payload.id = Some(id.to_value().to_json());
                payload.path = Some(path.clone());
                payload.value = Some(value.to_json());
            }
            MutationCommand::Noop => {}
        }
        Action {
            kind: self.kind().as_str().to_string(),
            payload,
        }
    }
}
