//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MutationError, MutationResult};

/// How a mutation reaches and rewrites the part of the store it edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Rebuild the touched path functionally, sharing everything else.
    #[default]
    Structural,
    /// Record edits on a copy-on-write draft, then finalise it.
    Draft,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Structural => "structural",
            Strategy::Draft => "draft",
        }
    }
}

/// Configuration for the mutation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Evaluation strategy.
    pub strategy: Strategy,
    /// Let `CREATE_ARRAY` create an absent sequence instead of failing
    /// with `MissingKey`.
    pub create_missing_collections: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Structural,
            create_missing_collections: true,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration using the draft strategy.
    pub fn draft() -> Self {
        Self::default().with_strategy(Strategy::Draft)
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_create_missing_collections(mut self, enabled: bool) -> Self {
        self.create_missing_collections = enabled;
        self
    }

    /// Load a configuration from JSON text. Absent fields keep their defaults.
    pub fn from_json(text: &str) -> MutationResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| MutationError::malformed_payload("config", e.to_string()))
    }
}
