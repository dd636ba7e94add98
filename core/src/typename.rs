//! Typename tagging.
//!
//! Every record reachable from a store after a value-carrying mutation
//! carries a `__typename` discriminator. Tagging never changes a
//! discriminator that is already present, so it is idempotent.

use std::sync::Arc;

use crate::{Record, Value, TYPENAME_FIELD};

/// Tag every record in `value`, recursing through record fields and list
/// elements. Scalars pass through unchanged.
pub fn tag(value: &Value) -> Value {
    match value {
        Value::Record(record) => Value::Record(Arc::new(record.tagged())),
        Value::List(items) => Value::List(Arc::new(items.iter().map(tag).collect())),
        scalar => scalar.clone(),
    }
}

impl Record {
    /// A copy of this record with `__typename` defaulted to null where
    /// absent, applied recursively to nested records and lists.
    pub fn tagged(&self) -> Record {
        let mut out = Record::new();
        for (name, value) in self.iter() {
            out.fields_mut().insert(name.clone(), tag(value));
        }
        if !out.contains(TYPENAME_FIELD) {
            out.insert(TYPENAME_FIELD, Value::Null);
        }
        out
    }

    /// Returns true if this record and everything nested in it is tagged.
    pub fn is_tagged(&self) -> bool {
        self.contains(TYPENAME_FIELD) && self.iter().all(|(_, value)| is_tagged(value))
    }
}

/// Returns true if every record inside `value` carries `__typename`.
pub fn is_tagged(value: &Value) -> bool {
    match value {
        Value::Record(record) => record.is_tagged(),
        Value::List(items) => items.iter().all(is_tagged),
        _ => true,
    }
}
