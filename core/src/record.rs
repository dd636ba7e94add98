//! Record structures.
//!
//! A record is one entity instance: an insertion-ordered map from field
//! name to value. Records in a sequence are identified by their `id` field,
//! and every record that passes through the tagger carries `__typename`.

use std::fmt;

use indexmap::IndexMap;

use crate::{Id, Value};

/// Field holding the record identity.
pub const ID_FIELD: &str = "id";

/// Reserved discriminator field injected by the tagger.
pub const TYPENAME_FIELD: &str = "__typename";

/// Type alias for record field storage.
pub type Fields = IndexMap<String, Value>;

/// A keyed map of fields representing one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Fields,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Set a field value, keeping the original position of an existing field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Returns true if the field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Access the underlying field map.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }

    /// The record's identity, if its `id` field is an integer or string.
    pub fn id(&self) -> Option<Id> {
        self.get(ID_FIELD).and_then(Id::from_value)
    }

    /// Check whether this record is the one identified by `id`.
    pub fn has_id(&self, id: &Id) -> bool {
        self.get(ID_FIELD).is_some_and(|value| id.matches(value))
    }

    /// The `__typename` discriminator, if present.
    pub fn typename(&self) -> Option<&Value> {
        self.get(TYPENAME_FIELD)
    }

    /// Set the discriminator explicitly.
    pub fn with_typename(mut self, name: impl Into<String>) -> Self {
        self.insert(TYPENAME_FIELD, Value::String(name.into()));
        self
    }

    /// Shallow merge: every field of `patch` overwrites the same-named field
    /// here, other fields are untouched. Nested records and lists are replaced
    /// whole. A null `__typename` in the patch never erases an existing one.
    pub fn merge(&mut self, patch: &Record) {
        for (name, value) in patch.iter() {
            if name == TYPENAME_FIELD && value.is_null() && self.contains(TYPENAME_FIELD) {
                continue;
            }
            self.fields.insert(name.clone(), value.clone());
        }
    }

    /// The relation list stored under `path`, if that field holds a list.
    pub fn relation(&self, path: &str) -> Option<&[Value]> {
        self.get(path).and_then(Value::as_list)
    }

    /// Mutable access to the relation list under `path`.
    pub fn relation_mut(&mut self, path: &str) -> Option<&mut Vec<Value>> {
        self.fields.get_mut(path).and_then(Value::as_list_mut)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Helper macro to create records.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut record = $crate::Record::new();
            $(
                record.insert($key, $crate::Value::from($value));
            )+
            record
        }
    };
}
