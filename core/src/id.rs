//! Record identity.
//!
//! Records inside a sequence are addressed by their `id` field. Ids are
//! caller-defined; integers and strings are the two shapes that take part
//! in identity comparison.

use std::fmt;

use crate::Value;

/// Identifier of a record within a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Id {
    /// Numeric id.
    Int(i64),
    /// String id.
    Str(String),
}

impl Id {
    /// Extract an id from a field value. Only integers and strings qualify.
    pub fn from_value(value: &Value) -> Option<Id> {
        match value {
            Value::Int(i) => Some(Id::Int(*i)),
            Value::String(s) => Some(Id::Str(s.clone())),
            _ => None,
        }
    }

    /// Check whether a field value carries this id.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Id::Int(a), Value::Int(b)) => a == b,
            (Id::Str(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    /// Convert back into a field value.
    pub fn to_value(&self) -> Value {
        match self {
            Id::Int(i) => Value::Int(*i),
            Id::Str(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(i) => write!(f, "{}", i),
            Id::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i64> for Id {
    fn from(i: i64) -> Self {
        Id::Int(i)
    }
}

impl From<i32> for Id {
    fn from(i: i32) -> Self {
        Id::Int(i as i64)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Str(s)
    }
}
