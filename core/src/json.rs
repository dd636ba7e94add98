//! JSON interop.
//!
//! The dispatch and rendering layers exchange plain JSON. Arrays become
//! lists, objects become records; at the store root, arrays become
//! sequence collections and objects become singletons.

use serde_json::{Map, Number, Value as Json};

use crate::{Collection, CoreError, CoreResult, Record, Store, Value};

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "bool",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Value {
    /// Convert a JSON value.
    pub fn from_json(json: &Json) -> CoreResult<Value> {
        Ok(match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if n.is_u64() {
                    // Integers past i64::MAX have no exact representation.
                    return Err(CoreError::UnsupportedNumber(n.to_string()));
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    return Err(CoreError::UnsupportedNumber(n.to_string()));
                }
            }
            Json::String(s) => Value::String(s.clone()),
            Json::Array(items) => Value::list(
                items
                    .iter()
                    .map(Value::from_json)
                    .collect::<CoreResult<Vec<_>>>()?,
            ),
            Json::Object(map) => Value::record(Record::from_json_map(map)?),
        })
    }

    /// Render as JSON. Non-finite floats become null.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
            Value::String(s) => Json::String(s.clone()),
            Value::List(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Record(record) => record.to_json(),
        }
    }
}

impl Record {
    /// Convert a JSON object.
    pub fn from_json(json: &Json) -> CoreResult<Record> {
        match json {
            Json::Object(map) => Record::from_json_map(map),
            other => Err(CoreError::unexpected_shape("record", "object", json_kind(other))),
        }
    }

    fn from_json_map(map: &Map<String, Json>) -> CoreResult<Record> {
        let mut record = Record::new();
        for (name, value) in map {
            record.insert(name.clone(), Value::from_json(value)?);
        }
        Ok(record)
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Store {
    /// Build a store from a JSON object whose entries are arrays of objects
    /// (sequences) or objects (singletons).
    pub fn from_json(json: &Json) -> CoreResult<Store> {
        let Json::Object(map) = json else {
            return Err(CoreError::unexpected_shape("store root", "object", json_kind(json)));
        };

        let mut store = Store::new();
        for (key, entry) in map {
            let collection = match entry {
                Json::Array(items) => {
                    let mut records = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        match item {
                            Json::Object(fields) => records.push(Record::from_json_map(fields)?),
                            other => {
                                return Err(CoreError::unexpected_shape(
                                    format!("{}[{}]", key, i),
                                    "object",
                                    json_kind(other),
                                ))
                            }
                        }
                    }
                    Collection::sequence(records)
                }
                Json::Object(fields) => Collection::singleton(Record::from_json_map(fields)?),
                other => {
                    return Err(CoreError::unexpected_shape(
                        key.clone(),
                        "array or object",
                        json_kind(other),
                    ))
                }
            };
            store = store.with(key.clone(), collection);
        }
        Ok(store)
    }

    /// Parse a store from JSON text.
    pub fn parse(text: &str) -> CoreResult<Store> {
        let json: Json = serde_json::from_str(text)?;
        Store::from_json(&json)
    }

    /// Render the whole store as JSON.
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.iter()
                .map(|(key, collection)| {
                    let json = match collection {
                        Collection::Sequence(records) => {
                            Json::Array(records.iter().map(|r| r.to_json()).collect())
                        }
                        Collection::Singleton(record) => record.to_json(),
                    };
                    (key.to_string(), json)
                })
                .collect(),
        )
    }
}
