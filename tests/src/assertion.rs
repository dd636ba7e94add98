//! Assertion types and builders for verifying step results.

use recache_core::{Id, Record, Store, Value};

use crate::error::{ScenarioError, ScenarioResult};

/// A single check against the store a step produced.
#[derive(Debug, Clone)]
enum Check {
    Len { key: String, len: usize },
    Has { key: String, id: Id },
    Missing { key: String, id: Id },
    Field {
        key: String,
        id: Option<Id>,
        name: String,
        value: Value,
    },
    Linked {
        key: String,
        id: Id,
        path: String,
        related: Id,
        expected: bool,
    },
    Shares { key: String },
}

/// A complete assertion for a step result.
#[derive(Debug, Clone, Default)]
pub struct Assertion {
    checks: Vec<Check>,
    /// Expect the step to fail with a message containing this text.
    error: Option<String>,
    /// Expect the step to hand back the very same store.
    unchanged: bool,
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sequence at `key` holds `len` records.
    pub fn len(mut self, key: impl Into<String>, len: usize) -> Self {
        self.checks.push(Check::Len {
            key: key.into(),
            len,
        });
        self
    }

    /// The sequence at `key` holds a record with `id`.
    pub fn has(mut self, key: impl Into<String>, id: impl Into<Id>) -> Self {
        self.checks.push(Check::Has {
            key: key.into(),
            id: id.into(),
        });
        self
    }

    /// The sequence at `key` holds no record with `id`.
    pub fn missing(mut self, key: impl Into<String>, id: impl Into<Id>) -> Self {
        self.checks.push(Check::Missing {
            key: key.into(),
            id: id.into(),
        });
        self
    }

    /// Field `name` of record `id` in `key` equals `value`.
    pub fn field(
        mut self,
        key: impl Into<String>,
        id: impl Into<Id>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.checks.push(Check::Field {
            key: key.into(),
            id: Some(id.into()),
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Field `name` of the singleton at `key` equals `value`.
    pub fn singleton_field(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.checks.push(Check::Field {
            key: key.into(),
            id: None,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Relation `path` of record `id` in `key` holds an element with `related`.
    pub fn linked(
        self,
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        related: impl Into<Id>,
    ) -> Self {
        self.link_check(key.into(), id.into(), path.into(), related.into(), true)
    }

    /// Relation `path` of record `id` in `key` holds no element with `related`.
    pub fn not_linked(
        self,
        key: impl Into<String>,
        id: impl Into<Id>,
        path: impl Into<String>,
        related: impl Into<Id>,
    ) -> Self {
        self.link_check(key.into(), id.into(), path.into(), related.into(), false)
    }

    fn link_check(mut self, key: String, id: Id, path: String, related: Id, expected: bool) -> Self {
        self.checks.push(Check::Linked {
            key,
            id,
            path,
            related,
            expected,
        });
        self
    }

    /// The collection at `key` was shared with the previous store.
    pub fn shares(mut self, key: impl Into<String>) -> Self {
        self.checks.push(Check::Shares { key: key.into() });
        self
    }

    /// The step returns the input store itself.
    pub fn unchanged(mut self) -> Self {
        self.unchanged = true;
        self
    }

    /// The step fails with an error whose message contains `text`.
    pub fn error(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }

    /// Verify the assertion against a step result.
    pub fn verify(
        &self,
        step: &str,
        before: &Store,
        result: &Result<Store, String>,
    ) -> ScenarioResult<()> {
        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                )),
            };
        }

        let after = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        if self.unchanged && !Store::ptr_eq(before, after) {
            return Err(ScenarioError::assertion_failed(
                step,
                "expected the input store to be returned unchanged",
            ));
        }

        for check in &self.checks {
            verify_check(step, check, before, after)?;
        }
        Ok(())
    }
}

fn verify_check(step: &str, check: &Check, before: &Store, after: &Store) -> ScenarioResult<()> {
    let fail = |message: String| Err(ScenarioError::assertion_failed(step, message));

    match check {
        Check::Len { key, len } => {
            let actual = after.get(key).map(|c| c.len());
            if actual != Some(*len) {
                return fail(format!("expected {} records in '{}', got {:?}", len, key, actual));
            }
        }
        Check::Has { key, id } => {
            if find(after, key, id).is_none() {
                return fail(format!("expected record {} in '{}'", id, key));
            }
        }
        Check::Missing { key, id } => {
            if find(after, key, id).is_some() {
                return fail(format!("expected no record {} in '{}'", id, key));
            }
        }
        Check::Field {
            key,
            id,
            name,
            value,
        } => {
            let record = match id {
                Some(id) => find(after, key, id),
                None => after.get(key).and_then(|c| c.as_singleton()),
            };
            let actual = record.and_then(|r| r.get(name));
            if actual != Some(value) {
                return fail(format!(
                    "expected {}.{} = {}, got {:?}",
                    key, name, value, actual
                ));
            }
        }
        Check::Linked {
            key,
            id,
            path,
            related,
            expected,
        } => {
            let items = find(after, key, id).and_then(|r| r.relation(path));
            let Some(items) = items else {
                return fail(format!("record {} in '{}' has no relation '{}'", id, key, path));
            };
            let present = items
                .iter()
                .any(|item| item.as_record().is_some_and(|r| r.has_id(related)));
            if present != *expected {
                return fail(format!(
                    "expected {} {}linked from {}.{}",
                    related,
                    if *expected { "" } else { "not " },
                    id,
                    path
                ));
            }
        }
        Check::Shares { key } => {
            if !Store::shares_collection(before, after, key) {
                return fail(format!("expected collection '{}' to be shared", key));
            }
        }
    }
    Ok(())
}

fn find<'s>(store: &'s Store, key: &str, id: &Id) -> Option<&'s Record> {
    store.get(key).and_then(|c| c.find(id))
}

