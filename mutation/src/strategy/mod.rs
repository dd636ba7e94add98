//! Evaluation strategies.
//!
//! A strategy decides how the container a step edits is reached and how
//! the new store is assembled around the edit. The edit itself is shared
//! code in `ops/`, so the two strategies cannot diverge in semantics:
//! - `structural` - rebuild the touched path, share the rest
//! - `draft` - copy-on-write draft finalised into a new store

mod draft;
mod structural;

use std::sync::Arc;

use recache_core::{Collection, Id, Record, Shape, Store, Value};

use crate::error::{MutationError, MutationResult};

pub(crate) use draft::DraftRewrite;
pub(crate) use structural::StructuralRewrite;

/// Navigation over a store, parameterised by the edit to apply at the end.
///
/// Every method validates the whole path before producing a new store.
/// On error the input store is untouched and no replacement is returned.
pub(crate) trait Rewrite {
    /// Edit the record list of the sequence at `key`.
    fn sequence<F>(
        &self,
        store: &Store,
        key: &str,
        create_missing: bool,
        edit: F,
    ) -> MutationResult<Store>
    where
        F: FnOnce(&mut Vec<Arc<Record>>) -> MutationResult<()>;

    /// Edit the singleton record at `key`.
    fn singleton<F>(&self, store: &Store, key: &str, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>;

    /// Edit the first record with `id` in the sequence at `key`.
    fn record<F>(&self, store: &Store, key: &str, id: &Id, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>;

    /// Edit the relation list `path` of record `id` in the sequence at `key`.
    fn relation<F>(
        &self,
        store: &Store,
        key: &str,
        id: &Id,
        path: &str,
        edit: F,
    ) -> MutationResult<Store>
    where
        F: FnOnce(&mut Vec<Value>) -> MutationResult<()>;
}

/// Resolve the sequence at `key`. `Ok(None)` means the key is absent.
fn sequence_at<'s>(store: &'s Store, key: &str) -> MutationResult<Option<&'s [Arc<Record>]>> {
    match store.get(key) {
        None => Ok(None),
        Some(Collection::Sequence(records)) => Ok(Some(records)),
        Some(other) => Err(MutationError::shape_mismatch(
            key,
            Shape::Sequence,
            other.shape(),
        )),
    }
}

/// Resolve the sequence at `key`, failing when absent.
fn existing_sequence<'s>(store: &'s Store, key: &str) -> MutationResult<&'s [Arc<Record>]> {
    sequence_at(store, key)?.ok_or_else(|| MutationError::missing_key(key))
}

/// Resolve the singleton at `key`.
fn singleton_at<'s>(store: &'s Store, key: &str) -> MutationResult<&'s Record> {
    match store.get(key) {
        None => Err(MutationError::missing_key(key)),
        Some(Collection::Singleton(record)) => Ok(record),
        Some(other) => Err(MutationError::shape_mismatch(
            key,
            Shape::Singleton,
            other.shape(),
        )),
    }
}

/// Resolve the sequence at `key` and the index of its first record with
/// `id`. Later records sharing the id are never reached.
fn locate<'s>(store: &'s Store, key: &str, id: &Id) -> MutationResult<(&'s [Arc<Record>], usize)> {
    let records = existing_sequence(store, key)?;
    let index = store
        .get(key)
        .and_then(|collection| collection.position(id))
        .ok_or_else(|| MutationError::record_not_found(key, id))?;
    Ok((records, index))
}

/// Checked lookup of a relation list on a record.
fn relation_of<'r>(record: &'r Record, key: &str, id: &Id, path: &str) -> MutationResult<&'r [Value]> {
    record
        .relation(path)
        .ok_or_else(|| MutationError::missing_relation(key, id, path))
}
