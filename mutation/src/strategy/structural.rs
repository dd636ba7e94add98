//! Structural-sharing strategy.
//!
//! The touched path (root map, collection, record, relation list) is
//! rebuilt as fresh nodes; every sibling keeps pointing at the node the
//! input store holds.

use std::sync::Arc;

use recache_core::{Collection, Id, Record, Store, Value};

use super::{locate, relation_of, sequence_at, singleton_at, Rewrite};
use crate::error::{MutationError, MutationResult};

pub(crate) struct StructuralRewrite;

impl StructuralRewrite {
    /// Replace record `index` of the sequence at `key` with `record`.
    fn replace_record(
        store: &Store,
        key: &str,
        records: &[Arc<Record>],
        index: usize,
        record: Record,
    ) -> Store {
        let mut rebuilt = records.to_vec();
        rebuilt[index] = Arc::new(record);
        store.with_collection(key, Collection::Sequence(Arc::new(rebuilt)))
    }
}

impl Rewrite for StructuralRewrite {
    fn sequence<F>(
        &self,
        store: &Store,
        key: &str,
        create_missing: bool,
        edit: F,
    ) -> MutationResult<Store>
    where
        F: FnOnce(&mut Vec<Arc<Record>>) -> MutationResult<()>,
    {
        let mut rebuilt = match sequence_at(store, key)? {
            Some(records) => records.to_vec(),
            None if create_missing => Vec::new(),
            None => return Err(MutationError::missing_key(key)),
        };
        edit(&mut rebuilt)?;
        Ok(store.with_collection(key, Collection::Sequence(Arc::new(rebuilt))))
    }

    fn singleton<F>(&self, store: &Store, key: &str, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>,
    {
        let mut rebuilt = singleton_at(store, key)?.clone();
        edit(&mut rebuilt)?;
        Ok(store.with_collection(key, Collection::singleton(rebuilt)))
    }

    fn record<F>(&self, store: &Store, key: &str, id: &Id, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>,
    {
        let (records, index) = locate(store, key, id)?;
        let mut rebuilt = Record::clone(&records[index]);
        edit(&mut rebuilt)?;
        Ok(Self::replace_record(store, key, records, index, rebuilt))
    }

    fn relation<F>(
        &self,
        store: &Store,
        key: &str,
        id: &Id,
        path: &str,
        edit: F,
    ) -> MutationResult<Store>
    where
        F: FnOnce(&mut Vec<Value>) -> MutationResult<()>,
    {
        let (records, index) = locate(store, key, id)?;
        let owner = &records[index];

        let mut items = relation_of(owner, key, id, path)?.to_vec();
        edit(&mut items)?;

        let mut rebuilt = Record::clone(owner);
        rebuilt.insert(path, Value::list(items));
        Ok(Self::replace_record(store, key, records, index, rebuilt))
    }
}
