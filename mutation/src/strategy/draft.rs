//! Copy-on-write draft strategy.
//!
//! The input store is cloned into a draft (O(1)); edits go through
//! `Arc::make_mut` along the path, which detaches exactly the nodes being
//! written while every other holder keeps the original. The finished draft
//! is returned as the new store and is never handed out while mutable.

use std::sync::Arc;

use recache_core::{Collection, Id, Record, Shape, Store, Value};

use super::{locate, relation_of, sequence_at, singleton_at, Rewrite};
use crate::error::{MutationError, MutationResult};

pub(crate) struct DraftRewrite;

impl DraftRewrite {
    /// Mutable access to the sequence at `key`, created empty when absent.
    fn sequence_mut<'d>(draft: &'d mut Store, key: &str) -> MutationResult<&'d mut Vec<Arc<Record>>> {
        let collection = draft
            .collections_mut()
            .entry(key.to_string())
            .or_insert_with(Collection::empty_sequence);
        let actual = collection.shape();
        collection
            .sequence_mut()
            .ok_or_else(|| MutationError::shape_mismatch(key, Shape::Sequence, actual))
    }
}

impl Rewrite for DraftRewrite {
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
        if sequence_at(store, key)?.is_none() && !create_missing {
            return Err(MutationError::missing_key(key));
        }

        let mut draft = store.clone();
        edit(Self::sequence_mut(&mut draft, key)?)?;
        Ok(draft)
    }

    fn singleton<F>(&self, store: &Store, key: &str, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>,
    {
        singleton_at(store, key)?;

        let mut draft = store.clone();
        let record = draft
            .collections_mut()
            .get_mut(key)
            .and_then(Collection::singleton_mut)
            .ok_or_else(|| MutationError::missing_key(key))?;
        edit(record)?;
        Ok(draft)
    }

    fn record<F>(&self, store: &Store, key: &str, id: &Id, edit: F) -> MutationResult<Store>
    where
        F: FnOnce(&mut Record) -> MutationResult<()>,
    {
        let (_, index) = locate(store, key, id)?;

        let mut draft = store.clone();
        let records = Self::sequence_mut(&mut draft, key)?;
        edit(Arc::make_mut(&mut records[index]))?;
        Ok(draft)
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
        relation_of(&records[index], key, id, path)?;

        let mut draft = store.clone();
        let records = Self::sequence_mut(&mut draft, key)?;
        let items = Arc::make_mut(&mut records[index])
            .relation_mut(path)
            .ok_or_else(|| MutationError::missing_relation(key, id, path))?;
        edit(items)?;
        Ok(draft)
    }
}
