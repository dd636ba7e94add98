//! UPDATE_ARRAY / UPDATE_OBJECT - shallow-merges a payload into a record.

use recache_core::{Id, Record, Store};

use crate::error::MutationResult;
use crate::strategy::Rewrite;

/// Merge the tagged `patch` into the first record with `id` in `key`.
pub(crate) fn execute_merge_record<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    key: &str,
    id: &Id,
    patch: &Record,
) -> MutationResult<Store> {
    let patch = patch.tagged();
    rewrite.record(store, key, id, |record| {
        record.merge(&patch);
        Ok(())
    })
}

/// Merge the tagged `patch` into the singleton at `key`.
pub(crate) fn execute_merge_singleton<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    key: &str,
    patch: &Record,
) -> MutationResult<Store> {
    let patch = patch.tagged();
    rewrite.singleton(store, key, |record| {
        record.merge(&patch);
        Ok(())
    })
}
