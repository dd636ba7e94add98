//! CONNECT / CREATE_AND_CONNECT - appends to a relation list.

use recache_core::{Id, Record, Store, Value};

use crate::error::MutationResult;
use crate::strategy::Rewrite;

/// Append the tagged `value` to relation `path` of record `id` in `key`.
pub(crate) fn execute_link<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    key: &str,
    id: &Id,
    path: &str,
    value: &Record,
) -> MutationResult<Store> {
    let related = Value::record(value.tagged());
    rewrite.relation(store, key, id, path, |items| {
        items.push(related);
        Ok(())
    })
}
