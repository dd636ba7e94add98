//! CREATE_ARRAY - appends a record to a sequence.

use std::sync::Arc;

use recache_core::{Record, Store};

use crate::error::MutationResult;
use crate::strategy::Rewrite;

/// Append the tagged `value` to the end of the sequence at `key`.
pub(crate) fn execute_append<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    key: &str,
    value: &Record,
    create_missing: bool,
) -> MutationResult<Store> {
    let record = Arc::new(value.tagged());
    rewrite.sequence(store, key, create_missing, |records| {
        records.push(record);
        Ok(())
    })
}
