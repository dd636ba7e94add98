//! DELETE_ARRAY - removes records from a sequence by id.

use recache_core::{Id, Store};

use crate::error::MutationResult;
use crate::strategy::Rewrite;

/// Remove every record with `id` from the sequence at `key`, keeping the
/// order of the rest. Removing an absent id leaves the records as they were.
pub(crate) fn execute_remove<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    key: &str,
    id: &Id,
) -> MutationResult<Store> {
    rewrite.sequence(store, key, false, |records| {
        records.retain(|record| !record.has_id(id));
        Ok(())
    })
}
