//! DISCONNECT / DISCONNECT_AND_DELETE - removes from a relation list.
//!
//! Elements are matched against the payload's id, not the owner's id.
//! The referenced record stays in its own collection; callers pair this
//! with DELETE_ARRAY when it should go too.

use recache_core::{Id, Record, Store};

use crate::command::MutationKind;
use crate::error::{MutationError, MutationResult};
use crate::strategy::Rewrite;

/// Remove from relation `path` of record `id` in `key` every element whose
/// id equals `related`'s id.
pub(crate) fn execute_unlink<R: Rewrite>(
    rewrite: &R,
    store: &Store,
    kind: MutationKind,
    key: &str,
    id: &Id,
    path: &str,
    related: &Record,
) -> MutationResult<Store> {
    let related_id = related.id().ok_or_else(|| {
        MutationError::malformed_payload(kind.as_str(), "`value` has no integer or string `id`")
    })?;

    rewrite.relation(store, key, id, path, |items| {
        items.retain(|item| !item.as_record().is_some_and(|r| r.has_id(&related_id)));
        Ok(())
    })
}
