//! Persisted List Store
//!
//! Keeps an in-memory list synchronized with one [`ListSlot`] through
//! explicit `load` and `save` calls. The store is stateless between
//! calls: every operation is a function of its inputs plus the slot's
//! current content.
//!
//! The list-mutation helpers ([`add_record`], [`remove_by_id`],
//! [`remove_by_index`]) are pure and do not persist anything, so a UI
//! caller can apply the mutation in memory first and commit it with
//! `save` afterwards. A failed `save` does not roll the caller's list
//! back; retry or discard is the caller's policy.
//!
//! The store performs no sequencing of overlapping saves. Two saves
//! issued back-to-back without awaiting the first land in whatever
//! order the backend provides, and each caller computes its
//! replacement list from its own (possibly stale) snapshot. Positional
//! removal inherits the same limit: an index is only a stable handle
//! within one synchronous update, not across an await.

use crate::core::{ListRecord, RecordId, Result, StoreError};
use crate::document::DocumentStore;
use crate::ids::{IdGenerator, TimestampIdGenerator};
use crate::slot::{DocumentFieldSlot, KeyValueSlot, ListSlot};
use crate::storage::KeyValueStorage;
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct PersistedListStore<R> {
    slot: Arc<dyn ListSlot>,
    ids: Arc<dyn IdGenerator>,
    _record: PhantomData<fn() -> R>,
}

impl<R> PersistedListStore<R>
where
    R: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(slot: Arc<dyn ListSlot>) -> Self {
        Self {
            slot,
            ids: Arc::new(TimestampIdGenerator::new()),
            _record: PhantomData,
        }
    }

    /// Store over the whole content of one key of a key-value backend.
    pub fn bound_to_key(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self::new(Arc::new(KeyValueSlot::new(storage, key)))
    }

    /// Store over one named field of an owner document. Saves merge
    /// that field only; sibling fields of the document are untouched.
    pub fn bound_to_document_field(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        document_id: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::new(Arc::new(DocumentFieldSlot::new(
            store,
            collection,
            document_id,
            field,
        )))
    }

    /// Replace the id generator (e.g. a sequential one in tests).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Generate a fresh identifier for a record about to be added.
    pub fn new_id(&self) -> RecordId {
        self.ids.next_id()
    }

    /// Read the slot. An absent slot is the empty list and nothing is
    /// written. The result is the caller's own copy; mutating it does
    /// not affect the store until `save`.
    pub async fn load(&self) -> Result<Vec<R>> {
        match self.slot.read().await? {
            Some(value) => {
                let list: Vec<R> = serde_json::from_value(value)?;
                debug!("loaded {} record(s)", list.len());
                Ok(list)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Persist `list` as the complete replacement content of the slot.
    /// After a successful save, a `load` on this slot returns an equal
    /// list.
    pub async fn save(&self, list: &[R]) -> Result<()> {
        let value = serde_json::to_value(list)
            .map_err(|err| StoreError::PersistenceWrite(format!("Failed to serialize list: {}", err)))?;
        self.slot.write(value).await?;
        debug!("saved {} record(s)", list.len());
        Ok(())
    }
}

/// Returns `current` with `record` appended. Assigning an identifier
/// to `record` beforehand is the caller's job when it is not already
/// set.
pub fn add_record<R: Clone>(current: &[R], record: R) -> Vec<R> {
    let mut next = current.to_vec();
    next.push(record);
    next
}

/// Returns `current` without the elements whose identifier equals
/// `id`. An id not present in the list is a no-op, not an error.
pub fn remove_by_id<R: ListRecord>(current: &[R], id: &RecordId) -> Vec<R> {
    current
        .iter()
        .filter(|record| record.record_id() != *id)
        .cloned()
        .collect()
}

/// Returns `current` without the element at `index`. Fails with
/// `IndexOutOfRange` outside `[0, len)`; persisted state is never
/// touched either way.
pub fn remove_by_index<R: Clone>(current: &[R], index: usize) -> Result<Vec<R>> {
    if index >= current.len() {
        return Err(StoreError::IndexOutOfRange {
            index,
            len: current.len(),
        });
    }
    let mut next = current.to_vec();
    next.remove(index);
    Ok(next)
}
