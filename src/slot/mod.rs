//! List Slots
//!
//! A slot is the named persistence location backing one persisted
//! list. Two bindings exist: the whole content of one key-value entry
//! (`KeyValueSlot`), or one named field of a larger owner document
//! (`DocumentFieldSlot`). Slots are created lazily on first write and
//! never destroyed by the store.

use crate::core::{Result, StoreError};
use crate::document::{DocumentStore, PartialUpdate};
use crate::storage::KeyValueStorage;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A named persistence location holding one JSON value (the serialized
/// list). `read` of an absent slot is `Ok(None)` and must not create
/// anything.
#[async_trait]
pub trait ListSlot: Send + Sync {
    async fn read(&self) -> Result<Option<Value>>;

    async fn write(&self, list: Value) -> Result<()>;
}

/// Slot bound to a single key of a key-value backend. The serialized
/// list is the entire content of the key.
pub struct KeyValueSlot {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
}

impl KeyValueSlot {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl ListSlot for KeyValueSlot {
    async fn read(&self) -> Result<Option<Value>> {
        match self.storage.get(&self.key).await? {
            Some(text) => {
                let value = serde_json::from_str(&text).map_err(|err| {
                    StoreError::Deserialization(format!(
                        "Stored content under key '{}' is not valid JSON: {}",
                        self.key, err
                    ))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn write(&self, list: Value) -> Result<()> {
        let text = serde_json::to_string(&list).map_err(|err| {
            StoreError::PersistenceWrite(format!(
                "Failed to serialize list for key '{}': {}",
                self.key, err
            ))
        })?;
        self.storage.set(&self.key, &text).await
    }
}

/// Slot bound to one field of an owner document. Writes only ever
/// merge that single field, so sibling fields of the document are
/// preserved by construction.
pub struct DocumentFieldSlot {
    store: Arc<dyn DocumentStore>,
    collection: String,
    document_id: String,
    field: String,
}

impl DocumentFieldSlot {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        document_id: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            document_id: document_id.into(),
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

#[async_trait]
impl ListSlot for DocumentFieldSlot {
    async fn read(&self) -> Result<Option<Value>> {
        let document = self
            .store
            .get_document(&self.collection, &self.document_id)
            .await?;
        // Missing document and missing field both read as an absent slot.
        Ok(document.and_then(|doc| doc.get(&self.field).cloned()))
    }

    async fn write(&self, list: Value) -> Result<()> {
        let update = PartialUpdate::new().set(self.field.clone(), list);
        self.store
            .set_document_merged(&self.collection, &self.document_id, update)
            .await
    }
}
