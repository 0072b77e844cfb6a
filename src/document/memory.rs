use super::{Document, DocumentStore, PartialUpdate};
use crate::core::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory document backend with merge-write semantics.
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, HashMap<String, Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in `collection`.
    pub async fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn set_document_merged(
        &self,
        collection: &str,
        id: &str,
        update: PartialUpdate,
    ) -> Result<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .entry(collection.to_string())
            .or_default()
            .entry(id.to_string())
            .or_default();

        for (field, value) in update.into_fields() {
            document.insert(field, value);
        }
        Ok(())
    }
}
