use crate::core::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A stored document: a flat map of named fields.
pub type Document = Map<String, Value>;

/// A typed partial update: only the fields explicitly set here are
/// written. Fields absent from the update are left untouched by the
/// merge, which is what keeps sibling data (skills, experiences, ...)
/// safe when one page writes only its own field.
#[derive(Debug, Clone, Default)]
pub struct PartialUpdate {
    fields: Document,
}

impl PartialUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the update. Builder-style so call sites read as
    /// one expression.
    pub fn set(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn fields(&self) -> &Document {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Document {
        self.fields
    }
}

/// Document store trait - allows pluggable document backends
///
/// There is deliberately no whole-document overwrite on this trait: a
/// write that could destroy fields it does not mention cannot be
/// expressed.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document, `None` if it does not exist. A read never
    /// creates the document.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Merge `update` into the document, creating it if absent.
    /// Fields not named in `update` keep their current value.
    async fn set_document_merged(
        &self,
        collection: &str,
        id: &str,
        update: PartialUpdate,
    ) -> Result<()>;
}
