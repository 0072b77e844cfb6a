// ============================================================================
// ListSlot Library
// ============================================================================

//! Persisted list store: keeps a named, ordered collection of records
//! consistent with a client-side persistence target through explicit
//! load / mutate / save cycles.
//!
//! Two slot bindings exist: the whole content of one key of a
//! key-value backend, or one named field of a larger owner document
//! written with merge semantics. The mutation helpers are pure, so
//! callers apply changes in memory first and commit with `save`:
//!
//! ```
//! use listslot::{InMemoryStorage, PersistedListStore, store};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct CartItem { id: i64, price: f64 }
//!
//! # tokio_test::block_on(async {
//! let storage = Arc::new(InMemoryStorage::new());
//! let cart: PersistedListStore<CartItem> =
//!     PersistedListStore::bound_to_key(storage, "cart");
//!
//! // A never-written slot reads as empty.
//! let items = cart.load().await.unwrap();
//! assert!(items.is_empty());
//!
//! let items = store::add_record(&items, CartItem { id: 7, price: 19.99 });
//! cart.save(&items).await.unwrap();
//!
//! assert_eq!(cart.load().await.unwrap(), items);
//! # });
//! ```

pub mod client;
pub mod core;
pub mod document;
pub mod facade;
pub mod ids;
pub mod model;
pub mod slot;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use client::{CatalogClient, RestCrudClient};
pub use crate::core::{ListRecord, RecordId, Result, StoreError};
pub use document::{Document, DocumentStore, InMemoryDocumentStore, PartialUpdate};
pub use ids::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use slot::{DocumentFieldSlot, KeyValueSlot, ListSlot};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage};
pub use store::{PersistedListStore, add_record, remove_by_id, remove_by_index};
