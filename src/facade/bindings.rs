//! Well-known slot bindings.
//!
//! Each page of the app persists into one fixed location: the cart and
//! todo pages into their own key-value keys, the portfolio page into
//! fields of the user's document in the `info` collection. Defining
//! the bindings here keeps the slot names and id prefixes in one
//! place.

use crate::core::{Result, StoreError};
use crate::document::{DocumentStore, PartialUpdate};
use crate::ids::TimestampIdGenerator;
use crate::model::{Experience, Product, Project, TodoTask, UserProfile};
use crate::storage::KeyValueStorage;
use crate::store::PersistedListStore;
use serde_json::Value;
use std::sync::Arc;

pub const CART_KEY: &str = "cart";
pub const TODO_KEY: &str = "todoTasks";
pub const PORTFOLIO_COLLECTION: &str = "info";

/// Cart: the whole content of the `cart` key.
pub fn cart_store(storage: Arc<dyn KeyValueStorage>) -> PersistedListStore<Product> {
    PersistedListStore::bound_to_key(storage, CART_KEY)
}

/// Todo list: the whole content of the `todoTasks` key, managed
/// positionally.
pub fn todo_store(storage: Arc<dyn KeyValueStorage>) -> PersistedListStore<TodoTask> {
    PersistedListStore::bound_to_key(storage, TODO_KEY)
}

/// Projects list: the `projects` field of the user's document.
pub fn projects_store(
    store: Arc<dyn DocumentStore>,
    user_id: &str,
) -> PersistedListStore<Project> {
    PersistedListStore::bound_to_document_field(store, PORTFOLIO_COLLECTION, user_id, "projects")
        .with_id_generator(Arc::new(TimestampIdGenerator::with_prefix("proj")))
}

/// Experiences list: the `experiences` field of the user's document.
pub fn experiences_store(
    store: Arc<dyn DocumentStore>,
    user_id: &str,
) -> PersistedListStore<Experience> {
    PersistedListStore::bound_to_document_field(store, PORTFOLIO_COLLECTION, user_id, "experiences")
        .with_id_generator(Arc::new(TimestampIdGenerator::with_prefix("exp")))
}

/// Skills list: the `skills` field of the user's document. Plain
/// strings, managed positionally.
pub fn skills_store(store: Arc<dyn DocumentStore>, user_id: &str) -> PersistedListStore<String> {
    PersistedListStore::bound_to_document_field(store, PORTFOLIO_COLLECTION, user_id, "skills")
}

/// Merge the scalar profile fields into the user's document. Only the
/// fields present on `profile` are written, so the list fields and any
/// unset optionals keep their stored values.
pub async fn merge_profile(
    store: &dyn DocumentStore,
    user_id: &str,
    profile: &UserProfile,
) -> Result<()> {
    let serialized = serde_json::to_value(profile).map_err(|err| {
        StoreError::PersistenceWrite(format!("Failed to serialize profile: {}", err))
    })?;
    let Value::Object(fields) = serialized else {
        return Err(StoreError::PersistenceWrite(
            "Profile did not serialize to an object".to_string(),
        ));
    };

    let mut update = PartialUpdate::new();
    for (field, value) in fields {
        update = update.set(field, value);
    }
    store
        .set_document_merged(PORTFOLIO_COLLECTION, user_id, update)
        .await
}
