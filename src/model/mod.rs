//! Domain record types for the pages the store serves: product catalog
//! with a local cart, movie browser, todo list, employee table, and
//! the portfolio document. Field names follow the JSON the remote
//! endpoints and stored documents actually use.

pub mod portfolio;

pub use portfolio::{Experience, Project, UserProfile};

use crate::core::{ListRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Catalog product, as returned by the read-only product endpoint and
/// stored in the cart slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub price: f64,
    pub description: String,
    pub category: Category,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub image: String,
}

impl ListRecord for Product {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub rating: f64,
    pub poster_url: String,
    pub description: String,
    pub genres: Vec<String>,
}

impl ListRecord for Movie {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.id)
    }
}

/// Todo task. Carries no identifier; the todo list is managed
/// positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoTask {
    pub title: String,
}

impl TodoTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl ListRecord for Employee {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_from_catalog_payload() {
        let payload = r#"{
            "id": 7,
            "title": "Classic Red Hoodie",
            "slug": "classic-red-hoodie",
            "price": 19.99,
            "description": "Soft fleece hoodie",
            "category": { "id": 1, "name": "Clothes", "slug": "clothes", "image": "https://img/cat.png" },
            "images": ["https://img/1.png"]
        }"#;

        let product: Product = serde_json::from_str(payload).expect("catalog payload parses");
        assert_eq!(product.record_id(), RecordId::Int(7));
        assert_eq!(product.category.name, "Clothes");
    }
}
