//! Document Store Module
//!
//! A minimal document API in the shape of the remote document database
//! the portfolio pages talk to: documents are flat JSON objects
//! addressed by collection and id, and every write is a *merge* of the
//! named fields into whatever the document already holds.
//!
//! # Architecture
//!
//! - `store.rs` - `DocumentStore` trait, `Document`, `PartialUpdate`
//! - `memory.rs` - in-memory implementation with merge semantics

mod memory;
mod store;

pub use memory::InMemoryDocumentStore;
pub use store::{Document, DocumentStore, PartialUpdate};
