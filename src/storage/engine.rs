use crate::core::Result;
use async_trait::async_trait;

/// Key-value storage trait - allows pluggable storage backends
///
/// Reading a missing key yields `None`, never an error: first use of a
/// slot is indistinguishable from an empty one. `set` overwrites the
/// key entirely.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw text stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the content of `key` with `value`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
