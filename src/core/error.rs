use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Persistence write error: {0}")]
    PersistenceWrite(String),

    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Fetch error: {0}")]
    Fetch(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}
