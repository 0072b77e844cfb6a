use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

/// Identifier of a record within a list.
///
/// Data sources use both numeric ids (catalog products, employees)
/// and string ids (portfolio projects), so both shapes are accepted
/// and serialized transparently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Str(String),
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => write!(f, "{}", id),
        }
    }
}

/// A record that carries a stable identifier.
///
/// Required only by identifier-based removal; records without an id
/// (todo tasks, plain strings) still work with the store through the
/// positional operations.
pub trait ListRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn record_id(&self) -> RecordId;
}
