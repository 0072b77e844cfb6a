//! Centralized record identifier generation.
//!
//! Call sites tend to roll their own id scheme (a bare timestamp here,
//! timestamp-plus-random-suffix there); the store holds one generator
//! instead so the uniqueness strategy is defined once and swappable
//! for tests.

use crate::core::RecordId;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Millisecond timestamp plus a random suffix, optionally prefixed:
/// `proj_1714070000000_a1b2c3d4`. The suffix keeps two ids generated
/// within the same millisecond distinct.
pub struct TimestampIdGenerator {
    prefix: Option<String>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Default for TimestampIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> RecordId {
        let millis = Utc::now().timestamp_millis();
        let suffix = Uuid::new_v4().simple().to_string();
        let suffix = &suffix[..8];
        match &self.prefix {
            Some(prefix) => RecordId::Str(format!("{}_{}_{}", prefix, millis, suffix)),
            None => RecordId::Str(format!("{}_{}", millis, suffix)),
        }
    }
}

/// Monotonic counter producing numeric ids. Deterministic, for tests.
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: i64) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::Int(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
