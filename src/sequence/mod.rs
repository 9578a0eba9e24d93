use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

// ============================================================================
// Sequence Store - Durable Named Counters
// ============================================================================
//
// Issues strictly increasing integers from named counters. Concurrency
// safety lives entirely in the store's atomic read-modify-write; callers
// never coordinate among themselves.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("sequence store unavailable")]
    Unavailable(#[source] anyhow::Error),
}

/// Atomic increment-and-fetch over a named durable counter.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    /// Adds `increment` to the named counter and returns the post-increment
    /// value, creating the counter seeded at `increment` if absent. A single
    /// atomic find-and-modify with upsert: no lost updates, no duplicate
    /// values, under any number of concurrent callers. Never fabricates a
    /// value when the store is unreachable.
    async fn next(&self, name: &str, increment: i64) -> Result<i64, SequenceError>;

    /// `next` with the default increment of 1.
    async fn next_value(&self, name: &str) -> Result<i64, SequenceError> {
        self.next(name, 1).await
    }
}

/// In-process counter store with find-and-modify upsert semantics.
///
/// The whole read-modify-write happens under one lock acquisition, which is
/// the in-memory equivalent of the document store's atomic findAndModify.
pub struct InMemorySequenceStore {
    counters: Mutex<HashMap<String, i64>>,
}

impl InMemorySequenceStore {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(HashMap::new()),
        }
    }

    /// Current value of a counter without incrementing it, if it exists.
    pub async fn current(&self, name: &str) -> Option<i64> {
        self.counters.lock().await.get(name).copied()
    }
}

impl Default for InMemorySequenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SequenceStore for InMemorySequenceStore {
    async fn next(&self, name: &str, increment: i64) -> Result<i64, SequenceError> {
        let mut counters = self.counters.lock().await;
        let value = counters.entry(name.to_string()).or_insert(0);
        *value += increment;
        Ok(*value)
    }
}
