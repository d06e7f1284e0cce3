//! In-memory freshness cache for upstream responses.

use std::time::Duration;

use moka::future::Cache;
use serde_json::Value;

/// Response bodies keyed by full request URL, each valid for a fixed
/// time-to-live from insertion.
///
/// Only successful bodies are inserted. Concurrent misses for the same URL
/// may both reach the network.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Cache<String, Value>,
}

impl ResponseCache {
    /// Create a cache holding at most `capacity` responses for `freshness`.
    pub fn new(capacity: u64, freshness: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(freshness)
            .build();
        Self { entries }
    }

    /// Fresh body for `url`, if one is cached.
    pub async fn get(&self, url: &str) -> Option<Value> {
        self.entries.get(url).await
    }

    /// Store a successful body.
    pub async fn insert(&self, url: String, body: Value) {
        self.entries.insert(url, body).await;
    }

    /// Drop every cached body.
    pub async fn invalidate_all(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks().await;
    }

    /// Approximate number of cached bodies.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}
