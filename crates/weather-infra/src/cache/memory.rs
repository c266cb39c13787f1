//! In-memory key-value store - used in tests and as fallback when Redis is unavailable.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use weather_core::ports::{CacheError, KeyValueStore};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

/// In-memory store using a HashMap behind an async RwLock.
///
/// Expiry is enforced on read, the same contract Redis gives for `SET EX`.
/// Data is lost on process restart.
pub struct InMemoryStore {
    store: RwLock<HashMap<String, Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn is_expired(entry: &Entry) -> bool {
        entry
            .expires_at
            .map(|exp| Instant::now() >= exp)
            .unwrap_or(false)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        let entry = store.get(key)?;

        if Self::is_expired(entry) {
            drop(store);
            let mut store = self.store.write().await;
            // Re-check under the write lock; a writer may have refreshed it.
            if store.get(key).is_some_and(Self::is_expired) {
                store.remove(key);
            }
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut store = self.store.write().await;

        let expires_at = ttl.map(|d| Instant::now() + d);

        store.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );

        Ok(())
    }
}
