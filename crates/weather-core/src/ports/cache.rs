use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{CachedForecast, Coordinate};

/// Key-value store abstraction over fast backends (Redis, in-memory).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get a value. Unreachable backends report a miss.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value with optional TTL enforced by the store.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;
}

/// How the lookup treats a hit from a cache layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadPolicy {
    /// The store expires entries itself; any hit is fresh.
    TrustStoreExpiry,
    /// The store keeps everything; freshness is checked at read time.
    CheckFreshness,
}

/// One tier of the forecast cache.
///
/// Layers are consulted in priority order by [`crate::ForecastLookup`].
#[async_trait]
pub trait ForecastCache: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn read_policy(&self) -> ReadPolicy;

    /// Fetch the entry for a coordinate.
    ///
    /// Backend and decoding failures are logged and reported as a miss.
    async fn get(&self, coordinate: &Coordinate) -> Option<CachedForecast>;

    /// Store a forecast. Layers that retain rows forever ignore `ttl`.
    async fn put(&self, forecast: &CachedForecast, ttl: Option<Duration>)
    -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
