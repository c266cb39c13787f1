//! Fast cache layer: JSON-encoded forecasts in a key-value store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use weather_core::ports::{CacheError, ForecastCache, KeyValueStore, ReadPolicy};
use weather_core::{CachedForecast, Coordinate};

/// Fast cache layer over any [`KeyValueStore`].
///
/// Hits are trusted as fresh; the store's own expiry is authoritative.
pub struct FastForecastCache {
    store: Arc<dyn KeyValueStore>,
    name: String,
}

impl FastForecastCache {
    pub fn new(store: Arc<dyn KeyValueStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }
}

#[async_trait]
impl ForecastCache for FastForecastCache {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_policy(&self) -> ReadPolicy {
        ReadPolicy::TrustStoreExpiry
    }

    async fn get(&self, coordinate: &Coordinate) -> Option<CachedForecast> {
        let key = coordinate.cache_key();
        let raw = self.store.get(&key).await?;

        match serde_json::from_str::<CachedForecast>(&raw) {
            Ok(forecast) => Some(forecast),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    async fn put(
        &self,
        forecast: &CachedForecast,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let payload =
            serde_json::to_string(forecast).map_err(|e| CacheError::Serialization(e.to_string()))?;

        self.store
            .set(&forecast.coordinate.cache_key(), &payload, ttl)
            .await
    }
}
