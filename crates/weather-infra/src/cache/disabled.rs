//! Always-miss cache layer for backends that could not be reached at startup.

use std::time::Duration;

use async_trait::async_trait;

use weather_core::ports::{CacheError, ForecastCache, ReadPolicy};
use weather_core::{CachedForecast, Coordinate};

/// A layer that holds nothing. Writes succeed and are dropped.
pub struct DisabledCache {
    name: String,
    policy: ReadPolicy,
}

impl DisabledCache {
    pub fn new(name: impl Into<String>, policy: ReadPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
        }
    }
}

#[async_trait]
impl ForecastCache for DisabledCache {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_policy(&self) -> ReadPolicy {
        self.policy
    }

    async fn get(&self, _coordinate: &Coordinate) -> Option<CachedForecast> {
        None
    }

    async fn put(
        &self,
        _forecast: &CachedForecast,
        _ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        Ok(())
    }
}
