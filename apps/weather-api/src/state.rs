//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use weather_core::ForecastLookup;
use weather_core::ports::{ForecastCache, ProviderError, ReadPolicy};
use weather_infra::database::connect;
use weather_infra::{
    DatabaseConfig, DisabledCache, DurableForecastCache, FastForecastCache, InMemoryStore,
    NwsClient, RedisConfig, RedisStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<ForecastLookup>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Unreachable caches degrade to always-miss layers; only a provider that
    /// cannot be constructed at all fails startup.
    pub async fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let fast = fast_layer(&config.redis).await;
        let durable = durable_layer(&config.database, config.auto_migrate).await;
        let provider = Arc::new(NwsClient::new(&config.nws)?);

        let lookup = ForecastLookup::new(vec![fast, durable], provider, config.lookup.clone());

        tracing::info!("Application state initialized");

        Ok(Self::from_lookup(lookup))
    }

    pub fn from_lookup(lookup: ForecastLookup) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

async fn fast_layer(config: &RedisConfig) -> Arc<dyn ForecastCache> {
    match RedisStore::new(config).await {
        Ok(store) => Arc::new(FastForecastCache::new(Arc::new(store), "redis")),
        Err(e) if config.fallback_to_memory => {
            tracing::warn!(error = %e, "Redis unavailable, using in-memory fast cache");
            Arc::new(FastForecastCache::new(Arc::new(InMemoryStore::new()), "memory"))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Redis unavailable, fast cache disabled");
            Arc::new(DisabledCache::new("redis (disabled)", ReadPolicy::TrustStoreExpiry))
        }
    }
}

async fn durable_layer(config: &DatabaseConfig, auto_migrate: bool) -> Arc<dyn ForecastCache> {
    let disabled = || -> Arc<dyn ForecastCache> {
        Arc::new(DisabledCache::new("database (disabled)", ReadPolicy::CheckFreshness))
    };

    let db = match connect(config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database, durable cache disabled");
            return disabled();
        }
    };

    if auto_migrate {
        if let Err(e) = Migrator::up(&db, None).await {
            tracing::error!(error = %e, "Migrations failed, durable cache disabled");
            return disabled();
        }
    }

    Arc::new(DurableForecastCache::new(db))
}
