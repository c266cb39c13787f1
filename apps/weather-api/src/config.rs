//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use weather_core::LookupConfig;
use weather_infra::{DatabaseConfig, NwsConfig, RedisConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Run pending migrations on startup.
    pub auto_migrate: bool,
    pub redis: RedisConfig,
    pub nws: NwsConfig,
    pub lookup: LookupConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = LookupConfig::default();

        let lookup = LookupConfig {
            freshness_window: env_secs("CACHE_TTL_SECS").unwrap_or(defaults.freshness_window),
            upstream_timeout: env_secs("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or(defaults.upstream_timeout),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database: DatabaseConfig::from_env(),
            auto_migrate: env::var("DB_AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            redis: RedisConfig::from_env(),
            nws: NwsConfig::from_env(),
            lookup,
        }
    }
}

fn env_secs(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}
