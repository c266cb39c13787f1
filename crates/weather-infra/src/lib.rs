//! # Weather Infrastructure
//!
//! Concrete implementations of the ports defined in `weather-core`:
//! fast and durable forecast caches and the upstream forecast provider.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `database` - Durable cache via SeaORM (SQLite or PostgreSQL)
//! - `nws` - National Weather Service provider via reqwest
//! - `redis` - Redis-backed fast cache

pub mod cache;

#[cfg(feature = "database")]
pub mod database;

#[cfg(feature = "nws")]
pub mod nws;

// Re-exports - always available
pub use cache::{DisabledCache, FastForecastCache, InMemoryStore};

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, DurableForecastCache};

#[cfg(feature = "nws")]
pub use nws::{NwsClient, NwsConfig};

#[cfg(feature = "redis")]
pub use cache::{RedisConfig, RedisStore};
