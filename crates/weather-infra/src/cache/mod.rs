//! Cache implementations - fast layer stores and the always-miss fallback.

mod disabled;
mod fast;
mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use disabled::DisabledCache;
pub use fast::FastForecastCache;
pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};
