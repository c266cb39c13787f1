//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod provider;

pub use cache::{CacheError, ForecastCache, KeyValueStore, ReadPolicy};
pub use provider::{ForecastProvider, ProviderError};
