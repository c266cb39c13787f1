//! # Weather Core
//!
//! The domain layer of the weather service.
//! This crate holds the forecast types, the temperature classifier, the ports
//! infrastructure must implement, and the cache-aside [`ForecastLookup`].

pub mod domain;
pub mod error;
pub mod lookup;
pub mod ports;

pub use domain::{
    CachedForecast, Coordinate, FRESHNESS_WINDOW, ForecastResult, ForecastSource, TemperatureBand,
    classify,
};
pub use error::{DomainError, LookupError};
pub use lookup::{ForecastLookup, LookupConfig};
