//! Domain-level error types.

use thiserror::Error;

/// Domain errors - invalid input to the business logic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid coordinate: latitude {latitude} must be within [-90, 90] and longitude {longitude} within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

/// Errors surfaced by [`crate::ForecastLookup`].
///
/// Cache failures never show up here; they are absorbed as misses.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("Upstream forecast unavailable: {0}")]
    UpstreamUnavailable(String),
}
