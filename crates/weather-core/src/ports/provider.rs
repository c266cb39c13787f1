//! Upstream forecast provider port.

use async_trait::async_trait;

use crate::domain::{CachedForecast, Coordinate};

/// Source of fresh forecasts (e.g. the National Weather Service).
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the current forecast for a coordinate.
    async fn fetch(&self, coordinate: &Coordinate) -> Result<CachedForecast, ProviderError>;
}

/// Upstream provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Timed out after {0:?}")]
    Timeout(std::time::Duration),
}
