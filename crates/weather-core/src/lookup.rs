//! Cache-aside forecast lookup with stale-data fallback.
//!
//! Layers are read in priority order. On a miss (or a stale row) the
//! upstream provider is called once; a successful fetch is written back to
//! every layer, a failed one falls back to the first stale row found.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::{CachedForecast, Coordinate, FRESHNESS_WINDOW, ForecastResult, ForecastSource};
use crate::error::LookupError;
use crate::ports::{ForecastCache, ForecastProvider, ProviderError, ReadPolicy};

/// Lookup tuning.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Rows younger than this are served without calling upstream.
    pub freshness_window: Duration,
    /// Upper bound on a single upstream fetch.
    pub upstream_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            freshness_window: FRESHNESS_WINDOW,
            upstream_timeout: Duration::from_secs(10),
        }
    }
}

/// Forecast lookup over an ordered list of cache layers and one provider.
pub struct ForecastLookup {
    layers: Vec<Arc<dyn ForecastCache>>,
    provider: Arc<dyn ForecastProvider>,
    config: LookupConfig,
}

impl ForecastLookup {
    /// `layers` are ordered from fastest to most durable.
    pub fn new(
        layers: Vec<Arc<dyn ForecastCache>>,
        provider: Arc<dyn ForecastProvider>,
        config: LookupConfig,
    ) -> Self {
        Self {
            layers,
            provider,
            config,
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Resolve the forecast for a coordinate.
    ///
    /// Fails only when upstream fails and no layer holds any row.
    pub async fn lookup(&self, coordinate: &Coordinate) -> Result<ForecastResult, LookupError> {
        let mut stale: Option<CachedForecast> = None;

        for layer in &self.layers {
            let Some(cached) = layer.get(coordinate).await else {
                tracing::debug!(layer = layer.name(), %coordinate, "Cache miss");
                continue;
            };

            match layer.read_policy() {
                ReadPolicy::TrustStoreExpiry => {
                    tracing::debug!(layer = layer.name(), %coordinate, "Cache hit");
                    return Ok(ForecastResult::from_cached(&cached, ForecastSource::Cache));
                }
                ReadPolicy::CheckFreshness => {
                    if cached.is_fresh_at(Utc::now(), self.config.freshness_window) {
                        tracing::debug!(layer = layer.name(), %coordinate, "Fresh cache hit");
                        return Ok(ForecastResult::from_cached(
                            &cached,
                            ForecastSource::CheckedCache,
                        ));
                    }

                    tracing::debug!(
                        layer = layer.name(),
                        %coordinate,
                        captured_at = %cached.captured_at,
                        "Stale cache hit"
                    );
                    stale.get_or_insert(cached);
                }
            }
        }

        match self.fetch_upstream(coordinate).await {
            Ok(fresh) => {
                self.write_back(&fresh).await;
                Ok(ForecastResult::from_cached(&fresh, ForecastSource::Upstream))
            }
            Err(e) => match stale {
                Some(cached) => {
                    tracing::warn!(
                        %coordinate,
                        error = %e,
                        captured_at = %cached.captured_at,
                        "Upstream fetch failed, serving stale forecast"
                    );
                    Ok(ForecastResult::from_cached(&cached, ForecastSource::Stale))
                }
                None => {
                    tracing::error!(%coordinate, error = %e, "Upstream fetch failed, no cached data");
                    Err(LookupError::UpstreamUnavailable(e.to_string()))
                }
            },
        }
    }

    async fn fetch_upstream(&self, coordinate: &Coordinate) -> Result<CachedForecast, ProviderError> {
        let timeout = self.config.upstream_timeout;
        tokio::time::timeout(timeout, self.provider.fetch(coordinate))
            .await
            .map_err(|_| ProviderError::Timeout(timeout))?
    }

    async fn write_back(&self, forecast: &CachedForecast) {
        let ttl = Some(self.config.freshness_window);

        for layer in &self.layers {
            if let Err(e) = layer.put(forecast, ttl).await {
                tracing::warn!(
                    layer = layer.name(),
                    coordinate = %forecast.coordinate,
                    error = %e,
                    "Failed to cache forecast"
                );
            }
        }
    }
}
