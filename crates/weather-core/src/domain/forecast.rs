use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::temperature::{TemperatureBand, classify};

/// Age below which a stored forecast counts as fresh.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(60 * 60);

/// A forecast captured from the upstream provider at a point in time.
///
/// Each cache layer stores its own serialized copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedForecast {
    pub coordinate: Coordinate,
    pub short_forecast: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub captured_at: DateTime<Utc>,
}

impl CachedForecast {
    /// Create a forecast captured now.
    pub fn new(
        coordinate: Coordinate,
        short_forecast: impl Into<String>,
        temperature_c: f64,
        temperature_f: f64,
    ) -> Self {
        Self {
            coordinate,
            short_forecast: short_forecast.into(),
            temperature_c,
            temperature_f,
            captured_at: Utc::now(),
        }
    }

    /// Same forecast with a different capture time.
    pub fn with_captured_at(mut self, captured_at: DateTime<Utc>) -> Self {
        self.captured_at = captured_at;
        self
    }

    /// `now - captured_at < window`. Future timestamps count as fresh.
    pub fn is_fresh_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match (now - self.captured_at).to_std() {
            Ok(age) => age < window,
            Err(_) => true,
        }
    }
}

/// Where a lookup result came from. Used for logging and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastSource {
    /// A layer whose own expiry is trusted.
    Cache,
    /// A layer whose row was checked for freshness at read time.
    CheckedCache,
    Upstream,
    /// Expired cache data served because upstream failed.
    Stale,
}

/// A classified forecast ready for the response.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub forecast: String,
    pub temperature: TemperatureBand,
    pub temperature_c: f64,
    pub temperature_f: f64,
    pub source: ForecastSource,
}

impl ForecastResult {
    pub fn from_cached(cached: &CachedForecast, source: ForecastSource) -> Self {
        Self {
            forecast: cached.short_forecast.clone(),
            temperature: classify(cached.temperature_c),
            temperature_c: cached.temperature_c,
            temperature_f: cached.temperature_f,
            source,
        }
    }
}
