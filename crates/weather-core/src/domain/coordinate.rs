use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of decimal digits kept in cache keys and durable rows.
pub const KEY_PRECISION: i32 = 6;

/// A validated (latitude, longitude) pair.
///
/// Coordinates that agree to six decimal places share one cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);

        if !lat_ok || !lon_ok {
            return Err(DomainError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The coordinate rounded to key precision.
    ///
    /// Stores persist this form so lookups can match on exact equality.
    pub fn normalized(&self) -> Self {
        Self {
            latitude: round_to_key_precision(self.latitude),
            longitude: round_to_key_precision(self.longitude),
        }
    }

    /// Cache key shared by every store, e.g. `weather:40.712800:-74.006000`.
    pub fn cache_key(&self) -> String {
        let n = self.normalized();
        format!("weather:{:.6}:{:.6}", n.latitude, n.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

fn round_to_key_precision(value: f64) -> f64 {
    let scale = 10f64.powi(KEY_PRECISION);
    // Adding 0.0 folds -0.0 into 0.0 so both render the same key.
    (value * scale).round() / scale + 0.0
}
