//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /weather`.
///
/// Both values arrive as raw strings so missing and unparsable input can be
/// reported separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Forecast for a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub forecast: String,
    /// One of `hot`, `cold`, `moderate`.
    pub temperature: String,
    pub temperature_c: f64,
    pub temperature_f: f64,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
