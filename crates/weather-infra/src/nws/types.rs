//! National Weather Service response shapes (only the fields we read).

use serde::Deserialize;

/// `/points/{lat},{lon}` response.
#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    #[serde(default)]
    pub forecast: Option<String>,
}

/// Forecast resource response.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    #[serde(default)]
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    #[serde(rename = "shortForecast", default)]
    pub short_forecast: String,
    pub temperature: f64,
    #[serde(rename = "temperatureUnit", default)]
    pub temperature_unit: Option<String>,
}

impl ForecastPeriod {
    /// `(celsius, fahrenheit)` for the period.
    ///
    /// The upstream reports in either unit; anything other than `F` is Celsius.
    pub fn temperatures(&self) -> (f64, f64) {
        match self.temperature_unit.as_deref() {
            Some("F") => (
                (self.temperature - 32.0) * 5.0 / 9.0,
                self.temperature,
            ),
            _ => (self.temperature, self.temperature * 9.0 / 5.0 + 32.0),
        }
    }
}
