//! National Weather Service forecast provider.
//!
//! A forecast takes two requests: `/points/{lat},{lon}` resolves the
//! coordinate to a forecast URL, which is then fetched for its periods.
//! Only the first period is used.

mod types;

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use weather_core::ports::{ForecastProvider, ProviderError};
use weather_core::{CachedForecast, Coordinate};

use types::{ForecastResponse, PointsResponse};

/// NWS client configuration.
#[derive(Debug, Clone)]
pub struct NwsConfig {
    /// API root, e.g. `https://api.weather.gov`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// The NWS rejects requests without a User-Agent.
    pub user_agent: String,
}

impl Default for NwsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weather.gov".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("weather-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl NwsConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: std::env::var("NWS_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout: std::env::var("NWS_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            user_agent: std::env::var("NWS_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

/// National Weather Service API client.
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(config: &NwsConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T, ProviderError> {
        tracing::debug!(%url, endpoint, "Fetching NWS resource");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/geo+json")
            .send()
            .await
            .map_err(|e| ProviderError::Http(format!("{endpoint}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| ProviderError::Malformed(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl ForecastProvider for NwsClient {
    async fn fetch(&self, coordinate: &Coordinate) -> Result<CachedForecast, ProviderError> {
        // The points endpoint redirects anything finer than four decimals.
        let points_url = format!(
            "{}/points/{:.4},{:.4}",
            self.base_url,
            coordinate.latitude(),
            coordinate.longitude()
        );

        let points: PointsResponse = self.get_json(&points_url, "points").await?;
        let forecast_url = points
            .properties
            .forecast
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ProviderError::Malformed("no forecast URL in points response".into()))?;

        let forecast: ForecastResponse = self.get_json(&forecast_url, "forecast").await?;
        let period = forecast
            .properties
            .periods
            .first()
            .ok_or_else(|| ProviderError::Malformed("no forecast periods found".into()))?;

        let (temperature_c, temperature_f) = period.temperatures();

        tracing::info!(
            %coordinate,
            forecast = %period.short_forecast,
            temperature_c,
            "Fetched forecast from NWS"
        );

        Ok(CachedForecast::new(
            *coordinate,
            period.short_forecast.clone(),
            temperature_c,
            temperature_f,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> NwsClient {
        NwsClient::new(&NwsConfig {
            base_url: server.uri(),
            timeout: Duration::from_secs(2),
            ..NwsConfig::default()
        })
        .unwrap()
    }

    fn coord() -> Coordinate {
        Coordinate::new(40.7128, -74.006).unwrap()
    }

    async fn mount_points(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/points/40.7128,-74.0060"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": { "forecast": format!("{}/gridpoints/OKX/33,35/forecast", server.uri()) }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_uses_first_period() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        Mock::given(method("GET"))
            .and(path("/gridpoints/OKX/33,35/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": { "periods": [
                    { "shortForecast": "Partly Cloudy", "temperature": 50, "temperatureUnit": "F" },
                    { "shortForecast": "Rain", "temperature": 40, "temperatureUnit": "F" }
                ]}
            })))
            .mount(&server)
            .await;

        let forecast = client_for(&server).fetch(&coord()).await.unwrap();

        assert_eq!(forecast.short_forecast, "Partly Cloudy");
        assert_eq!(forecast.temperature_f, 50.0);
        assert_eq!(forecast.temperature_c, 10.0);
        assert_eq!(forecast.coordinate, coord());
    }

    #[tokio::test]
    async fn test_points_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&coord()).await.unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Status {
                endpoint: "points",
                status: 404
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_forecast_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/points/40.7128,-74.0060"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "properties": { "forecast": "" } })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&coord()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_empty_periods() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        Mock::given(method("GET"))
            .and(path("/gridpoints/OKX/33,35/forecast"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "properties": { "periods": [] } })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&coord()).await.unwrap_err();

        assert!(err.to_string().contains("no forecast periods"));
    }

    #[tokio::test]
    async fn test_forecast_error_status() {
        let server = MockServer::start().await;
        mount_points(&server).await;
        Mock::given(method("GET"))
            .and(path("/gridpoints/OKX/33,35/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&coord()).await.unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Status {
                endpoint: "forecast",
                status: 503
            }
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(&coord()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Malformed(_)));
    }
}
