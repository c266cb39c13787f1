//! Forecast endpoint.

use actix_web::{HttpResponse, web};
use weather_core::{Coordinate, ForecastResult};
use weather_shared::WeatherResponse;
use weather_shared::dto::WeatherQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /weather?lat=..&lon=..
pub async fn get_weather(
    state: web::Data<AppState>,
    query: web::Query<WeatherQuery>,
) -> AppResult<HttpResponse> {
    let coordinate = parse_coordinate(&query)?;

    let result = state.lookup.lookup(&coordinate).await?;
    tracing::debug!(%coordinate, source = ?result.source, "Forecast resolved");

    Ok(HttpResponse::Ok().json(to_response(result)))
}

fn parse_coordinate(query: &WeatherQuery) -> AppResult<Coordinate> {
    let lat = parse_param(
        query.lat.as_deref(),
        ("Missing latitude parameter", "Latitude is required (e.g., lat=40.7128)"),
        ("Invalid latitude parameter", "Latitude must be a valid float number"),
    )?;
    let lon = parse_param(
        query.lon.as_deref(),
        ("Missing longitude parameter", "Longitude is required (e.g., lon=-74.0060)"),
        ("Invalid longitude parameter", "Longitude must be a valid float number"),
    )?;

    Ok(Coordinate::new(lat, lon)?)
}

fn parse_param(
    raw: Option<&str>,
    missing: (&str, &str),
    invalid: (&str, &str),
) -> AppResult<f64> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request(missing.0, missing.1))?;

    raw.parse::<f64>()
        .map_err(|_| AppError::bad_request(invalid.0, invalid.1))
}

fn to_response(result: ForecastResult) -> WeatherResponse {
    WeatherResponse {
        forecast: result.forecast,
        temperature: result.temperature.as_str().to_string(),
        temperature_c: result.temperature_c,
        temperature_f: result.temperature_f,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::configure_routes;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use std::sync::Arc;
    use weather_core::ports::{ForecastCache, ForecastProvider, ProviderError};
    use weather_core::{CachedForecast, ForecastLookup, LookupConfig};
    use weather_infra::{FastForecastCache, InMemoryStore};
    use weather_shared::ErrorResponse;

    struct FixedProvider(Option<(&'static str, f64)>);

    #[async_trait]
    impl ForecastProvider for FixedProvider {
        async fn fetch(&self, coordinate: &Coordinate) -> Result<CachedForecast, ProviderError> {
            match self.0 {
                Some((text, temp_c)) => Ok(CachedForecast::new(
                    *coordinate,
                    text,
                    temp_c,
                    temp_c * 9.0 / 5.0 + 32.0,
                )),
                None => Err(ProviderError::Status {
                    endpoint: "points",
                    status: 500,
                }),
            }
        }
    }

    fn state(provider: FixedProvider) -> AppState {
        let layers: Vec<Arc<dyn ForecastCache>> = vec![Arc::new(FastForecastCache::new(
            Arc::new(InMemoryStore::new()),
            "memory",
        ))];
        AppState::from_lookup(ForecastLookup::new(
            layers,
            Arc::new(provider),
            LookupConfig::default(),
        ))
    }

    #[actix_web::test]
    async fn test_weather_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(FixedProvider(Some(("Sunny", 30.0))))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/weather?lat=40.7128&lon=-74.0060")
            .to_request();
        let body: WeatherResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.forecast, "Sunny");
        assert_eq!(body.temperature, "hot");
        assert_eq!(body.temperature_c, 30.0);
        assert_eq!(body.temperature_f, 86.0);
    }

    #[actix_web::test]
    async fn test_weather_under_api_prefix() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(FixedProvider(Some(("Rain", 5.0))))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/weather?lat=47.6&lon=-122.3")
            .to_request();
        let body: WeatherResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.temperature, "cold");
    }

    #[actix_web::test]
    async fn test_validation_errors() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(FixedProvider(None))))
                .configure(configure_routes),
        )
        .await;

        let cases = [
            ("/weather?lon=-74.0060", "Missing latitude parameter"),
            ("/weather?lat=40.7128", "Missing longitude parameter"),
            ("/weather?lat=invalid&lon=-74.0060", "Invalid latitude parameter"),
            ("/weather?lat=40.7128&lon=invalid", "Invalid longitude parameter"),
            ("/weather?lat=%2040.7128&lon=-74.0060", "Invalid latitude parameter"),
            ("/weather?lat=40.7128&lon=-74.0060%20", "Invalid longitude parameter"),
            ("/weather?lat=&lon=-74.0060", "Missing latitude parameter"),
            ("/weather?lat=100&lon=-74.0060", "Invalid coordinates"),
            ("/weather?lat=40.7128&lon=200", "Invalid coordinates"),
        ];

        for (uri, title) in cases {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status().as_u16(), 400, "{uri}");

            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.title, title, "{uri}");
        }
    }

    #[actix_web::test]
    async fn test_upstream_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(FixedProvider(None))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/weather?lat=40.7128&lon=-74.0060")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 503);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.title, "Failed to get weather data");
        assert!(body.detail.unwrap_or_default().contains("500"));
    }

    #[actix_web::test]
    async fn test_malformed_query_is_problem_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state(FixedProvider(Some(("Sunny", 20.0))))))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/weather?lat=1&lat=2&lon=3")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.title, "Invalid query string");
        assert_eq!(body.status, 400);
    }
}
