//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use weather_core::{DomainError, LookupError};
use weather_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { title: String, detail: String },
    NotFound(String),
    UpstreamUnavailable(String),
}

impl AppError {
    pub fn bad_request(title: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::BadRequest {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest { title, detail } => write!(f, "{}: {}", title, detail),
            AppError::NotFound(path) => write!(f, "Not found: {}", path),
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest { title, detail } => ErrorResponse::bad_request(title, detail),
            AppError::NotFound(path) => ErrorResponse::not_found(path),
            AppError::UpstreamUnavailable(detail) => {
                tracing::error!(detail = %detail, "Responding with upstream failure");
                ErrorResponse::service_unavailable("Failed to get weather data").with_detail(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::UpstreamUnavailable(detail) => AppError::UpstreamUnavailable(detail),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidCoordinate { .. } => AppError::bad_request(
                "Invalid coordinates",
                "Latitude must be between -90 and 90, Longitude between -180 and 180",
            ),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
