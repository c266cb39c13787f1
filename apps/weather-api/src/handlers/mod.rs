//! HTTP handlers and route configuration.

mod docs;
mod health;
mod weather;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Everything is served at the root and again under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .service(web::scope("/api").configure(public_routes))
        .configure(public_routes);
}

fn public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/weather")
            .route(web::get().to(weather::get_weather))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(
        web::resource("/health")
            .route(web::get().to(health::health_check))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .route("/docs", web::get().to(docs::docs_page))
    .route("/docs/openapi.json", web::get().to(docs::openapi_json));
}

/// Malformed query strings get the same problem body as validation failures.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request("Invalid query string", err.to_string()).into()
    })
}

/// CORS preflight; the allow headers are added by the server-wide middleware.
async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    AppError::NotFound(req.path().to_string()).error_response()
}
