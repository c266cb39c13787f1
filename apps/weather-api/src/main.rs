//! # Weather API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Weather API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await.map_err(std::io::Error::other)?;

    tracing::info!(
        "API documentation available at http://{}:{}/docs",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Permissive CORS for browser clients; the API is read-only.
pub(crate) fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
}
