//! API documentation - OpenAPI document and a Swagger UI page.

use actix_web::HttpResponse;
use serde_json::{Value, json};

const DOCS_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Weather API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "docs/openapi.json",
        dom_id: "#swagger-ui",
        deepLinking: true,
        docExpansion: "list",
      });
    };
  </script>
</body>
</html>
"##;

/// GET /docs
pub async fn docs_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DOCS_HTML)
}

/// GET /docs/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(openapi())
}

fn problem(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/problem+json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

/// OpenAPI 3.0 description of the public endpoints.
pub fn openapi() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Weather API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Forecasts by coordinate from the National Weather Service, with fast and durable caching",
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" }
        },
        "paths": {
            "/weather": {
                "get": {
                    "summary": "Get weather forecast",
                    "description": "Returns the short forecast and temperature characterization for the given coordinates",
                    "tags": ["Weather"],
                    "parameters": [
                        {
                            "name": "lat",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "number", "minimum": -90, "maximum": 90 },
                            "description": "Latitude (-90 to 90)",
                            "example": 40.7128
                        },
                        {
                            "name": "lon",
                            "in": "query",
                            "required": true,
                            "schema": { "type": "number", "minimum": -180, "maximum": 180 },
                            "description": "Longitude (-180 to 180)",
                            "example": -74.0060
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Forecast retrieved (possibly from cache)",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/WeatherResponse" }
                                }
                            }
                        },
                        "400": problem("Missing, unparsable or out-of-range coordinates"),
                        "503": problem("Upstream unavailable and nothing cached")
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "tags": ["Health"],
                    "responses": {
                        "200": {
                            "description": "Service is running",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthResponse" }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "WeatherResponse": {
                    "type": "object",
                    "required": ["forecast", "temperature", "temperature_c", "temperature_f"],
                    "properties": {
                        "forecast": { "type": "string", "example": "Partly Cloudy" },
                        "temperature": { "type": "string", "enum": ["hot", "cold", "moderate"] },
                        "temperature_c": { "type": "number", "example": 22.5 },
                        "temperature_f": { "type": "number", "example": 72.5 }
                    }
                },
                "HealthResponse": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string", "example": "healthy" },
                        "version": { "type": "string" },
                        "timestamp": { "type": "string", "format": "date-time" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string" },
                        "title": { "type": "string", "example": "Invalid latitude parameter" },
                        "status": { "type": "integer" },
                        "detail": { "type": "string" },
                        "instance": { "type": "string" }
                    }
                }
            }
        }
    })
}
