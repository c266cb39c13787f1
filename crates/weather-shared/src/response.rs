//! Standardized API response types (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// A URI reference that identifies the specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            instance: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    // Common error constructors
    pub fn bad_request(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(400, title).with_detail(detail)
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        Self::new(404, "Not Found")
            .with_detail(format!("No route for {path}"))
            .with_instance(path)
    }

    pub fn service_unavailable(title: impl Into<String>) -> Self {
        Self::new(503, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_shape() {
        let body = ErrorResponse::new(400, "Missing latitude parameter")
            .with_detail("Latitude is required (e.g., lat=40.7128)");

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "about:blank");
        assert_eq!(value["status"], 400);
        assert_eq!(value["title"], "Missing latitude parameter");
        assert!(value.get("instance").is_none());
    }
}
