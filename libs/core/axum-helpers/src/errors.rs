//! Structured error responses shared by every HTTP surface in the workspace.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body.
///
/// Every error response carries the same shape so clients can handle
/// failures uniformly:
/// - `error`: machine-readable identifier (e.g. "not_found")
/// - `message`: human-readable description
/// - `details`: optional structured payload (e.g. per-field validation
///   errors)
///
/// # JSON example
///
/// ```json
/// {
///   "error": "validation_error",
///   "message": "Request validation failed",
///   "details": { "age": [{ "code": "range" }] }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_omitted_when_absent() {
        let body = serde_json::to_value(ErrorResponse::new("not_found", "missing")).unwrap();
        assert_eq!(body["error"], "not_found");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_details_serialized_when_present() {
        let response = ErrorResponse::new("validation_error", "bad input")
            .with_details(serde_json::json!({"field": "age"}));
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["details"]["field"], "age");
    }
}
