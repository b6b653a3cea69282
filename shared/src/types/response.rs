//! API response types and wrappers
//!
//! Every endpoint answers with a flat JSON object carrying an `ok` flag:
//! `{ "ok": true, "message": "...", ...payload }` on success and
//! `{ "ok": false, "error": "..." }` on failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard success envelope
///
/// The payload's fields are flattened next to `ok` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true` for this envelope
    pub ok: bool,

    /// Human-readable outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Endpoint-specific payload
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying a payload
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            message: None,
            data: Some(data),
        }
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// Create a successful response that only carries a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Standard error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false` for this envelope
    pub ok: bool,

    /// Error message safe to show to the client
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status ("healthy" or "degraded")
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,

    /// Storage backend in use
    pub storage: String,

    /// Check timestamp
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Created {
        id: String,
    }

    #[test]
    fn test_message_response_shape() {
        let response = ApiResponse::message("OTP sent");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "ok": true, "message": "OTP sent" }));
    }

    #[test]
    fn test_payload_is_flattened() {
        let response = ApiResponse::success(Created { id: "abc".to_string() })
            .with_message("Submission saved");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({ "ok": true, "message": "Submission saved", "id": "abc" })
        );
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(ErrorResponse::new("Invalid mobile")).unwrap();
        assert_eq!(value, json!({ "ok": false, "error": "Invalid mobile" }));
    }
}
