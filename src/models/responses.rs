//! Response DTOs for the task API
//!
//! Defines the structure of outgoing HTTP response bodies. Task bodies are
//! the [`Task`](super::Task) record itself.

use serde::Serialize;

/// Response body for DELETE /tasks/:id
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message
    pub message: String,
}

impl DeleteResponse {
    /// Creates the standard confirmation
    pub fn deleted() -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response with current timestamp
    pub fn healthy() -> Self {
        Self::with_status("healthy")
    }

    /// Creates an unhealthy response with current timestamp
    pub fn unhealthy() -> Self {
        Self::with_status("unhealthy")
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
    /// Offending field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
        }
    }

    /// Attaches the offending field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_serialize() {
        let resp = DeleteResponse::deleted();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Task deleted successfully"}));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        assert_eq!(resp.status, "healthy");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_health_response_unhealthy() {
        assert_eq!(HealthResponse::unhealthy().status, "unhealthy");
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("Something went wrong"));
        assert!(!json.contains("field"));
    }

    #[test]
    fn test_error_response_with_field() {
        let resp = ErrorResponse::new("Title cannot be empty").with_field("title");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["field"], "title");
    }
}
