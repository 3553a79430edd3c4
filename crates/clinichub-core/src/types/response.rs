//! Shared response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Structured error body returned by every failure path in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. `NOT_FOUND`, `AUTHENTICATION`).
    pub error_code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional detail lines (validation failures, etc.).
    pub details: Vec<String>,
    /// When the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// Request path that produced the error.
    pub path: String,
}

impl ApiErrorBody {
    /// Build an error body for the given code/message/path.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>, path: &str) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Vec::new(),
            timestamp: Utc::now(),
            path: path.to_string(),
        }
    }

    /// Attach detail lines.
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let body = ApiErrorBody::new("NOT_FOUND", "no such user", "/api/admin/users/9");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["errorCode"], "NOT_FOUND");
        assert_eq!(json["path"], "/api/admin/users/9");
        assert!(json["details"].as_array().unwrap().is_empty());
        assert!(json.get("timestamp").is_some());
    }
}
