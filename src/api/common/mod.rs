//
//  gcore-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types shared by every Gcore resource family
//!
//! This module provides the error taxonomy, the pass-through entity type and
//! the task-state view used when polling asynchronous jobs.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Entity`] - An opaque JSON object as returned by the API
//! - [`TaskState`] - Classification of a purge task or certificate validation status
//!
//! # Example
//!
//! ```rust
//! use gcore_cli::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::InvalidCredential) => println!("Please log in again"),
//!         Err(ApiError::Request { status, detail }) => println!("{}: {}", status, detail),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Entities are not validated or enriched; the remote service owns the schema
//! - Only the fields the client itself reads (status, task ids) are interpreted

use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// A resource entity exactly as returned by the API.
///
/// CDN resources, DNS zones and records, buckets, objects, certificates and
/// load balancer components are all represented this way.
pub type Entity = Map<String, Value>;

/// Result alias used by every resource client.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Unified error type for all Gcore API operations.
///
/// | Variant | Cause | HTTP Status |
/// |---------|-------|-------------|
/// | `Configuration` | Missing or unusable credential / base URL | N/A |
/// | `InvalidCredential` | Token invalid or expired | 401 |
/// | `InsufficientPermission` | Token lacks permissions | 403 |
/// | `Request` | Any other non-success response | 4xx/5xx |
/// | `Transport` | Connection or network failure | N/A |
/// | `Decode` | Success response with an unexpected body | 2xx |
/// | `Io` | Local file failure during upload/download | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client construction failed before any request was made.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API rejected the token (HTTP 401).
    #[error("Invalid or expired API token")]
    InvalidCredential,

    /// The token is valid but lacks the permissions for this call (HTTP 403).
    #[error("Token lacks necessary permissions")]
    InsufficientPermission,

    /// The API answered with a non-success status.
    ///
    /// `detail` is the message extracted from the error body, or the raw
    /// body when no known message field is present.
    #[error("API request failed ({status}): {detail}")]
    Request {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Server-provided detail
        detail: String,
    },

    /// The request never produced a response.
    #[error("Failed to connect to Gcore API: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Unexpected response from Gcore API: {0}")]
    Decode(#[source] reqwest::Error),

    /// A local file could not be read or written.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Builds the error for a non-success response.
    ///
    /// 401 and 403 map to the dedicated authentication variants; everything
    /// else becomes [`ApiError::Request`] with the extracted detail.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::InvalidCredential,
            StatusCode::FORBIDDEN => Self::InsufficientPermission,
            _ => Self::Request {
                status,
                detail: extract_error_detail(status, body),
            },
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::InvalidCredential => Some(StatusCode::UNAUTHORIZED),
            Self::InsufficientPermission => Some(StatusCode::FORBIDDEN),
            Self::Request { status, .. } => Some(*status),
            Self::Transport(e) | Self::Decode(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` for the 401/403 variants.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::InvalidCredential | Self::InsufficientPermission)
    }
}

/// Extracts a human-readable message from a Gcore error body.
///
/// The API is not consistent about the shape of its error payloads. The
/// following are recognised, in order:
///
/// ```json
/// {"message": "..."}
/// {"detail": "..."}
/// {"error": "..."}
/// {"error": {"message": "..."}}
/// {"errors": [{"message": "..."}]}
/// ```
///
/// Falls back to the trimmed raw body, or to the status reason when the body
/// is empty.
pub fn extract_error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        for key in ["message", "detail", "error"] {
            if let Some(message) = json.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
        {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no response body")
            .to_string()
    } else {
        body.to_string()
    }
}

/// State of an asynchronous job (CDN purge task, certificate validation).
///
/// Submitting a purge or a certificate request returns immediately with a
/// pending status; callers poll the matching status endpoint and classify
/// each response with [`TaskState::from_entity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    /// Still running. Carries the raw status string.
    Pending(String),
    /// Reached a successful terminal state.
    Succeeded(String),
    /// Reached a failed terminal state. Carries the error detail.
    Failed(String),
}

impl TaskState {
    /// Classifies a poll response.
    ///
    /// Only `status`, `error` and `detail` are read. An `error` field on a
    /// non-successful status is treated as a failure even when the status
    /// itself is not one of the known failure words. `detail` is often
    /// informational ("Waiting for DNS TXT record") and only supplies the
    /// message once the status already says the job failed.
    pub fn from_entity(entity: &Entity) -> Self {
        let status = entity
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();

        let error = text_field(entity, "error");

        match status.to_lowercase().as_str() {
            "completed" | "complete" | "done" | "success" | "succeeded" | "active" | "issued" => {
                Self::Succeeded(status)
            }
            "failed" | "error" | "cancelled" | "canceled" | "expired" => Self::Failed(
                error
                    .or_else(|| text_field(entity, "detail"))
                    .unwrap_or(status),
            ),
            _ => match error {
                Some(detail) => Self::Failed(detail),
                None => Self::Pending(status),
            },
        }
    }

    /// Returns `true` once the job will no longer change state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending(_))
    }
}

/// A non-empty field rendered as text. Null and empty strings count as absent.
fn text_field(entity: &Entity, key: &str) -> Option<String> {
    match entity.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> Entity {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_response_maps_auth_statuses() {
        assert!(matches!(
            ApiError::from_response(StatusCode::UNAUTHORIZED, ""),
            ApiError::InvalidCredential
        ));
        assert!(matches!(
            ApiError::from_response(StatusCode::FORBIDDEN, ""),
            ApiError::InsufficientPermission
        ));
    }

    #[test]
    fn test_from_response_carries_status_and_detail() {
        let err = ApiError::from_response(
            StatusCode::NOT_FOUND,
            r#"{"message": "Resource not found"}"#,
        );
        match err {
            ApiError::Request { status, detail } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(detail, "Resource not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_error_detail_formats() {
        let s = StatusCode::BAD_REQUEST;
        assert_eq!(extract_error_detail(s, r#"{"detail": "bad ttl"}"#), "bad ttl");
        assert_eq!(extract_error_detail(s, r#"{"error": "nope"}"#), "nope");
        assert_eq!(
            extract_error_detail(s, r#"{"error": {"message": "nested"}}"#),
            "nested"
        );
        assert_eq!(
            extract_error_detail(s, r#"{"errors": [{"message": "first"}]}"#),
            "first"
        );
        assert_eq!(extract_error_detail(s, "plain text\n"), "plain text");
        assert_eq!(extract_error_detail(s, ""), "Bad Request");
    }

    #[test]
    fn test_task_state_classification() {
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "pending"}))),
            TaskState::Pending("pending".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "completed", "progress": 100}))),
            TaskState::Succeeded("completed".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "active"}))),
            TaskState::Succeeded("active".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "failed", "error": "origin unreachable"}))),
            TaskState::Failed("origin unreachable".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "pending_validation", "error": "CAA record blocks issuance"}))),
            TaskState::Failed("CAA record blocks issuance".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "pending", "error": null}))),
            TaskState::Pending("pending".into())
        );
    }

    #[test]
    fn test_task_state_detail_is_informational_while_pending() {
        assert_eq!(
            TaskState::from_entity(&entity(json!({
                "status": "pending",
                "detail": "Waiting for DNS TXT record _acme-challenge.example.com"
            }))),
            TaskState::Pending("pending".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({"status": "failed", "detail": "Domain not delegated"}))),
            TaskState::Failed("Domain not delegated".into())
        );
        assert_eq!(
            TaskState::from_entity(&entity(json!({
                "status": "failed",
                "error": "CAA record blocks issuance",
                "detail": "see logs"
            }))),
            TaskState::Failed("CAA record blocks issuance".into())
        );
    }

    #[test]
    fn test_task_state_terminal() {
        assert!(!TaskState::Pending("pending".into()).is_terminal());
        assert!(TaskState::Succeeded("completed".into()).is_terminal());
        assert!(TaskState::Failed("boom".into()).is_terminal());
    }
}
