//! Error types shared across layers.
//!
//! - [`FetchError`] - failures of the upstream statistics source
//! - [`AppError`] - errors returned by services and rendered by HTTP handlers

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Failure to obtain data from a [`crate::domain::repositories::MetricsSource`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to upstream failed: {0}")]
    Transport(String),

    #[error("upstream returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("upstream response is not JSON (content-type: {})", .content_type.as_deref().unwrap_or("none"))]
    NotJson { content_type: Option<String> },

    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Upstream { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::upstream(
            "Failed to load statistics from upstream",
            json!({ "reason": e.to_string() }),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Conflict { message, details } => {
                (StatusCode::CONFLICT, "conflict", message, details)
            }
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_maps_to_upstream() {
        let err: AppError = FetchError::HttpStatus { status: 500 }.into();

        match err {
            AppError::Upstream { details, .. } => {
                assert_eq!(details["reason"], "upstream returned HTTP 500");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_not_json_message() {
        let err = FetchError::NotJson {
            content_type: Some("text/html".to_string()),
        };
        assert!(err.to_string().contains("text/html"));

        let err = FetchError::NotJson { content_type: None };
        assert!(err.to_string().contains("none"));
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), StatusCode::BAD_REQUEST),
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (AppError::conflict("x", json!({})), StatusCode::CONFLICT),
            (AppError::upstream("x", json!({})), StatusCode::BAD_GATEWAY),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
