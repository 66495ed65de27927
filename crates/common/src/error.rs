//! Common error types and handling for Sheethook

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Sheethook application
///
/// The webhook contract knows exactly two user-visible failure classes:
/// a rejected HTTP method (405) and a processing failure (500). Every
/// variant other than `MethodNotAllowed` maps to the 500 class.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Payload(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Payload(_) | Error::Unexpected(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log processing failures with full context
        if matches!(status, StatusCode::INTERNAL_SERVER_ERROR) {
            tracing::error!(error = %self, "Webhook processing error");
        }

        let body = match &self {
            Error::MethodNotAllowed => Json(json!({
                "error": "Method not allowed",
            })),
            _ => Json(json!({
                "error": "Internal server error",
                "message": self.to_string(),
                "timestamp": Utc::now().to_rfc3339(),
            })),
        };

        (status, body).into_response()
    }
}
