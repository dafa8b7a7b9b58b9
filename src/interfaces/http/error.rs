//! Maps service errors onto `{ "error", "message" }` JSON responses.

use crate::domain::errors::AnalysisError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed client input (400).
    #[error("{0}")]
    BadRequest(String),

    /// Anything else (500). The cause is logged, not returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        if err.is_client_error() {
            AppError::BadRequest(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Invalid ticker", msg),
            AppError::Internal(cause) => {
                error!("HTTP: request failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to analyze ticker",
                    "An internal error occurred while analyzing the ticker".to_string(),
                )
            }
        };

        let body = axum::Json(json!({
            "error": error,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
