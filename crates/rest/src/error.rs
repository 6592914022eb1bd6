//! Error types for the search API.
//!
//! Validation failures are client-caused and surface as HTTP 400 with a
//! specific reason. Store failures are infrastructure-caused and surface as
//! an opaque HTTP 500; the underlying fault is logged server-side and never
//! echoed, so schema and connection details cannot leak.
//!
//! All error bodies are `{"error": <message>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use probdex_store::{RouteError, StoreError};
use std::fmt;
use tracing::error;

/// Convenience alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

/// The error type for API operations.
#[derive(Debug)]
pub enum ApiError {
    /// Client-caused validation error (HTTP 400).
    BadRequest {
        /// Human-readable reason, safe to echo.
        message: String,
    },

    /// Infrastructure failure (HTTP 500). The client sees a fixed message.
    Internal,
}

impl ApiError {
    /// The opaque body text for internal errors.
    pub const INTERNAL_MESSAGE: &'static str = "An internal server error occurred.";
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { message } => write!(f, "Bad request: {}", message),
            ApiError::Internal => write!(f, "{}", Self::INTERNAL_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        ApiError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the fault here so no call site can forget to.
        error!(error = %err, "Store operation failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::INTERNAL_MESSAGE.to_string(),
            ),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
