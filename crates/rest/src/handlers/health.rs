//! Health check endpoint handlers.
//!
//! Simple probes for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use probdex_store::ProblemStore;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Response>
where
    S: ProblemStore + Send + Sync,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for the liveness probe.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for the readiness probe.
///
/// Pings the store to verify database connectivity.
///
/// # HTTP Request
///
/// `GET /_readiness`
pub async fn readiness_handler<S>(State(state): State<AppState<S>>) -> ApiResult<Response>
where
    S: ProblemStore + Send + Sync,
{
    debug!("Processing readiness check request");

    state.store().ping().await?;

    let response = serde_json::json!({
        "status": "ready",
        "backend": state.store().backend_name(),
        "checks": {
            "store": "ok"
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
