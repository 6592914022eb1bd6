//! Route configuration for the search API.

use axum::{Router, routing::get};
use probdex_store::ProblemStore;

use crate::handlers;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /search` - Problem search
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe (pings the store)
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ProblemStore + Send + Sync + 'static,
{
    Router::new()
        .route("/search", get(handlers::search_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<S>))
        .with_state(state)
}
