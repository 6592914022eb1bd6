//! Search endpoint handler.
//!
//! The boundary operation: raw request parameters in, JSON array of problem
//! records out. Each call is independent and stateless; the only shared
//! resource is the store's connection pool.

use axum::{Json, extract::Query, extract::State};
use probdex_store::record::ProblemRecord;
use probdex_store::router::route;
use probdex_store::ProblemStore;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::AppState;

/// Raw query parameters for `/search`.
///
/// Both parameters are optional at the extraction layer so that the router
/// can report a specific validation reason instead of axum rejecting the
/// request with a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// The search text.
    pub query: Option<String>,
    /// The search mode; one of the [`SourceMode`](probdex_store::SourceMode)
    /// wire values.
    pub source: Option<String>,
}

/// Handler for the search endpoint.
///
/// # HTTP Request
///
/// `GET /search?query=<string>&source=<mode>`
///
/// # Response
///
/// - `200 OK` - JSON array of problem records (possibly empty), capped at 20
/// - `400 Bad Request` - `{"error": <reason>}` for missing/invalid parameters
/// - `500 Internal Server Error` - `{"error": ...}` opaque store failure
pub async fn search_handler<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<ProblemRecord>>>
where
    S: ProblemStore + Send + Sync,
{
    debug!(
        query = params.query.as_deref(),
        source = params.source.as_deref(),
        "Processing search request"
    );

    let statement = route(params.query.as_deref(), params.source.as_deref())?;
    let records = state.store().search(&statement).await?;

    debug!(count = records.len(), "Search complete");
    Ok(Json(records))
}
