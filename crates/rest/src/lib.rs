//! # probdex-rest - Problem Search HTTP API
//!
//! This crate provides the HTTP surface of the Probdex problem search
//! service: a single search operation over a store of unified
//! coding-interview problems, plus operational probes.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | search | GET | `/search?query=<string>&source=<mode>` |
//! | health | GET | `/health` |
//! | liveness | GET | `/_liveness` |
//! | readiness | GET | `/_readiness` |
//!
//! ## Error Handling
//!
//! All errors are returned as `{"error": <message>}` JSON bodies:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Missing/empty query, missing source, unknown source, non-numeric id query |
//! | 500 | Store failure (message is opaque; detail is logged server-side) |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use probdex_rest::{ServerConfig, create_app_with_config};
//! use probdex_store::{PostgresConfig, PostgresStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = PostgresStore::new(PostgresConfig::from_env()).await?;
//!     let config = ServerConfig::from_env();
//!     let app = create_app_with_config(store, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration
//! - [`error`] - Error types and `{"error": ...}` response mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use probdex_store::ProblemStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: S) -> Router
where
    S: ProblemStore + Send + Sync + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the routes, CORS, request tracing, and the request timeout.
pub fn create_app_with_config<S>(store: S, config: ServerConfig) -> Router
where
    S: ProblemStore + Send + Sync + 'static,
{
    info!(
        "Creating search API server with backend: {}",
        store.backend_name()
    );

    let state = AppState::new(Arc::new(store), config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Cross-origin requests are permitted from any origin by default because
/// the caller is a browser-extension content context.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "probdex_rest={level},probdex_store={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
