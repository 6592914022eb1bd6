//! Probdex server.
//!
//! An HTTP search API over a PostgreSQL table of unified coding-interview
//! problems (LeetCode/LintCode cross-references plus curated practice-list
//! flags).

use clap::Parser;
use probdex_rest::{ServerConfig, create_app_with_config, init_logging};
use probdex_store::{PostgresConfig, PostgresStore};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Probdex server"
    );

    let store_config = PostgresConfig::from_env();
    let store = PostgresStore::new(store_config).await?;

    if config.init_schema {
        store.init_schema().await?;
    }

    let app = create_app_with_config(store, config.clone());
    serve(app, &config).await
}
