//! PostgreSQL store implementation.
//!
//! Connection pooling via deadpool-postgres; statements execute on pooled
//! tokio-postgres clients. Concurrent requests may run against distinct
//! pooled connections; the pool is the only state shared across requests.
//!
//! Every pooled session carries a `statement_timeout` so a slow query cannot
//! hold a request open indefinitely.

use std::fmt::Debug;
use std::time::Duration;

use deadpool_postgres::{Config, Pool, Runtime, SslMode};
use serde::{Deserialize, Serialize};
use tokio_postgres::NoTls;
use tracing::info;

use async_trait::async_trait;

use crate::core::ProblemStore;
use crate::error::{StoreError, StoreResult};
use crate::record::ProblemRecord;
use crate::router::Statement;

/// Schema for the problem table. Row import is an out-of-band process.
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS problems (
    unified_id INTEGER PRIMARY KEY,
    lc_id INTEGER,
    lint_id INTEGER,
    lc_title TEXT,
    lint_title TEXT,
    lc_url TEXT,
    lint_url TEXT,
    lc_difficulty TEXT,
    lint_difficulty TEXT,
    lc_tags TEXT,
    grind75 BOOLEAN NOT NULL DEFAULT FALSE,
    blind75 BOOLEAN NOT NULL DEFAULT FALSE,
    neetcode150 BOOLEAN NOT NULL DEFAULT FALSE
);";

/// Configuration for the PostgreSQL store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// PostgreSQL host.
    #[serde(default = "default_host")]
    pub host: String,

    /// PostgreSQL port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name.
    #[serde(default = "default_dbname")]
    pub dbname: String,

    /// Database user.
    #[serde(default = "default_user")]
    pub user: String,

    /// Database password.
    #[serde(default)]
    pub password: Option<String>,

    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Statement timeout in milliseconds, applied to every pooled session.
    #[serde(default = "default_statement_timeout_ms")]
    pub statement_timeout_ms: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_dbname() -> String {
    "probdex".to_string()
}

fn default_user() -> String {
    "probdex".to_string()
}

fn default_max_connections() -> usize {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_statement_timeout_ms() -> u64 {
    5000
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dbname: default_dbname(),
            user: default_user(),
            password: None,
            max_connections: default_max_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            statement_timeout_ms: default_statement_timeout_ms(),
        }
    }
}

impl PostgresConfig {
    /// Creates a configuration from environment variables.
    ///
    /// Reads the following variables:
    /// - `DB_HOST` (default: "localhost")
    /// - `DB_PORT` (default: 5432)
    /// - `DB_DATABASE` (default: "probdex")
    /// - `DB_USER` (default: "probdex")
    /// - `DB_PASSWORD`
    /// - `DB_MAX_CONNECTIONS` (default: 10)
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| default_host()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_port),
            dbname: std::env::var("DB_DATABASE").unwrap_or_else(|_| default_dbname()),
            user: std::env::var("DB_USER").unwrap_or_else(|_| default_user()),
            password: std::env::var("DB_PASSWORD").ok(),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(default_max_connections),
            ..Default::default()
        }
    }
}

/// PostgreSQL-backed problem store.
pub struct PostgresStore {
    pool: Pool,
}

impl Debug for PostgresStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStore").finish_non_exhaustive()
    }
}

impl PostgresStore {
    /// Creates a new store with the given configuration.
    ///
    /// Builds the connection pool and verifies connectivity with one round
    /// trip before returning.
    pub async fn new(config: PostgresConfig) -> StoreResult<Self> {
        let pool = Self::create_pool(&config)?;

        let client = pool.get().await.map_err(|e| StoreError::ConnectionFailed {
            message: e.to_string(),
        })?;
        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| StoreError::ConnectionFailed {
                message: e.to_string(),
            })?;
        drop(client);

        info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            max_connections = config.max_connections,
            "Connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    fn create_pool(config: &PostgresConfig) -> StoreResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.dbname = Some(config.dbname.clone());
        cfg.user = Some(config.user.clone());
        cfg.password = config.password.clone();
        cfg.ssl_mode = Some(SslMode::Prefer);
        cfg.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        // Applied per session, so every pooled connection gets the bound.
        cfg.options = Some(format!(
            "-c statement_timeout={}",
            config.statement_timeout_ms
        ));

        let pool = cfg
            .builder(NoTls)
            .map_err(|e| StoreError::ConnectionFailed {
                message: format!("failed to create pool builder: {e}"),
            })?
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| StoreError::ConnectionFailed {
                message: e.to_string(),
            })?;

        Ok(pool)
    }

    /// Creates the problem table if it does not exist.
    pub async fn init_schema(&self) -> StoreResult<()> {
        let client = self.get_client().await?;
        client
            .batch_execute(SCHEMA)
            .await
            .map_err(|e| StoreError::QueryFailed {
                message: format!("failed to initialize schema: {e}"),
            })?;
        Ok(())
    }

    async fn get_client(&self) -> StoreResult<deadpool_postgres::Client> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::ConnectionFailed {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl ProblemStore for PostgresStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn search(&self, statement: &Statement) -> StoreResult<Vec<ProblemRecord>> {
        let client = self.get_client().await?;

        let rows = client
            .query(&statement.sql, &statement.pg_params())
            .await
            .map_err(|e| StoreError::QueryFailed {
                message: e.to_string(),
            })?;

        rows.iter()
            .map(|row| {
                ProblemRecord::from_row(row).map_err(|e| StoreError::QueryFailed {
                    message: format!("failed to decode row: {e}"),
                })
            })
            .collect()
    }

    async fn ping(&self) -> StoreResult<()> {
        let client = self.get_client().await?;
        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| StoreError::QueryFailed {
                message: e.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostgresConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_schema_names_every_record_column() {
        for column in ProblemRecord::COLUMNS.split(", ") {
            assert!(SCHEMA.contains(column), "schema missing column {column}");
        }
    }
}
