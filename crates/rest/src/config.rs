//! Server configuration for the search API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SEARCH_SERVER_PORT` | 3000 | Server port |
//! | `SEARCH_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `SEARCH_LOG_LEVEL` | info | Log level |
//! | `SEARCH_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `SEARCH_ENABLE_CORS` | true | Enable CORS |
//! | `SEARCH_CORS_ORIGINS` | * | Allowed origins |
//! | `SEARCH_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `SEARCH_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//!
//! CORS defaults to any origin because the primary caller is a browser
//! extension context, not a same-origin web page.
//!
//! Database connection parameters are read separately by
//! [`probdex_store::PostgresConfig::from_env`].

use clap::Parser;

/// Server configuration for the search API.
///
/// Construct from environment variables with [`ServerConfig::from_env`],
/// from command line arguments with [`ServerConfig::parse`], or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "probdex")]
#[command(about = "Coding-interview problem search API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "SEARCH_SERVER_PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "SEARCH_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "SEARCH_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "SEARCH_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "SEARCH_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "SEARCH_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "SEARCH_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "SEARCH_CORS_HEADERS",
        default_value = "Content-Type,Accept"
    )]
    pub cors_headers: String,

    /// Initialize the database schema at startup.
    #[arg(long, env = "SEARCH_INIT_SCHEMA", default_value = "true")]
    pub init_schema: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            init_schema: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            init_schema: false,
        }
    }
}
