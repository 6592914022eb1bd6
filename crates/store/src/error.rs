//! Error types for the store layer.
//!
//! Two categories exist and never mix: [`RouteError`] is client-caused
//! (bad request parameters, rejected before any statement reaches the
//! database), [`StoreError`] is infrastructure-caused (connection or
//! execution failure against PostgreSQL).

use thiserror::Error;

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Validation errors produced by the query router.
///
/// These map to HTTP 400 at the API boundary and carry a human-readable
/// reason safe to echo to the client.
// Implemented by hand rather than via `#[derive(Error)]` because thiserror
// would treat the `source` field of `InvalidSource` as the error's source,
// which `String` cannot be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The query parameter was absent or empty after trimming.
    MissingQuery,

    /// The source parameter was absent.
    MissingSource,

    /// The source parameter did not match any known search mode.
    InvalidSource {
        /// The unrecognized source value.
        source: String,
    },

    /// An identifier search mode was selected but the query does not parse
    /// as a base-10 integer.
    NotANumber {
        /// The query string that failed to parse.
        query: String,
    },
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::MissingQuery | RouteError::MissingSource => {
                f.write_str("The \"query\" and \"source\" parameters are required.")
            }
            RouteError::InvalidSource { .. } => f.write_str("Invalid source specified."),
            RouteError::NotANumber { .. } => f.write_str("ID must be a number."),
        }
    }
}

impl std::error::Error for RouteError {}

/// Infrastructure errors from the PostgreSQL accessor.
///
/// These map to an opaque HTTP 500 at the API boundary; the message is
/// logged server-side and never echoed to the client.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to obtain or establish a database connection.
    #[error("database connection failed: {message}")]
    ConnectionFailed {
        /// Underlying driver or pool error text.
        message: String,
    },

    /// Statement execution or row decoding failed.
    #[error("database query failed: {message}")]
    QueryFailed {
        /// Underlying driver error text.
        message: String,
    },
}
