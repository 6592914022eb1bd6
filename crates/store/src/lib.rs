//! # probdex-store - Problem Store Persistence Layer
//!
//! This crate provides the data model, query routing, and PostgreSQL access
//! layer for the Probdex problem search service. It knows how to turn a
//! `(query, source)` pair into one of a fixed set of parameterized SQL
//! statements and how to execute that statement against a pooled PostgreSQL
//! connection.
//!
//! ## Architecture
//!
//! - [`record`] - The [`ProblemRecord`](record::ProblemRecord) row type
//! - [`source`] - The [`SourceMode`](source::SourceMode) search-mode enumeration
//! - [`router`] - Validation and parameterized statement construction
//! - [`core`] - The [`ProblemStore`](core::ProblemStore) trait boundary
//! - [`postgres`] - The deadpool-postgres backed store implementation
//! - [`error`] - Error types ([`RouteError`](error::RouteError), [`StoreError`](error::StoreError))
//!
//! ## Query safety
//!
//! Caller-controlled text is never interpolated into statement bodies. Every
//! value position is bound as a dedicated `$n` parameter, and each predicate
//! position gets its own slot even when positions share a value, because the
//! executor does not reuse parameters across positions.

#![warn(missing_docs)]

pub mod core;
pub mod error;
pub mod postgres;
pub mod record;
pub mod router;
pub mod source;

pub use crate::core::ProblemStore;
pub use error::{RouteError, StoreError, StoreResult};
pub use postgres::{PostgresConfig, PostgresStore};
pub use record::ProblemRecord;
pub use router::{RESULT_LIMIT, SqlParam, Statement, route};
pub use source::SourceMode;
