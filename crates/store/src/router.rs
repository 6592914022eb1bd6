//! Query routing: validation and parameterized statement construction.
//!
//! [`route`] maps a raw `(query, source)` pair to exactly one of four fixed
//! statement shapes. Caller text only ever travels through bound parameters;
//! the SQL strings are assembled from trusted column names owned by
//! [`SourceMode`].
//!
//! No `ORDER BY` is issued: result ordering is the store's natural return
//! order and is not stable across ties.

use crate::error::RouteError;
use crate::record::ProblemRecord;
use crate::source::SourceMode;

use tokio_postgres::types::ToSql;

/// Fixed ceiling on returned rows.
///
/// Keeps payloads small for the extension popup; deliberately not
/// user-configurable.
pub const RESULT_LIMIT: u32 = 20;

/// A value bound to a statement placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// An integer parameter (identifier lookups).
    Int(i32),
    /// A text parameter (wildcard-wrapped ILIKE patterns).
    Text(String),
}

impl SqlParam {
    /// Borrows the parameter as a postgres-bindable value.
    pub fn as_pg(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlParam::Int(value) => value,
            SqlParam::Text(value) => value,
        }
    }
}

/// A SQL statement with its bound parameters.
///
/// Each distinct predicate position gets its own parameter slot, even when
/// positions share a value, because the executor does not reuse a parameter
/// across positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The statement text. Contains only `$n` placeholders for values.
    pub sql: String,
    /// Bound values, one per placeholder, in order.
    pub params: Vec<SqlParam>,
}

impl Statement {
    /// Borrows all parameters in placeholder order for execution.
    pub fn pg_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(SqlParam::as_pg).collect()
    }
}

/// Validates a raw request and builds the statement for it.
///
/// # Errors
///
/// - [`RouteError::MissingQuery`] when `query` is absent or empty after trimming
/// - [`RouteError::MissingSource`] when `source` is absent
/// - [`RouteError::InvalidSource`] when `source` is not a known mode
/// - [`RouteError::NotANumber`] for id modes when `query` is not a base-10 integer
pub fn route(query: Option<&str>, source: Option<&str>) -> Result<Statement, RouteError> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let Some(query) = query else {
        return Err(RouteError::MissingQuery);
    };
    let Some(source) = source else {
        return Err(RouteError::MissingSource);
    };
    let mode = SourceMode::classify(source)?;

    match mode {
        SourceMode::LcId | SourceMode::LintId => {
            let id: i32 = query.parse().map_err(|_| RouteError::NotANumber {
                query: query.to_string(),
            })?;
            Ok(id_lookup(id_column(mode), id))
        }
        SourceMode::LcTitle | SourceMode::LintTitle => {
            Ok(title_search(title_column(mode), pattern(query)))
        }
        SourceMode::Grind75 | SourceMode::Blind75 | SourceMode::Neetcode150 => {
            Ok(list_search(mode.as_str(), pattern(query)))
        }
        SourceMode::AllSources => Ok(all_sources_search(pattern(query))),
    }
}

/// Wraps a query in SQL wildcards for substring matching.
fn pattern(query: &str) -> String {
    format!("%{query}%")
}

fn id_column(mode: SourceMode) -> &'static str {
    match mode {
        SourceMode::LcId => "lc_id",
        SourceMode::LintId => "lint_id",
        _ => unreachable!("not an id mode"),
    }
}

fn title_column(mode: SourceMode) -> &'static str {
    match mode {
        SourceMode::LcTitle => "lc_title",
        SourceMode::LintTitle => "lint_title",
        _ => unreachable!("not a title mode"),
    }
}

/// Exact equality on an integer id column.
fn id_lookup(column: &str, id: i32) -> Statement {
    Statement {
        sql: format!(
            "SELECT {} FROM problems WHERE {column} = $1 LIMIT {RESULT_LIMIT}",
            ProblemRecord::COLUMNS
        ),
        params: vec![SqlParam::Int(id)],
    }
}

/// Case-insensitive substring match on a title column.
fn title_search(column: &str, pattern: String) -> Statement {
    Statement {
        sql: format!(
            "SELECT {} FROM problems WHERE {column} ILIKE $1 LIMIT {RESULT_LIMIT}",
            ProblemRecord::COLUMNS
        ),
        params: vec![SqlParam::Text(pattern)],
    }
}

/// List membership flag plus substring match on either title.
fn list_search(flag: &str, pattern: String) -> Statement {
    Statement {
        sql: format!(
            "SELECT {} FROM problems WHERE {flag} = TRUE \
             AND (lc_title ILIKE $1 OR lint_title ILIKE $2) LIMIT {RESULT_LIMIT}",
            ProblemRecord::COLUMNS
        ),
        params: vec![SqlParam::Text(pattern.clone()), SqlParam::Text(pattern)],
    }
}

/// Substring match across both ids (as text) and both titles.
fn all_sources_search(pattern: String) -> Statement {
    Statement {
        sql: format!(
            "SELECT {} FROM problems WHERE \
             CAST(lc_id AS TEXT) ILIKE $1 OR CAST(lint_id AS TEXT) ILIKE $2 \
             OR lc_title ILIKE $3 OR lint_title ILIKE $4 LIMIT {RESULT_LIMIT}",
            ProblemRecord::COLUMNS
        ),
        params: vec![
            SqlParam::Text(pattern.clone()),
            SqlParam::Text(pattern.clone()),
            SqlParam::Text(pattern.clone()),
            SqlParam::Text(pattern),
        ],
    }
}
