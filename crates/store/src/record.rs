//! The normalized problem row returned to clients.

use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// One unified coding-interview problem.
///
/// A record unifies at most one LeetCode entry and at most one LintCode
/// entry describing the same underlying problem; at least one side is
/// expected to be populated, though the store does not enforce it. Records
/// are read-only from the perspective of this service; imports happen out
/// of band.
///
/// Optional fields serialize as `null` when the problem is absent from the
/// corresponding site. The list flags are real booleans on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// Primary identity, immutable once assigned.
    pub unified_id: i32,
    /// LeetCode problem number, if the problem exists there.
    pub lc_id: Option<i32>,
    /// LintCode problem number, if the problem exists there.
    pub lint_id: Option<i32>,
    /// LeetCode title.
    pub lc_title: Option<String>,
    /// LintCode title.
    pub lint_title: Option<String>,
    /// Absolute URL of the LeetCode problem page.
    pub lc_url: Option<String>,
    /// Absolute URL of the LintCode problem page.
    pub lint_url: Option<String>,
    /// LeetCode difficulty (Easy/Medium/Hard).
    pub lc_difficulty: Option<String>,
    /// LintCode difficulty.
    pub lint_difficulty: Option<String>,
    /// Comma-delimited LeetCode topic tags; set semantics, order irrelevant.
    pub lc_tags: Option<String>,
    /// Membership in the Grind75 practice list.
    pub grind75: bool,
    /// Membership in the Blind75 practice list.
    pub blind75: bool,
    /// Membership in the NeetCode150 practice list.
    pub neetcode150: bool,
}

impl ProblemRecord {
    /// The column list every search statement selects, in declaration order.
    pub const COLUMNS: &'static str = "unified_id, lc_id, lint_id, lc_title, lint_title, \
         lc_url, lint_url, lc_difficulty, lint_difficulty, lc_tags, \
         grind75, blind75, neetcode150";

    /// Decodes a record from a database row.
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            unified_id: row.try_get("unified_id")?,
            lc_id: row.try_get("lc_id")?,
            lint_id: row.try_get("lint_id")?,
            lc_title: row.try_get("lc_title")?,
            lint_title: row.try_get("lint_title")?,
            lc_url: row.try_get("lc_url")?,
            lint_url: row.try_get("lint_url")?,
            lc_difficulty: row.try_get("lc_difficulty")?,
            lint_difficulty: row.try_get("lint_difficulty")?,
            lc_tags: row.try_get("lc_tags")?,
            grind75: row.try_get("grind75")?,
            blind75: row.try_get("blind75")?,
            neetcode150: row.try_get("neetcode150")?,
        })
    }
}
