//! Search source modes.
//!
//! A [`SourceMode`] selects which column(s) and predicate a query string is
//! matched against. The wire values are the `source` query-parameter strings
//! accepted by the `/search` endpoint.

use crate::error::RouteError;

/// The enumerated set of allowed search modes.
///
/// | mode | matching rule |
/// |------|---------------|
/// | `lc_id` / `lint_id` | exact integer equality on the id column |
/// | `lc_title` / `lint_title` | case-insensitive substring on the title column |
/// | `grind75` / `blind75` / `neetcode150` | list flag is true AND either title substring-matches |
/// | `all_sources` | substring match against either id (as text) or either title |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceMode {
    /// Exact LeetCode id lookup.
    LcId,
    /// Exact LintCode id lookup.
    LintId,
    /// LeetCode title substring search.
    LcTitle,
    /// LintCode title substring search.
    LintTitle,
    /// Grind75 list membership plus title substring.
    Grind75,
    /// Blind75 list membership plus title substring.
    Blind75,
    /// NeetCode150 list membership plus title substring.
    Neetcode150,
    /// Substring search across both ids and both titles.
    AllSources,
}

impl SourceMode {
    /// All modes, in wire order. Useful for tests and documentation.
    pub const ALL: [SourceMode; 8] = [
        SourceMode::LcId,
        SourceMode::LintId,
        SourceMode::LcTitle,
        SourceMode::LintTitle,
        SourceMode::Grind75,
        SourceMode::Blind75,
        SourceMode::Neetcode150,
        SourceMode::AllSources,
    ];

    /// Classifies a raw `source` string into a mode.
    ///
    /// Pure function with no side effects. Any value outside the enumeration
    /// is rejected with [`RouteError::InvalidSource`]; nothing silently falls
    /// through to a default.
    pub fn classify(source: &str) -> Result<SourceMode, RouteError> {
        match source {
            "lc_id" => Ok(SourceMode::LcId),
            "lint_id" => Ok(SourceMode::LintId),
            "lc_title" => Ok(SourceMode::LcTitle),
            "lint_title" => Ok(SourceMode::LintTitle),
            "grind75" => Ok(SourceMode::Grind75),
            "blind75" => Ok(SourceMode::Blind75),
            "neetcode150" => Ok(SourceMode::Neetcode150),
            "all_sources" => Ok(SourceMode::AllSources),
            other => Err(RouteError::InvalidSource {
                source: other.to_string(),
            }),
        }
    }

    /// Returns the wire value for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMode::LcId => "lc_id",
            SourceMode::LintId => "lint_id",
            SourceMode::LcTitle => "lc_title",
            SourceMode::LintTitle => "lint_title",
            SourceMode::Grind75 => "grind75",
            SourceMode::Blind75 => "blind75",
            SourceMode::Neetcode150 => "neetcode150",
            SourceMode::AllSources => "all_sources",
        }
    }
}

impl std::fmt::Display for SourceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
