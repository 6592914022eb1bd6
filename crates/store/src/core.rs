//! The store trait boundary.
//!
//! The HTTP layer talks to the database only through [`ProblemStore`], which
//! lets integration tests substitute a stub accessor for the real pool.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::record::ProblemRecord;
use crate::router::Statement;

/// Read-only access to the problem table.
///
/// Implementations execute parameterized statements as-is and never
/// interpolate caller-controlled text into statement bodies. A failed call
/// is reported immediately; there is no retry policy at this layer.
#[async_trait]
pub trait ProblemStore {
    /// Returns the backend name for logging and health reporting.
    fn backend_name(&self) -> &'static str;

    /// Executes a search statement and returns the matching records in the
    /// store's natural return order.
    async fn search(&self, statement: &Statement) -> StoreResult<Vec<ProblemRecord>>;

    /// Verifies that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
