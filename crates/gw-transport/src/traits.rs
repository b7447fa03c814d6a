//! Transport trait definitions

use crate::error::TransportResult;
use async_trait::async_trait;

/// Outcome of a single direct-row insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row was inserted.
    Inserted,
    /// The destination table already holds a row with this natural key
    /// (HTTP 409). Non-fatal in the per-record path.
    AlreadyExists,
}

/// Capability to execute raw SQL against the target database.
///
/// Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait SqlTransport: Send + Sync {
    /// Execute a block of SQL statements.
    async fn execute_sql(&self, sql: &str) -> TransportResult<()>;

    /// Cheap liveness probe, used by readiness polling.
    async fn ping(&self) -> TransportResult<()>;

    /// Transport identifier for logging.
    fn kind(&self) -> &'static str;
}

/// Capability to insert one structured record at a time via a table
/// resource.
#[async_trait]
pub trait RowTransport: Send + Sync {
    /// Insert a single record into `table`.
    async fn insert_row(
        &self,
        table: &str,
        body: &serde_json::Value,
    ) -> TransportResult<RowOutcome>;
}
