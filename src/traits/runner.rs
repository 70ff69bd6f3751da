use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExecResult, RawQueryResult, SqlValue};

/// Execution capability a builder can be bound to with `run_with`.
///
/// Runners receive fully rendered statement text, with placeholders already
/// in whatever format the builder was configured for, and the arguments in
/// marker order. Errors a runner returns are handed back to the caller as-is.
#[async_trait]
pub trait Runner: Send + Sync {
    /// Run a statement that returns no rows.
    async fn exec(&self, sql: &str, args: &[SqlValue]) -> Result<ExecResult>;

    /// Run a statement and collect the rows it returns.
    async fn query(&self, sql: &str, args: &[SqlValue]) -> Result<RawQueryResult>;
}
