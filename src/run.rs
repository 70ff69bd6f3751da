//! Running rendered statements against a [`Runner`].

use tracing::debug;

use crate::error::Result;
use crate::traits::{Runner, Sqlizer};
use crate::types::{ExecResult, QueryResult, Row};

/// Render `statement` and run it with `runner`, discarding any rows.
pub async fn exec_with<S>(runner: &dyn Runner, statement: &S) -> Result<ExecResult>
where
    S: Sqlizer + ?Sized,
{
    let (sql, args) = statement.to_sql()?;
    debug!(sql = %sql, args = args.len(), "exec");
    runner.exec(&sql, &args).await
}

/// Render `statement` and run it with `runner`, collecting the rows.
pub async fn query_with<S>(runner: &dyn Runner, statement: &S) -> Result<QueryResult>
where
    S: Sqlizer + ?Sized,
{
    let (sql, args) = statement.to_sql()?;
    debug!(sql = %sql, args = args.len(), "query");
    let raw = runner.query(&sql, &args).await?;
    Ok(QueryResult::from_raw(raw))
}

/// Like [`query_with`], but expects exactly one row.
pub async fn query_row_with<S>(runner: &dyn Runner, statement: &S) -> Result<Row>
where
    S: Sqlizer + ?Sized,
{
    query_with(runner, statement).await?.single_row()
}
