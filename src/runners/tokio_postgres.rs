use async_trait::async_trait;
use tokio_postgres::{types::ToSql, Client, NoTls};
use tracing::error;

use crate::error::{Result, SqrsError};
use crate::traits::Runner;
use crate::types::{ExecResult, RawQueryResult, SqlValue};

/// PostgreSQL runner backed by tokio-postgres.
///
/// Statements must use `$N` placeholders; pair it with
/// [`PlaceholderFormat::Dollar`](crate::PlaceholderFormat::Dollar).
pub struct TokioPostgresRunner {
    client: Client,
}

impl TokioPostgresRunner {
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| SqrsError::ConnectionFailed(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!(error = %e, "PostgreSQL connection error");
            }
        });

        Ok(Self { client })
    }

    /// Wrap an already connected client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Runner for TokioPostgresRunner {
    async fn exec(&self, sql: &str, args: &[SqlValue]) -> Result<ExecResult> {
        let converted = to_sql_params(args);
        let rows_affected = self
            .client
            .execute(sql, &param_refs(&converted))
            .await
            .map_err(|e| SqrsError::QueryFailed(e.to_string()))?;
        Ok(ExecResult::new(rows_affected))
    }

    async fn query(&self, sql: &str, args: &[SqlValue]) -> Result<RawQueryResult> {
        let converted = to_sql_params(args);
        let rows = self
            .client
            .query(sql, &param_refs(&converted))
            .await
            .map_err(|e| SqrsError::QueryFailed(e.to_string()))?;

        let columns: Vec<String> = rows
            .first()
            .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
            .unwrap_or_default();

        let result_rows = rows
            .iter()
            .map(|row| (0..row.len()).map(|i| row_value_to_string(row, i)).collect())
            .collect();

        Ok(RawQueryResult::new(columns, result_rows))
    }
}

fn to_sql_params(args: &[SqlValue]) -> Vec<Box<dyn ToSql + Sync + Send>> {
    args.iter().map(sql_value_to_tosql).collect()
}

fn param_refs(converted: &[Box<dyn ToSql + Sync + Send>]) -> Vec<&(dyn ToSql + Sync)> {
    converted
        .iter()
        .map(|b| b.as_ref() as &(dyn ToSql + Sync))
        .collect()
}

fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Int32(i) => Box::new(*i),
        SqlValue::Int64(i) => Box::new(*i),
        SqlValue::Float64(f) => Box::new(*f),
        SqlValue::Bool(b) => Box::new(*b),
    }
}

/// Best-effort text rendering of a column value; NULL becomes "NULL" for
/// every supported column type.
fn row_value_to_string(row: &tokio_postgres::Row, index: usize) -> String {
    if let Ok(val) = row.try_get::<_, Option<i32>>(index) {
        return or_null(val);
    }
    if let Ok(val) = row.try_get::<_, Option<i64>>(index) {
        return or_null(val);
    }
    if let Ok(val) = row.try_get::<_, Option<String>>(index) {
        return or_null(val);
    }
    if let Ok(val) = row.try_get::<_, Option<bool>>(index) {
        return or_null(val);
    }
    if let Ok(val) = row.try_get::<_, Option<f64>>(index) {
        return or_null(val);
    }
    "UNKNOWN".to_string()
}

fn or_null<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "NULL".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_null() {
        assert_eq!(or_null(Some(7_i64)), "7");
        assert_eq!(or_null(Some(true)), "true");
        assert_eq!(or_null::<i32>(None), "NULL");
        assert_eq!(or_null::<f64>(None), "NULL");
    }

    #[test]
    fn test_sql_value_params_convert() {
        let args = vec![
            SqlValue::Null,
            SqlValue::from("a"),
            SqlValue::Int32(1),
            SqlValue::Int64(2),
            SqlValue::Float64(0.5),
            SqlValue::Bool(true),
        ];
        let converted = to_sql_params(&args);
        assert_eq!(param_refs(&converted).len(), args.len());
    }
}
