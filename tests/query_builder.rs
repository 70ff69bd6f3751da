use std::sync::Arc;

use sqrs::runners::{InMemoryTestResponseBuilder, InMemoryTestRunner};
use sqrs::{exec_with, expr, select, SqlValue, SqrsClient, SqrsError, WhereClause};

fn client_with(runner: &Arc<InMemoryTestRunner>) -> SqrsClient {
    SqrsClient::with_runner(runner.clone())
}

#[tokio::test]
async fn test_simple_select_single_column() {
    let runner = Arc::new(
        InMemoryTestRunner::new().with_response(
            InMemoryTestResponseBuilder::new()
                .columns(&["id"])
                .row(&["1"])
                .build(),
        ),
    );
    let sb = client_with(&runner).statement_builder();

    let result = sb.select(["users.id"]).from("users").query().await.unwrap();

    runner.assert_last_query("SELECT users.id FROM users", &[]);
    runner.assert_call_count(1);

    let row = result.single_row().unwrap();
    assert_eq!(row.get("id").unwrap(), "1");
}

#[tokio::test]
async fn test_select_with_where_and_limit() {
    let runner = Arc::new(
        InMemoryTestRunner::new().with_response(
            InMemoryTestResponseBuilder::new()
                .columns(&["id"])
                .row(&["1"])
                .row(&["2"])
                .row(&["3"])
                .build(),
        ),
    );
    let sb = client_with(&runner).statement_builder();

    let result = sb
        .select(["users.id"])
        .from("users")
        .where_(WhereClause::eq("users.name", "Test"))
        .limit(3)
        .query()
        .await
        .unwrap();

    runner.assert_last_query(
        "SELECT users.id FROM users WHERE users.name = $1 LIMIT 3",
        &[SqlValue::Text("Test".to_string())],
    );

    let rows = result.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].get("id").unwrap(), "1");
    assert_eq!(rows[2].get("id").unwrap(), "3");
}

#[tokio::test]
async fn test_query_row_on_empty_result() {
    let runner = Arc::new(InMemoryTestRunner::new().with_response(
        InMemoryTestResponseBuilder::new().columns(&["id"]).build(),
    ));
    let sb = client_with(&runner).statement_builder();

    let err = sb
        .select(["id"])
        .from("users")
        .where_(WhereClause::eq("id", 999))
        .query_row()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SqrsError::UnexpectedRowCount {
            expected: 1,
            actual: 0
        }
    ));
}

#[tokio::test]
async fn test_multiple_statements_share_runner() {
    let runner = Arc::new(InMemoryTestRunner::new());
    let sb = client_with(&runner).statement_builder();

    sb.select(["id"]).from("users").query().await.unwrap();
    sb.delete("sessions")
        .where_(expr("expires_at < ?", [1_700_000_000_i64]))
        .exec()
        .await
        .unwrap();

    runner.assert_call_count(2);
    let calls = runner.recorded_calls();
    assert_eq!(calls[0].sql, "SELECT id FROM users");
    assert_eq!(calls[1].sql, "DELETE FROM sessions WHERE expires_at < $1");
    assert_eq!(calls[1].args, vec![SqlValue::Int64(1_700_000_000)]);
}

#[tokio::test]
async fn test_compound_where_clause() {
    let runner = Arc::new(InMemoryTestRunner::new());
    let sb = client_with(&runner).statement_builder();

    sb.select(["users.name"])
        .from("users")
        .where_(WhereClause::eq("users.name", "Admin").and(WhereClause::eq("users.id", 1)))
        .query()
        .await
        .unwrap();

    runner.assert_last_query(
        "SELECT users.name FROM users WHERE (users.name = $1) AND (users.id = $2)",
        &[SqlValue::Text("Admin".to_string()), SqlValue::Int32(1)],
    );
}

#[tokio::test]
async fn test_exec_with_any_sqlizer() {
    let runner = Arc::new(InMemoryTestRunner::new());

    exec_with(&*runner, &expr("VACUUM ?", ["users"]))
        .await
        .unwrap();

    runner.assert_last_exec("VACUUM ?", &[SqlValue::from("users")]);
}

#[test]
fn test_unbound_select_renders_question_marks() {
    let (sql, args) = select(["id"])
        .from("users")
        .where_(expr("name = ?", ["a"]))
        .to_sql()
        .unwrap();

    assert_eq!(sql, "SELECT id FROM users WHERE name = ?");
    assert_eq!(args, vec![SqlValue::from("a")]);
}
