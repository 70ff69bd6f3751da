#[macro_use]
mod statement_macros;

mod delete;
mod select;

pub use self::delete::DeleteBuilder;
pub use self::select::SelectBuilder;

use crate::clauses::{append_parts, Fragment};
use crate::error::Result;
use crate::types::SqlValue;

/// Start a DELETE statement against `from`.
pub fn delete(from: impl Into<String>) -> DeleteBuilder {
    DeleteBuilder::new(from)
}

/// Start a SELECT statement with the given result columns.
pub fn select<I, C>(columns: I) -> SelectBuilder
where
    I: IntoIterator<Item = C>,
    C: Into<Fragment>,
{
    SelectBuilder::new().columns(columns)
}

/// Append `<prefixes joined by " "> ` at the start of a statement; nothing
/// when the prefixes render to empty text.
fn append_prefixes(parts: &[Fragment], sql: &mut String, args: &mut Vec<SqlValue>) -> Result<()> {
    let mut rendered = String::new();
    append_parts(parts, " ", &mut rendered, args)?;
    if !rendered.is_empty() {
        sql.push_str(&rendered);
        sql.push(' ');
    }
    Ok(())
}

/// Append ` <keyword> <parts joined by sep>`; nothing when the parts render
/// to empty text. An empty keyword appends just the space and the parts.
fn append_clause(
    keyword: &str,
    parts: &[Fragment],
    sep: &str,
    sql: &mut String,
    args: &mut Vec<SqlValue>,
) -> Result<()> {
    let mut rendered = String::new();
    append_parts(parts, sep, &mut rendered, args)?;
    if rendered.is_empty() {
        return Ok(());
    }
    sql.push(' ');
    if !keyword.is_empty() {
        sql.push_str(keyword);
        sql.push(' ');
    }
    sql.push_str(&rendered);
    Ok(())
}

fn append_count(keyword: &str, value: Option<u64>, sql: &mut String) {
    if let Some(n) = value {
        sql.push(' ');
        sql.push_str(keyword);
        sql.push(' ');
        sql.push_str(&n.to_string());
    }
}
