mod row;
mod sql_value;

pub use row::{ExecResult, QueryResult, RawQueryResult, Row};
pub use sql_value::SqlValue;
