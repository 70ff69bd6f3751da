use crate::clauses::Fragment;
use crate::error::Result;
use crate::traits::Sqlizer;
use crate::types::SqlValue;

/// A typed WHERE condition.
/// Supports basic comparisons and logical combinations, rendered with `?` markers.
#[derive(Debug, Clone)]
pub enum WhereClause {
    /// column = value, or column IS NULL
    Eq(String, SqlValue),
    /// column <> value, or column IS NOT NULL
    NotEq(String, SqlValue),
    /// clause AND clause
    And(Box<WhereClause>, Box<WhereClause>),
    /// clause OR clause
    Or(Box<WhereClause>, Box<WhereClause>),
}

impl WhereClause {
    pub fn eq<V: Into<SqlValue>>(column: impl Into<String>, value: V) -> Self {
        WhereClause::Eq(column.into(), value.into())
    }

    pub fn not_eq<V: Into<SqlValue>>(column: impl Into<String>, value: V) -> Self {
        WhereClause::NotEq(column.into(), value.into())
    }

    pub fn and(self, other: WhereClause) -> Self {
        WhereClause::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: WhereClause) -> Self {
        WhereClause::Or(Box::new(self), Box::new(other))
    }

    /// Renders the condition, pushing bound values onto `params` in marker order.
    pub fn build_sql(&self, params: &mut Vec<SqlValue>) -> String {
        match self {
            WhereClause::Eq(col, value) => compare(col, "=", "IS NULL", value, params),
            WhereClause::NotEq(col, value) => compare(col, "<>", "IS NOT NULL", value, params),
            WhereClause::And(left, right) => {
                let left_sql = left.build_sql(params);
                let right_sql = right.build_sql(params);
                format!("({}) AND ({})", left_sql, right_sql)
            }
            WhereClause::Or(left, right) => {
                let left_sql = left.build_sql(params);
                let right_sql = right.build_sql(params);
                format!("({}) OR ({})", left_sql, right_sql)
            }
        }
    }
}

fn compare(
    col: &str,
    op: &str,
    null_test: &str,
    value: &SqlValue,
    params: &mut Vec<SqlValue>,
) -> String {
    if value.is_null() {
        return format!("{} {}", col, null_test);
    }
    params.push(value.clone());
    format!("{} {} ?", col, op)
}

impl Sqlizer for WhereClause {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let mut params = Vec::new();
        let sql = self.build_sql(&mut params);
        Ok((sql, params))
    }
}

impl From<WhereClause> for Fragment {
    fn from(clause: WhereClause) -> Self {
        let mut args = Vec::new();
        let sql = clause.build_sql(&mut args);
        Fragment::Raw { sql, args }
    }
}
