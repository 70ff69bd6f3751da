use std::sync::Arc;

use super::{append_clause, append_count, append_prefixes};
use crate::clauses::{Conditions, Conjunction, Fragment};
use crate::error::{Result, SqrsError};
use crate::placeholder::PlaceholderFormat;
use crate::traits::Runner;
use crate::types::SqlValue;

/// Builder for DELETE statements.
///
/// Renders its slots in a fixed order regardless of call order:
///
/// ```text
/// [prefixes] DELETE [what] FROM <table> [USING ...] [joins]
/// [WHERE ...] [ORDER BY ...] [LIMIT n] [OFFSET n] [suffixes]
/// ```
///
/// # Example
/// ```
/// use sqrs::{delete, expr, PlaceholderFormat};
///
/// let (sql, args) = delete("test")
///     .where_(expr("x = ? AND y = ?", [1, 2]))
///     .placeholder_format(PlaceholderFormat::Dollar)
///     .to_sql()
///     .unwrap();
///
/// assert_eq!(sql, "DELETE FROM test WHERE x = $1 AND y = $2");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct DeleteBuilder {
    placeholder_format: PlaceholderFormat,
    runner: Option<Arc<dyn Runner>>,

    prefixes: Vec<Fragment>,
    what: Vec<Fragment>,
    from: String,
    using: Vec<Fragment>,
    joins: Vec<Fragment>,
    where_parts: Conditions,
    order_bys: Vec<Fragment>,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Vec<Fragment>,
}

impl DeleteBuilder {
    /// Start a DELETE against `from`; an empty name fails at render time.
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Self::default()
        }
    }

    /// Add an expression rendered before `DELETE`, e.g. a `WITH` clause.
    pub fn prefix(mut self, fragment: impl Into<Fragment>) -> Self {
        self.prefixes.push(fragment.into());
        self
    }

    /// Set the table to delete from.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.from = table.into();
        self
    }

    /// Add to the list rendered between `DELETE` and `FROM` (MySQL multi-table form).
    pub fn what(mut self, fragment: impl Into<Fragment>) -> Self {
        self.what.push(fragment.into());
        self
    }

    /// Add a table to the `USING` list.
    pub fn using(mut self, fragment: impl Into<Fragment>) -> Self {
        self.using.push(fragment.into());
        self
    }

    /// Add a `JOIN` clause.
    pub fn join(self, fragment: impl Into<Fragment>) -> Self {
        self.join_clause(fragment.into().keyword("JOIN"))
    }

    /// Add a `LEFT JOIN` clause.
    pub fn left_join(self, fragment: impl Into<Fragment>) -> Self {
        self.join_clause(fragment.into().keyword("LEFT JOIN"))
    }

    /// Add a `RIGHT JOIN` clause.
    pub fn right_join(self, fragment: impl Into<Fragment>) -> Self {
        self.join_clause(fragment.into().keyword("RIGHT JOIN"))
    }

    /// Add an `INNER JOIN` clause.
    pub fn inner_join(self, fragment: impl Into<Fragment>) -> Self {
        self.join_clause(fragment.into().keyword("INNER JOIN"))
    }

    /// Add a `CROSS JOIN` clause.
    pub fn cross_join(self, fragment: impl Into<Fragment>) -> Self {
        self.join_clause(fragment.into().keyword("CROSS JOIN"))
    }

    /// Add a join rendered exactly as given; the fragment supplies its own keyword.
    pub fn join_clause(mut self, fragment: impl Into<Fragment>) -> Self {
        self.joins.push(fragment.into());
        self
    }

    /// Add a condition. Multiple conditions are joined with the builder's
    /// conjunction (`AND` unless changed with [`conjunction`](Self::conjunction)).
    pub fn where_(mut self, condition: impl Into<Fragment>) -> Self {
        self.where_parts.push(condition);
        self
    }

    /// Conjunction used between WHERE conditions.
    pub fn conjunction(mut self, conjunction: Conjunction) -> Self {
        self.where_parts.set_conjunction(conjunction);
        self
    }

    /// Add an ORDER BY expression.
    pub fn order_by(mut self, fragment: impl Into<Fragment>) -> Self {
        self.order_bys.push(fragment.into());
        self
    }

    /// Add a LIMIT to the query.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Add an OFFSET to the query.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Add an expression rendered after everything else, e.g. `RETURNING ...`.
    pub fn suffix(mut self, fragment: impl Into<Fragment>) -> Self {
        self.suffixes.push(fragment.into());
        self
    }

    fn build_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        if self.from.is_empty() {
            return Err(SqrsError::MissingTarget {
                statement: "DELETE",
                clause: "a FROM table",
            });
        }

        let mut sql = String::with_capacity(256);
        let mut args = Vec::new();

        append_prefixes(&self.prefixes, &mut sql, &mut args)?;

        sql.push_str("DELETE");
        append_clause("", &self.what, ", ", &mut sql, &mut args)?;

        sql.push_str(" FROM ");
        sql.push_str(&self.from);

        append_clause("USING", &self.using, ", ", &mut sql, &mut args)?;
        append_clause("", &self.joins, " ", &mut sql, &mut args)?;
        self.where_parts.append_clause("WHERE", &mut sql, &mut args)?;
        append_clause("ORDER BY", &self.order_bys, ", ", &mut sql, &mut args)?;
        append_count("LIMIT", self.limit, &mut sql);
        append_count("OFFSET", self.offset, &mut sql);
        append_clause("", &self.suffixes, " ", &mut sql, &mut args)?;

        Ok((sql, args))
    }
}

impl_statement!(DeleteBuilder);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::select;
    use crate::clauses::{expr, WhereClause};

    #[test]
    fn test_delete_all_clauses() {
        let b = DeleteBuilder::new("")
            .prefix(expr("WITH prefix AS ?", [0]))
            .from("a")
            .what("a.*, b.*")
            .where_(expr("b = ?", [1]))
            .using("other")
            .join("other2 ON (other.id = other2.id)")
            .left_join("other3 ON (other.id = other3.id)")
            .right_join("other4 ON (other.id = other4.id)")
            .cross_join("other5 ON (other.id = other5.id)")
            .inner_join("other6 ON (other.id = other6.id)")
            .join_clause(
                select(["*"])
                    .from("other7")
                    .prefix("JOIN (")
                    .suffix(")"),
            )
            .order_by("c")
            .limit(2)
            .offset(3)
            .suffix(expr("RETURNING ?", [4]));

        let (sql, args) = b.to_sql().unwrap();

        let expected = "WITH prefix AS ? \
            DELETE a.*, b.* FROM a USING other \
            JOIN other2 ON (other.id = other2.id) \
            LEFT JOIN other3 ON (other.id = other3.id) \
            RIGHT JOIN other4 ON (other.id = other4.id) \
            CROSS JOIN other5 ON (other.id = other5.id) \
            INNER JOIN other6 ON (other.id = other6.id) \
            JOIN ( SELECT * FROM other7 ) \
            WHERE b = ? ORDER BY c LIMIT 2 OFFSET 3 \
            RETURNING ?";
        assert_eq!(sql, expected);
        assert_eq!(
            args,
            vec![SqlValue::Int32(0), SqlValue::Int32(1), SqlValue::Int32(4)]
        );
    }

    #[test]
    fn test_missing_from() {
        let err = DeleteBuilder::new("").to_sql().unwrap_err();
        assert!(matches!(
            err,
            SqrsError::MissingTarget {
                statement: "DELETE",
                ..
            }
        ));
    }

    #[test]
    #[should_panic(expected = "DELETE statements must specify a FROM table")]
    fn test_must_sql_panics_without_from() {
        DeleteBuilder::new("").must_sql();
    }

    #[test]
    fn test_placeholder_formats() {
        let b = DeleteBuilder::new("test").where_(expr("x = ? AND y = ?", [1, 2]));

        let (sql, _) = b
            .clone()
            .placeholder_format(PlaceholderFormat::Question)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM test WHERE x = ? AND y = ?");

        let (sql, args) = b
            .placeholder_format(PlaceholderFormat::Dollar)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM test WHERE x = $1 AND y = $2");
        assert_eq!(args, vec![SqlValue::Int32(1), SqlValue::Int32(2)]);
    }

    #[test]
    fn test_render_is_repeatable() {
        let b = DeleteBuilder::new("t")
            .where_(WhereClause::eq("id", 5))
            .suffix(expr("RETURNING ?", ["path"]));

        assert_eq!(b.to_sql().unwrap(), b.to_sql().unwrap());
    }

    #[test]
    fn test_conditions_use_conjunction() {
        let (sql, args) = DeleteBuilder::new("t")
            .where_(expr("a = ?", [1]))
            .where_(WhereClause::eq("b", "x"))
            .conjunction(Conjunction::Or)
            .to_sql()
            .unwrap();

        assert_eq!(sql, "DELETE FROM t WHERE a = ? OR b = ?");
        assert_eq!(args, vec![SqlValue::Int32(1), SqlValue::from("x")]);
    }

    #[test]
    fn test_marker_count_matches_args() {
        let (sql, args) = DeleteBuilder::new("t")
            .where_(expr("a = ?", [1]))
            .where_(expr("b = ?", [2]))
            .where_(expr("c = ?", [3]))
            .to_sql()
            .unwrap();

        assert_eq!(sql.matches('?').count(), args.len());
    }

    #[test]
    fn test_nested_placeholders_numbered_once() {
        let sub = select(["id"])
            .from("archived")
            .where_(expr("age > ?", [30]))
            .placeholder_format(PlaceholderFormat::Dollar);

        let (sql, args) = DeleteBuilder::new("users")
            .where_(expr("org = ?", [7]))
            .where_(sub.prefix("id IN (").suffix(")"))
            .placeholder_format(PlaceholderFormat::Dollar)
            .to_sql()
            .unwrap();

        assert_eq!(
            sql,
            "DELETE FROM users WHERE org = $1 AND id IN ( SELECT id FROM archived WHERE age > $2 )"
        );
        assert_eq!(args, vec![SqlValue::Int32(7), SqlValue::Int32(30)]);
    }

    #[test]
    fn test_blank_slots_are_omitted() {
        let cases = [
            DeleteBuilder::new("t").where_(""),
            DeleteBuilder::new("t").suffix(""),
            DeleteBuilder::new("t").prefix(""),
            DeleteBuilder::new("t").what("").using("").join_clause(""),
            DeleteBuilder::new("t").order_by(String::new()),
        ];
        for b in cases {
            assert_eq!(b.to_sql().unwrap().0, "DELETE FROM t");
        }
    }

    #[test]
    fn test_blank_fragment_among_others() {
        let (sql, args) = DeleteBuilder::new("t")
            .prefix("")
            .prefix(expr("WITH x AS (SELECT ?)", [1]))
            .where_("")
            .where_(expr("id = ?", [2]))
            .suffix("")
            .suffix("RETURNING id")
            .to_sql()
            .unwrap();

        assert_eq!(
            sql,
            "WITH x AS (SELECT ?) DELETE FROM t WHERE id = ? RETURNING id"
        );
        assert_eq!(args, vec![SqlValue::Int32(1), SqlValue::Int32(2)]);
    }

    #[test]
    fn test_must_sql_matches_to_sql() {
        let b = DeleteBuilder::new("test")
            .where_(expr("x = ?", [1]))
            .suffix(expr("RETURNING ?", ["id"]))
            .placeholder_format(PlaceholderFormat::Dollar);

        assert_eq!(b.must_sql(), b.to_sql().unwrap());
    }
}
