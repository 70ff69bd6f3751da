use std::sync::Arc;

use super::{append_clause, append_count, append_prefixes};
use crate::clauses::{Conditions, Conjunction, Fragment};
use crate::error::{Result, SqrsError};
use crate::placeholder::PlaceholderFormat;
use crate::traits::{Runner, Sqlizer};
use crate::types::SqlValue;

/// Builder for SELECT statements.
///
/// `FROM` is optional (`SELECT 1` is valid); at least one result column is not.
#[derive(Clone, Default)]
pub struct SelectBuilder {
    placeholder_format: PlaceholderFormat,
    runner: Option<Arc<dyn Runner>>,

    prefixes: Vec<Fragment>,
    distinct: bool,
    columns: Vec<Fragment>,
    from: Option<Fragment>,
    joins: Vec<Fragment>,
    where_parts: Conditions,
    group_bys: Vec<Fragment>,
    having_parts: Conditions,
    order_bys: Vec<Fragment>,
    limit: Option<u64>,
    offset: Option<u64>,
    suffixes: Vec<Fragment>,
}

impl SelectBuilder {
    /// Start an empty SELECT; add columns before rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expression rendered before `SELECT`, e.g. a `WITH` clause.
    pub fn prefix(mut self, fragment: impl Into<Fragment>) -> Self {
        self.prefixes.push(fragment.into());
        self
    }

    /// Render `SELECT DISTINCT`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add result columns.
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Fragment>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Add a single result column, which may carry arguments or be a subquery.
    pub fn column(mut self, column: impl Into<Fragment>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Set the FROM source: a table name, or any fragment.
    pub fn from(mut self, source: impl Into<Fragment>) -> Self {
        self.from = Some(source.into());
        self
    }

    /// Select from a subquery, rendered as `(<subquery>) AS <alias>`.
    pub fn from_select(mut self, subquery: SelectBuilder, alias: impl Into<String>) -> Self {
        self.from = Some(Fragment::nested(Aliased {
            inner: subquery,
            alias: alias.into(),
        }));
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

    /// Add a WHERE condition.
    pub fn where_(mut self, condition: impl Into<Fragment>) -> Self {
        self.where_parts.push(condition);
        self
    }

    /// Conjunction used between WHERE conditions.
    pub fn conjunction(mut self, conjunction: Conjunction) -> Self {
        self.where_parts.set_conjunction(conjunction);
        self
    }

    /// Add a GROUP BY expression.
    pub fn group_by(mut self, fragment: impl Into<Fragment>) -> Self {
        self.group_bys.push(fragment.into());
        self
    }

    /// Add a HAVING condition; these are always joined with AND.
    pub fn having(mut self, condition: impl Into<Fragment>) -> Self {
        self.having_parts.push(condition);
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

    /// Add an expression rendered after everything else, e.g. `FOR UPDATE`.
    pub fn suffix(mut self, fragment: impl Into<Fragment>) -> Self {
        self.suffixes.push(fragment.into());
        self
    }

    fn build_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        if self.columns.is_empty() {
            return Err(SqrsError::MissingTarget {
                statement: "SELECT",
                clause: "at least one result column",
            });
        }

        let mut sql = String::with_capacity(256);
        let mut args = Vec::new();

        append_prefixes(&self.prefixes, &mut sql, &mut args)?;

        sql.push_str("SELECT");
        if self.distinct {
            sql.push_str(" DISTINCT");
        }
        append_clause("", &self.columns, ", ", &mut sql, &mut args)?;

        if let Some(ref from) = self.from {
            append_clause("FROM", std::slice::from_ref(from), "", &mut sql, &mut args)?;
        }

        append_clause("", &self.joins, " ", &mut sql, &mut args)?;
        self.where_parts.append_clause("WHERE", &mut sql, &mut args)?;
        append_clause("GROUP BY", &self.group_bys, ", ", &mut sql, &mut args)?;
        self.having_parts.append_clause("HAVING", &mut sql, &mut args)?;
        append_clause("ORDER BY", &self.order_bys, ", ", &mut sql, &mut args)?;
        append_count("LIMIT", self.limit, &mut sql);
        append_count("OFFSET", self.offset, &mut sql);
        append_clause("", &self.suffixes, " ", &mut sql, &mut args)?;

        Ok((sql, args))
    }
}

impl_statement!(SelectBuilder);

struct Aliased {
    inner: SelectBuilder,
    alias: String,
}

impl Sqlizer for Aliased {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let (sql, args) = self.inner.to_sql_raw()?;
        Ok((format!("({}) AS {}", sql, self.alias), args))
    }
}
