use std::sync::Arc;

use crate::builders::{DeleteBuilder, SelectBuilder};
use crate::clauses::Fragment;
use crate::placeholder::PlaceholderFormat;
use crate::traits::Runner;

/// Statement builder factory.
///
/// Holds the defaults (placeholder format and runner) stamped onto every
/// builder it creates. Each builder can still override them.
#[derive(Clone, Default)]
pub struct StatementBuilder {
    placeholder_format: PlaceholderFormat,
    runner: Option<Arc<dyn Runner>>,
}

impl StatementBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder_format(mut self, format: PlaceholderFormat) -> Self {
        self.placeholder_format = format;
        self
    }

    pub fn run_with(mut self, runner: Arc<dyn Runner>) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Start a DELETE statement against `from`.
    pub fn delete(&self, from: impl Into<String>) -> DeleteBuilder {
        let builder = DeleteBuilder::new(from).placeholder_format(self.placeholder_format);
        match self.runner {
            Some(ref runner) => builder.run_with(Arc::clone(runner)),
            None => builder,
        }
    }

    /// Start a SELECT statement with the given result columns.
    pub fn select<I, C>(&self, columns: I) -> SelectBuilder
    where
        I: IntoIterator<Item = C>,
        C: Into<Fragment>,
    {
        let builder = SelectBuilder::new()
            .columns(columns)
            .placeholder_format(self.placeholder_format);
        match self.runner {
            Some(ref runner) => builder.run_with(Arc::clone(runner)),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clauses::expr;
    use crate::types::SqlValue;

    #[test]
    fn test_defaults_to_question_marks() {
        let (sql, _) = StatementBuilder::new()
            .delete("t")
            .where_(expr("id = ?", [1]))
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM t WHERE id = ?");
    }

    #[test]
    fn test_format_applies_to_every_builder() {
        let sb = StatementBuilder::new().placeholder_format(PlaceholderFormat::Dollar);

        let (sql, _) = sb.delete("t").where_(expr("id = ?", [1])).to_sql().unwrap();
        assert_eq!(sql, "DELETE FROM t WHERE id = $1");

        let (sql, args) = sb
            .select(["name"])
            .from("t")
            .where_(expr("id = ?", [2]))
            .to_sql()
            .unwrap();
        assert_eq!(sql, "SELECT name FROM t WHERE id = $1");
        assert_eq!(args, vec![SqlValue::Int32(2)]);
    }

    #[test]
    fn test_builder_can_override_format() {
        let (sql, _) = StatementBuilder::new()
            .placeholder_format(PlaceholderFormat::Dollar)
            .delete("t")
            .where_(expr("id = ?", [1]))
            .placeholder_format(PlaceholderFormat::Question)
            .to_sql()
            .unwrap();
        assert_eq!(sql, "DELETE FROM t WHERE id = ?");
    }
}
