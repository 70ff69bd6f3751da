use crate::clauses::fragment::{append_parts, Fragment};
use crate::error::Result;
use crate::traits::Sqlizer;
use crate::types::SqlValue;

/// Logical operator placed between accumulated conditions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    fn separator(self) -> &'static str {
        match self {
            Conjunction::And => " AND ",
            Conjunction::Or => " OR ",
        }
    }
}

/// Condition fragments for a WHERE or HAVING slot.
///
/// Fragments are joined with the conjunction as-is; no parentheses are added,
/// so a fragment that mixes operators should bring its own.
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    parts: Vec<Fragment>,
    conjunction: Conjunction,
}

impl Conditions {
    /// Create an empty accumulator joined with AND.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition; its arguments follow those already collected.
    pub fn push(&mut self, condition: impl Into<Fragment>) {
        self.parts.push(condition.into());
    }

    /// Change the operator placed between conditions.
    pub fn set_conjunction(&mut self, conjunction: Conjunction) {
        self.conjunction = conjunction;
    }

    /// The operator placed between conditions.
    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    /// Number of conditions added, including blank ones.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Append `<keyword> <conditions>` to `sql`, preceded by a space.
    /// Writes nothing when the conditions render to empty text.
    pub(crate) fn append_clause(
        &self,
        keyword: &str,
        sql: &mut String,
        args: &mut Vec<SqlValue>,
    ) -> Result<()> {
        let mut rendered = String::new();
        append_parts(&self.parts, self.conjunction.separator(), &mut rendered, args)?;
        if rendered.is_empty() {
            return Ok(());
        }
        sql.push(' ');
        sql.push_str(keyword);
        sql.push(' ');
        sql.push_str(&rendered);
        Ok(())
    }
}

impl Sqlizer for Conditions {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let mut sql = String::new();
        let mut args = Vec::new();
        append_parts(&self.parts, self.conjunction.separator(), &mut sql, &mut args)?;
        Ok((sql, args))
    }
}
