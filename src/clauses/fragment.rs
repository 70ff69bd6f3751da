use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::traits::Sqlizer;
use crate::types::SqlValue;

/// A piece of SQL appended to one of a builder's slots.
///
/// Either literal text with `?` markers and the values bound to them, or a
/// nested statement rendered when the outer statement is.
#[derive(Clone)]
pub enum Fragment {
    Raw { sql: String, args: Vec<SqlValue> },
    Nested(Arc<dyn Sqlizer>),
}

/// Build a fragment from text and the values for its `?` markers.
///
/// ```
/// use sqrs::expr;
///
/// let f = expr("x = ? AND y = ?", [1, 2]);
/// ```
pub fn expr<I, V>(sql: impl Into<String>, args: I) -> Fragment
where
    I: IntoIterator<Item = V>,
    V: Into<SqlValue>,
{
    Fragment::Raw {
        sql: sql.into(),
        args: args.into_iter().map(Into::into).collect(),
    }
}

impl Fragment {
    /// Embed another statement; it is rendered raw, without placeholder rewriting.
    pub fn nested<S: Sqlizer + 'static>(statement: S) -> Self {
        Fragment::Nested(Arc::new(statement))
    }

    /// Prepend a keyword (`LEFT JOIN`, ...) separated by one space.
    /// Blank fragments stay blank.
    pub(crate) fn keyword(self, keyword: &'static str) -> Self {
        match self {
            blank @ Fragment::Raw { .. } if blank.is_blank() => blank,
            Fragment::Raw { sql, args } => Fragment::Raw {
                sql: format!("{} {}", keyword, sql),
                args,
            },
            nested @ Fragment::Nested(_) => Fragment::nested(Keyword {
                keyword,
                inner: nested,
            }),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Fragment::Raw { sql, .. } if sql.is_empty())
    }

    pub fn render(&self) -> Result<(String, Vec<SqlValue>)> {
        match self {
            Fragment::Raw { sql, args } => Ok((sql.clone(), args.clone())),
            Fragment::Nested(inner) => inner.to_sql_raw(),
        }
    }
}

impl Sqlizer for Fragment {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        self.render()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Raw { sql, args } => f
                .debug_struct("Raw")
                .field("sql", sql)
                .field("args", args)
                .finish(),
            Fragment::Nested(_) => f.write_str("Nested(..)"),
        }
    }
}

impl From<&str> for Fragment {
    fn from(sql: &str) -> Self {
        Fragment::Raw {
            sql: sql.to_string(),
            args: Vec::new(),
        }
    }
}

impl From<String> for Fragment {
    fn from(sql: String) -> Self {
        Fragment::Raw {
            sql,
            args: Vec::new(),
        }
    }
}

struct Keyword {
    keyword: &'static str,
    inner: Fragment,
}

impl Sqlizer for Keyword {
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)> {
        let (sql, args) = self.inner.render()?;
        if sql.is_empty() {
            return Ok((sql, args));
        }
        Ok((format!("{} {}", self.keyword, sql), args))
    }
}

/// Render `parts` into `sql`, separated by `sep`, collecting their arguments.
/// Parts that render to empty text are skipped.
pub(crate) fn append_parts(
    parts: &[Fragment],
    sep: &str,
    sql: &mut String,
    args: &mut Vec<SqlValue>,
) -> Result<()> {
    let mut first = true;
    for part in parts {
        let (part_sql, part_args) = part.render()?;
        if part_sql.is_empty() {
            continue;
        }
        if !first {
            sql.push_str(sep);
        }
        first = false;
        sql.push_str(&part_sql);
        args.extend(part_args);
    }
    Ok(())
}
