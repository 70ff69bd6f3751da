use crate::error::Result;
use crate::types::SqlValue;

/// Anything that renders to SQL text plus its bound arguments.
pub trait Sqlizer: Send + Sync {
    /// Render the final statement text and its arguments.
    fn to_sql(&self) -> Result<(String, Vec<SqlValue>)>;

    /// Render for embedding inside another statement.
    ///
    /// Placeholders must stay as `?` here; the outermost statement rewrites
    /// them once, so numbering runs across the whole text.
    fn to_sql_raw(&self) -> Result<(String, Vec<SqlValue>)> {
        self.to_sql()
    }
}
