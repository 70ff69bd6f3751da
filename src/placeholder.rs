/// Parameter-marker convention of the target database.
///
/// Builders always render `?` internally; the format is applied once, to the
/// final text, when the outermost statement is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderFormat {
    /// `?` markers, left as they are (MySQL, SQLite).
    #[default]
    Question,
    /// `$1, $2, ...` (PostgreSQL).
    Dollar,
    /// `:1, :2, ...` (Oracle).
    Colon,
    /// `@p1, @p2, ...` (SQL Server).
    AtP,
}

impl PlaceholderFormat {
    /// Rewrite every `?` marker in `sql` into this format.
    ///
    /// For the numbered formats, `??` is an escaped literal question mark: it
    /// renders as a single `?` and does not take a number.
    pub fn replace_placeholders(&self, sql: &str) -> String {
        let prefix = match self {
            PlaceholderFormat::Question => return sql.to_string(),
            PlaceholderFormat::Dollar => "$",
            PlaceholderFormat::Colon => ":",
            PlaceholderFormat::AtP => "@p",
        };
        replace_positional(sql, prefix)
    }
}

fn replace_positional(sql: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut chars = sql.chars().peekable();
    let mut n = 0usize;

    while let Some(c) = chars.next() {
        if c != '?' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'?') {
            chars.next();
            out.push('?');
            continue;
        }
        n += 1;
        out.push_str(prefix);
        out.push_str(&n.to_string());
    }

    out
}
