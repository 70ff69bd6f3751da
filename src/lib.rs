//! sqrs - A fluent SQL statement builder
//!
//! Builders collect fragments through chained calls and render them to SQL
//! text plus an ordered argument list. Placeholders are written as `?` and
//! rewritten to the target database's convention at render time.
//!
//! # Example
//! ```
//! use sqrs::{delete, expr, PlaceholderFormat};
//!
//! let (sql, args) = delete("users")
//!     .where_(expr("id = ?", [42]))
//!     .suffix("RETURNING path")
//!     .placeholder_format(PlaceholderFormat::Dollar)
//!     .to_sql()?;
//!
//! assert_eq!(sql, "DELETE FROM users WHERE id = $1 RETURNING path");
//! assert_eq!(args.len(), 1);
//! # Ok::<(), sqrs::SqrsError>(())
//! ```
//!
//! Running a statement needs a [`Runner`]:
//! ```ignore
//! let client = SqrsClient::connect("postgres://localhost/mydb").await?;
//! let sb = client.statement_builder();
//!
//! let removed = sb
//!     .delete("sessions")
//!     .where_(WhereClause::eq("user_id", 7))
//!     .exec()
//!     .await?;
//! ```

pub mod builders;
pub mod clauses;
pub mod error;
pub mod placeholder;
pub mod run;
pub mod runners;
pub mod statement_builder;
pub mod traits;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use builders::{delete, select, DeleteBuilder, SelectBuilder};
pub use clauses::{expr, Conditions, Conjunction, Fragment, WhereClause};
pub use client::SqrsClient;
pub use error::{Result, SqrsError};
pub use placeholder::PlaceholderFormat;
pub use run::{exec_with, query_row_with, query_with};
pub use statement_builder::StatementBuilder;
pub use traits::{Runner, Sqlizer};
pub use types::{ExecResult, QueryResult, RawQueryResult, Row, SqlValue};
