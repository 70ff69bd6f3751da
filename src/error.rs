use thiserror::Error;

/// Error type for sqrs operations
#[derive(Debug, Error)]
pub enum SqrsError {
    /// The statement was rendered before its mandatory clause was supplied.
    #[error("{statement} statements must specify {clause}")]
    MissingTarget {
        statement: &'static str,
        clause: &'static str,
    },

    /// `exec`/`query` was called on a builder with no runner bound.
    #[error("cannot run; no runner set (see run_with)")]
    RunnerNotSet,

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Expected {expected} row(s), got {actual}")]
    UnexpectedRowCount { expected: usize, actual: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type alias for sqrs operations
pub type Result<T> = std::result::Result<T, SqrsError>;
