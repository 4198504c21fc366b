//! Error types for the graph store adapters.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while querying a graph store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from the embedded SQLite graph.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store could not be reached or did not answer.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the statement.
    #[error("query failed ({code}): {message}")]
    Query { code: String, message: String },

    /// A statement parameter the engine cannot bind.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A row lacks a column the caller asked for.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A column holds a value of an unexpected type.
    #[error("column {column}: expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
        found: &'static str,
    },
}
