//! Error types for the catalog layer.

use bookvis_model::BookId;
use bookvis_store::StoreError;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while projecting the graph into a tree.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No book has the requested id.
    #[error("book with id {0} could not be found")]
    NotFound(BookId),

    /// The store failed or returned rows the builder cannot read.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// True for errors caused by the caller's input rather than the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}
