//! Service facade over the tree builder.

use crate::{CatalogResult, TreeBuilder};
use bookvis_model::{Book, BookId, DetailLevel, Document, Genre, serialize_all};
use bookvis_store::QueryEngine;
use serde_json::Value;
use std::sync::Arc;

/// Serves the catalog from one engine.
///
/// Holds no state besides its collaborators, so a single instance can be
/// shared across request handlers.
#[derive(Clone)]
pub struct BookService {
    engine: Arc<dyn QueryEngine>,
    builder: TreeBuilder,
}

impl BookService {
    /// Depth the catalog listing is rendered at unless the caller asks otherwise.
    pub const LIST_DEPTH: DetailLevel = DetailLevel::Book;
    /// Depth a single book is rendered at unless the caller asks otherwise.
    pub const DETAIL_DEPTH: DetailLevel = DetailLevel::Relation;

    pub fn new(engine: Arc<dyn QueryEngine>, builder: TreeBuilder) -> Self {
        Self { engine, builder }
    }

    /// A service whose builder uses the statements the engine understands.
    pub fn with_engine(engine: Arc<dyn QueryEngine>) -> Self {
        let builder = TreeBuilder::for_dialect(engine.dialect());
        Self::new(engine, builder)
    }

    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    pub fn list_all(&self) -> CatalogResult<Vec<Genre>> {
        self.builder.list_all(self.engine.as_ref())
    }

    pub fn get_book(&self, id: BookId) -> CatalogResult<Book> {
        self.builder.get_book(self.engine.as_ref(), id)
    }

    /// The catalog as a JSON array, at `depth` or [`Self::LIST_DEPTH`].
    pub fn list_all_document(&self, depth: Option<DetailLevel>) -> CatalogResult<Value> {
        let genres = self.list_all()?;
        Ok(serialize_all(&genres, depth.unwrap_or(Self::LIST_DEPTH)))
    }

    /// One book as a JSON object, at `depth` or [`Self::DETAIL_DEPTH`].
    pub fn book_document(&self, id: BookId, depth: Option<DetailLevel>) -> CatalogResult<Value> {
        let book = self.get_book(id)?;
        Ok(book.serialize(depth.unwrap_or(Self::DETAIL_DEPTH)))
    }
}

impl std::fmt::Debug for BookService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookService")
            .field("dialect", &self.engine.dialect())
            .finish_non_exhaustive()
    }
}
