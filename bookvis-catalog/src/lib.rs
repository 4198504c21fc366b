//! Graph-to-tree projection for the bookvis catalog.
//!
//! Runs a handful of fixed statements against a [`QueryEngine`] and folds the
//! flat, ordered rows they return into the entity tree of `bookvis-model`:
//!
//! - [`TreeBuilder::list_all`]: genres → authors → books
//! - [`TreeBuilder::get_book`]: one book with chapters, characters, relations
//!   and character attributes
//!
//! [`BookService`] wraps a builder and an engine behind the two operations the
//! HTTP layer exposes.
//!
//! [`QueryEngine`]: bookvis_store::QueryEngine

mod error;
pub mod seed;
mod service;
pub mod statements;
mod tree;

pub use error::{CatalogError, CatalogResult};
pub use service::BookService;
pub use statements::Statements;
pub use tree::{BookDetailFold, BookHeader, TreeBuilder, fold_attributes, fold_catalog};
