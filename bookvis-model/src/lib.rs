//! Entity model for the bookvis catalog.
//!
//! Defines the in-memory tree the catalog is projected into:
//! - [`Genre`] → [`Author`] → [`Book`] for the browsing view
//! - [`Book`] → [`Chapter`], [`Character`], [`Relation`], [`Attribute`] for the
//!   detail view
//!
//! Every entity renders itself through [`Document::serialize`] for a requested
//! [`DetailLevel`], expanding only the child collections that level allows.
//! Entities are built fresh per request and never mutated once handed out.

mod book;
mod catalog;
mod character;
mod detail;
mod document;
mod ids;

pub use book::{Book, Chapter};
pub use catalog::{Author, Genre};
pub use character::{Attribute, Character, Relation};
pub use detail::DetailLevel;
pub use document::{Document, serialize_all, to_json_string};
pub use ids::{AttributeId, AuthorId, BookId, ChapterId, CharacterId, GenreId, RelationId};

/// Errors that can occur in model operations.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unknown detail level: {0}")]
    UnknownDetailLevel(String),
}
