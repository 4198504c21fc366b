//! The coarse catalog levels: genres and their authors.

use crate::document::put_children;
use crate::{AuthorId, Book, DetailLevel, Document, GenreId};
use serde_json::{Map, Value, json};

/// A genre and the authors writing in it, in first-seen order.
#[derive(Debug, Clone)]
pub struct Genre {
    id: GenreId,
    name: String,
    authors: Vec<Author>,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            authors: Vec::new(),
        }
    }

    pub fn id(&self) -> GenreId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Appends an author; used while the tree is being built.
    pub fn push_author(&mut self, author: Author) {
        self.authors.push(author);
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.authors == other.authors
    }
}

impl Eq for Genre {}

impl Document for Genre {
    const KIND: DetailLevel = DetailLevel::Genre;

    fn serialize(&self, depth: DetailLevel) -> Value {
        let mut object = Map::new();
        object.insert("id".into(), json!(self.id));
        object.insert("name".into(), json!(self.name));
        put_children(&mut object, "authors", &self.authors, depth);
        Value::Object(object)
    }
}

/// An author and their books, in first-seen order.
#[derive(Debug, Clone)]
pub struct Author {
    id: AuthorId,
    name: String,
    books: Vec<Book>,
}

impl Author {
    pub fn new(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            books: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Appends a book; used while the tree is being built.
    pub fn push_book(&mut self, book: Book) {
        self.books.push(book);
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.books == other.books
    }
}

impl Eq for Author {}

impl Document for Author {
    const KIND: DetailLevel = DetailLevel::Author;

    fn serialize(&self, depth: DetailLevel) -> Value {
        let mut object = Map::new();
        object.insert("id".into(), json!(self.id));
        object.insert("name".into(), json!(self.name));
        put_children(&mut object, "books", &self.books, depth);
        Value::Object(object)
    }
}
