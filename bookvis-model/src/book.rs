//! Books and their chapters.

use crate::document::put_children;
use crate::{Author, BookId, ChapterId, Character, DetailLevel, Document, Genre, Relation};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Depth used for references that only identify an entity, such as a book's
/// author or a chapter's characters.
const REFERENCE_DEPTH: DetailLevel = DetailLevel::Genre;

/// A book with whatever detail the producing query loaded.
///
/// In the coarse catalog a book only carries its id and title; the detail view
/// adds its author and genre references plus chapters, characters and
/// relations.
#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    title: String,
    author: Option<Author>,
    genre: Option<Genre>,
    chapters: Vec<Chapter>,
    characters: Vec<Arc<Character>>,
    relations: Vec<Relation>,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: None,
            genre: None,
            chapters: Vec::new(),
            characters: Vec::new(),
            relations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }

    #[must_use]
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = chapters;
        self
    }

    #[must_use]
    pub fn with_characters(mut self, characters: Vec<Arc<Character>>) -> Self {
        self.characters = characters;
        self
    }

    #[must_use]
    pub fn with_relations(mut self, relations: Vec<Relation>) -> Self {
        self.relations = relations;
        self
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    pub fn genre(&self) -> Option<&Genre> {
        self.genre.as_ref()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn characters(&self) -> &[Arc<Character>] {
        &self.characters
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.author == other.author
            && self.genre == other.genre
            && self.chapters == other.chapters
            && self.characters == other.characters
            && self.relations == other.relations
    }
}

impl Eq for Book {}

impl Document for Book {
    const KIND: DetailLevel = DetailLevel::Book;

    fn serialize(&self, depth: DetailLevel) -> Value {
        let mut object = Map::new();
        object.insert("id".into(), json!(self.id));
        object.insert("title".into(), json!(self.title));
        if let Some(author) = &self.author {
            object.insert("author".into(), author.serialize(REFERENCE_DEPTH));
        }
        if let Some(genre) = &self.genre {
            object.insert("genre".into(), genre.serialize(REFERENCE_DEPTH));
        }
        put_children(&mut object, "chapters", &self.chapters, depth);
        put_children(&mut object, "characters", &self.characters, depth);
        put_children(&mut object, "relations", &self.relations, depth);
        Value::Object(object)
    }
}

/// A chapter of a book and the characters appearing in it.
#[derive(Debug, Clone)]
pub struct Chapter {
    id: ChapterId,
    index: i64,
    title: String,
    characters: Vec<Arc<Character>>,
}

impl Chapter {
    pub fn new(id: ChapterId, index: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            index,
            title: title.into(),
            characters: Vec::new(),
        }
    }

    pub fn id(&self) -> ChapterId {
        self.id
    }

    /// Position within the book. Increases monotonically but may have gaps.
    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn characters(&self) -> &[Arc<Character>] {
        &self.characters
    }

    /// Records that `character` appears in this chapter. Returns false if it
    /// was already recorded.
    pub fn add_character(&mut self, character: Arc<Character>) -> bool {
        if self.characters.iter().any(|c| c.id() == character.id()) {
            return false;
        }
        self.characters.push(character);
        true
    }
}

impl PartialEq for Chapter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.index == other.index
            && self.title == other.title
            && self.characters == other.characters
    }
}

impl Eq for Chapter {}

impl Document for Chapter {
    const KIND: DetailLevel = DetailLevel::Chapter;

    fn serialize(&self, depth: DetailLevel) -> Value {
        let mut object = Map::new();
        object.insert("id".into(), json!(self.id));
        object.insert("index".into(), json!(self.index));
        object.insert("title".into(), json!(self.title));
        if depth.includes(Character::KIND) {
            let members = self
                .characters
                .iter()
                .map(|c| c.serialize(REFERENCE_DEPTH))
                .collect();
            object.insert("characters".into(), Value::Array(members));
        }
        Value::Object(object)
    }
}
