//! Folds flat, ordered row sets into the nested entity tree.
//!
//! Both folds are single linear passes that trust the store's ordering: they
//! detect group boundaries by comparing each row with the group that is
//! currently open, and never sort or look back further than that.

use crate::statements::{BOOK_ID_PARAM, Statements, columns};
use crate::{CatalogError, CatalogResult};
use bookvis_model::{
    Attribute, AttributeId, Author, AuthorId, Book, BookId, Chapter, ChapterId, Character,
    CharacterId, Genre, GenreId, Relation, RelationId,
};
use bookvis_store::{Dialect, Params, QueryEngine, Row, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs the catalog statements for one dialect and folds their rows.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    statements: Statements,
}

impl TreeBuilder {
    pub fn new(statements: Statements) -> Self {
        Self { statements }
    }

    /// A builder using the statements `dialect` understands.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(Statements::for_dialect(dialect))
    }

    pub fn statements(&self) -> &Statements {
        &self.statements
    }

    /// Every genre with its authors and their books.
    pub fn list_all(&self, engine: &dyn QueryEngine) -> CatalogResult<Vec<Genre>> {
        let rows = engine.execute(self.statements.list_all, &Params::new())?;
        debug!(rows = rows.len(), "loaded catalog rows");
        fold_catalog(&rows)
    }

    /// One book with its author, genre, chapters, characters and relations.
    pub fn get_book(&self, engine: &dyn QueryEngine, id: BookId) -> CatalogResult<Book> {
        let mut params = Params::new();
        params.insert(BOOK_ID_PARAM.to_string(), Value::Int(id.get()));

        let header_rows = engine.execute(self.statements.book_header, &params)?;
        let header = BookHeader::from_rows(id, &header_rows)?;

        let attribute_rows = engine.execute(self.statements.book_attributes, &params)?;
        let attributes = fold_attributes(&attribute_rows)?;

        let detail_rows = engine.execute(self.statements.book_detail, &params)?;
        debug!(
            book = %id,
            rows = detail_rows.len(),
            attributes = attribute_rows.len(),
            "loaded book detail rows"
        );

        let mut fold = BookDetailFold::with_attributes(attributes);
        for row in &detail_rows {
            fold.push_row(row)?;
        }
        Ok(fold.finish(header))
    }
}

// ── Catalog ─────────────────────────────────────────────────────

/// Folds `(genre, author, book)` rows, grouped by genre id then author id,
/// into genres.
///
/// Every row yields exactly one book. Rows that are not grouped produce
/// repeated genre or author entries rather than being merged.
pub fn fold_catalog(rows: &[Row]) -> CatalogResult<Vec<Genre>> {
    let mut fold = CatalogFold::default();
    for row in rows {
        fold.push_row(row)?;
    }
    Ok(fold.finish())
}

#[derive(Default)]
struct CatalogFold {
    genres: Vec<Genre>,
    genre: Option<Genre>,
    author: Option<Author>,
}

impl CatalogFold {
    fn push_row(&mut self, row: &Row) -> CatalogResult<()> {
        let genre_id = GenreId::new(row.i64(columns::GENRE_ID)?);
        if self.genre.as_ref().map(Genre::id) != Some(genre_id) {
            self.close_genre();
            self.genre = Some(Genre::new(genre_id, row.text(columns::GENRE_NAME)?));
        }

        let author_id = AuthorId::new(row.i64(columns::AUTHOR_ID)?);
        if self.author.as_ref().map(Author::id) != Some(author_id) {
            self.close_author();
            self.author = Some(Author::new(author_id, row.text(columns::AUTHOR_NAME)?));
        }

        let book = Book::new(
            BookId::new(row.i64(columns::BOOK_ID)?),
            row.text(columns::BOOK_TITLE)?,
        );
        if let Some(author) = self.author.as_mut() {
            author.push_book(book);
        }
        Ok(())
    }

    fn close_author(&mut self) {
        if let (Some(author), Some(genre)) = (self.author.take(), self.genre.as_mut()) {
            genre.push_author(author);
        }
    }

    fn close_genre(&mut self) {
        self.close_author();
        if let Some(genre) = self.genre.take() {
            self.genres.push(genre);
        }
    }

    fn finish(mut self) -> Vec<Genre> {
        self.close_genre();
        self.genres
    }
}

// ── Book detail ─────────────────────────────────────────────────

/// The scalar part of a book: its title plus author and genre references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookHeader {
    pub id: BookId,
    pub title: String,
    pub author: Author,
    pub genre: Genre,
}

impl BookHeader {
    /// Reads the first header row. An empty row set means the book does not
    /// exist.
    pub fn from_rows(id: BookId, rows: &[Row]) -> CatalogResult<Self> {
        let row = rows.first().ok_or(CatalogError::NotFound(id))?;
        Ok(Self {
            id,
            title: row.text(columns::BOOK_TITLE)?,
            author: Author::new(
                AuthorId::new(row.i64(columns::AUTHOR_ID)?),
                row.text(columns::AUTHOR_NAME)?,
            ),
            genre: Genre::new(
                GenreId::new(row.i64(columns::GENRE_ID)?),
                row.text(columns::GENRE_NAME)?,
            ),
        })
    }
}

/// Groups `(characterId, attribute)` rows by character, each character's
/// attributes ordered by id.
pub fn fold_attributes(rows: &[Row]) -> CatalogResult<HashMap<CharacterId, Vec<Attribute>>> {
    let mut attributes: HashMap<CharacterId, Vec<Attribute>> = HashMap::new();
    for row in rows {
        let character = CharacterId::new(row.i64(columns::CHARACTER_ID)?);
        let id = AttributeId::new(row.i64(columns::ATTRIBUTE_ID)?);
        let owned = attributes.entry(character).or_default();
        if owned.iter().any(|a| a.id() == id) {
            continue;
        }
        owned.push(Attribute::new(
            id,
            row.text(columns::ATTRIBUTE_KEY)?,
            row.opt_text(columns::ATTRIBUTE_VALUE)?.unwrap_or_default(),
        ));
    }
    for owned in attributes.values_mut() {
        owned.sort_by_key(Attribute::id);
    }
    Ok(attributes)
}

/// Single pass over book detail rows, ordered by chapter.
///
/// Characters are deduplicated by id across the whole book: each id maps to
/// one shared instance, referenced from the character list, from every
/// chapter it appears in and from both ends of its relations.
#[derive(Debug, Default)]
pub struct BookDetailFold {
    chapters: Vec<Chapter>,
    characters: Vec<Arc<Character>>,
    by_id: HashMap<CharacterId, Arc<Character>>,
    relations: Vec<Relation>,
    attributes: HashMap<CharacterId, Vec<Attribute>>,
    skipped_relations: usize,
}

impl BookDetailFold {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fold that attaches `attributes` to characters as they are first seen.
    pub fn with_attributes(attributes: HashMap<CharacterId, Vec<Attribute>>) -> Self {
        Self {
            attributes,
            ..Self::default()
        }
    }

    pub fn push_row(&mut self, row: &Row) -> CatalogResult<()> {
        let index = row.i64(columns::CHAPTER_INDEX)?;
        if self.chapters.last().map(Chapter::index) != Some(index) {
            self.chapters.push(Chapter::new(
                ChapterId::new(row.i64(columns::CHAPTER_ID)?),
                index,
                row.text(columns::CHAPTER_TITLE)?,
            ));
        }

        let from = self.register(
            CharacterId::new(row.i64(columns::CHARACTER_A_ID)?),
            row,
            columns::CHARACTER_A_NAME,
        )?;
        if let Some(chapter) = self.chapters.last_mut() {
            chapter.add_character(Arc::clone(&from));
        }

        let to = match row.opt_i64(columns::CHARACTER_B_ID)? {
            Some(id) => Some(self.register(CharacterId::new(id), row, columns::CHARACTER_B_NAME)?),
            None => None,
        };

        let Some(relation_id) = row.opt_i64(columns::RELATION_ID)?.map(RelationId::new) else {
            return Ok(());
        };
        let Some(to) = to else {
            self.skipped_relations += 1;
            warn!(
                relation = %relation_id,
                from = %from.id(),
                "skipping relation without a target character"
            );
            return Ok(());
        };
        // A character listed in several chapters repeats its relations.
        if self.relations.iter().any(|r| r.id() == relation_id) {
            return Ok(());
        }
        let kind = row.opt_text(columns::RELATION_TYPE)?.unwrap_or_default();
        self.relations.push(Relation::new(relation_id, kind, from, to));
        Ok(())
    }

    /// Returns the instance already registered for `id`, or creates it from
    /// the row's `name_column`.
    fn register(
        &mut self,
        id: CharacterId,
        row: &Row,
        name_column: &str,
    ) -> CatalogResult<Arc<Character>> {
        if let Some(existing) = self.by_id.get(&id) {
            return Ok(Arc::clone(existing));
        }
        let attributes = self.attributes.remove(&id).unwrap_or_default();
        let character = Arc::new(Character::new(id, row.text(name_column)?).with_attributes(attributes));
        self.by_id.insert(id, Arc::clone(&character));
        self.characters.push(Arc::clone(&character));
        Ok(character)
    }

    /// Relation rows dropped because their target character was missing.
    pub fn skipped_relations(&self) -> usize {
        self.skipped_relations
    }

    /// Assembles the book from the header and the folded collections.
    pub fn finish(self, header: BookHeader) -> Book {
        if self.skipped_relations > 0 {
            debug!(
                book = %header.id,
                skipped = self.skipped_relations,
                "book assembled with inconsistent relation rows"
            );
        }
        Book::new(header.id, header.title)
            .with_author(header.author)
            .with_genre(header.genre)
            .with_chapters(self.chapters)
            .with_characters(self.characters)
            .with_relations(self.relations)
    }
}
