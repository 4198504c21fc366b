//! Graph statements, one set per engine dialect.
//!
//! Both dialects read the same graph:
//!
//! ```text
//! (book)-[:by_author]->(author)-[:of_genre]->(genre)
//! (chapter)-[:in_book]->(book)
//! (character)-[:in_chapter]->(chapter)
//! (character)-[:relation {type}]->(character)
//! (character)-[:has_attribute]->(attribute {key, value})
//! ```
//!
//! and return the same column names, listed in [`columns`].

use bookvis_store::Dialect;

/// Node labels and edge types of the catalog graph.
pub mod schema {
    pub const GENRE: &str = "genre";
    pub const AUTHOR: &str = "author";
    pub const BOOK: &str = "book";
    pub const CHAPTER: &str = "chapter";
    pub const CHARACTER: &str = "character";
    pub const ATTRIBUTE: &str = "attribute";

    pub const OF_GENRE: &str = "of_genre";
    pub const BY_AUTHOR: &str = "by_author";
    pub const IN_BOOK: &str = "in_book";
    pub const IN_CHAPTER: &str = "in_chapter";
    pub const RELATION: &str = "relation";
    pub const HAS_ATTRIBUTE: &str = "has_attribute";
}

/// Result column names shared by every dialect.
pub mod columns {
    pub const GENRE_ID: &str = "genreId";
    pub const GENRE_NAME: &str = "genreName";
    pub const AUTHOR_ID: &str = "authorId";
    pub const AUTHOR_NAME: &str = "authorName";
    pub const BOOK_ID: &str = "bookId";
    pub const BOOK_TITLE: &str = "bookTitle";

    pub const CHAPTER_ID: &str = "chapterId";
    pub const CHAPTER_INDEX: &str = "chapterIndex";
    pub const CHAPTER_TITLE: &str = "chapterTitle";
    pub const CHARACTER_A_ID: &str = "characterAId";
    pub const CHARACTER_A_NAME: &str = "characterAName";
    pub const CHARACTER_B_ID: &str = "characterBId";
    pub const CHARACTER_B_NAME: &str = "characterBName";
    pub const RELATION_ID: &str = "relationId";
    pub const RELATION_TYPE: &str = "relationType";

    pub const CHARACTER_ID: &str = "characterId";
    pub const ATTRIBUTE_ID: &str = "attributeId";
    pub const ATTRIBUTE_KEY: &str = "attributeKey";
    pub const ATTRIBUTE_VALUE: &str = "attributeValue";
}

/// Name of the book id parameter used by the per-book statements.
pub const BOOK_ID_PARAM: &str = "bookId";

/// The statements the tree builder runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statements {
    /// Every book with its author and genre, ordered by genre id then author id.
    pub list_all: &'static str,
    /// Title, author and genre of one book. Zero rows when the book is unknown.
    pub book_header: &'static str,
    /// One row per (character, chapter) appearance, left-joined with the
    /// character's outgoing relations, ordered by chapter id.
    pub book_detail: &'static str,
    /// Distinct attributes of the characters appearing in one book and of the
    /// targets of their relations.
    pub book_attributes: &'static str,
}

impl Statements {
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Cypher => Self::cypher(),
            Dialect::Sql => Self::sql(),
        }
    }

    pub const fn cypher() -> Self {
        Self {
            list_all: CYPHER_LIST_ALL,
            book_header: CYPHER_BOOK_HEADER,
            book_detail: CYPHER_BOOK_DETAIL,
            book_attributes: CYPHER_BOOK_ATTRIBUTES,
        }
    }

    pub const fn sql() -> Self {
        Self {
            list_all: SQL_LIST_ALL,
            book_header: SQL_BOOK_HEADER,
            book_detail: SQL_BOOK_DETAIL,
            book_attributes: SQL_BOOK_ATTRIBUTES,
        }
    }
}

// ── Cypher ──────────────────────────────────────────────────────

const CYPHER_LIST_ALL: &str = "\
MATCH (b:book)-[:by_author]->(a:author)-[:of_genre]->(g:genre) \
RETURN ID(g) AS genreId, g.name AS genreName, \
       ID(a) AS authorId, a.name AS authorName, \
       ID(b) AS bookId, b.title AS bookTitle \
ORDER BY ID(g), ID(a), ID(b)";

const CYPHER_BOOK_HEADER: &str = "\
MATCH (b:book)-[:by_author]->(a:author)-[:of_genre]->(g:genre) \
WHERE ID(b) = $bookId \
RETURN b.title AS bookTitle, \
       ID(g) AS genreId, g.name AS genreName, \
       ID(a) AS authorId, a.name AS authorName";

const CYPHER_BOOK_DETAIL: &str = "\
MATCH (cha:character)-[:in_chapter]->(c:chapter)-[:in_book]->(b:book) \
WHERE ID(b) = $bookId \
OPTIONAL MATCH (cha)-[r:relation]->(chb:character) \
RETURN ID(c) AS chapterId, c.index AS chapterIndex, c.title AS chapterTitle, \
       ID(cha) AS characterAId, cha.name AS characterAName, \
       ID(chb) AS characterBId, chb.name AS characterBName, \
       ID(r) AS relationId, r.type AS relationType \
ORDER BY ID(c), ID(cha), ID(r)";

const CYPHER_BOOK_ATTRIBUTES: &str = "\
MATCH (ch:character)-[:in_chapter]->(:chapter)-[:in_book]->(b:book) \
WHERE ID(b) = $bookId \
MATCH (ch)-[:has_attribute]->(at:attribute) \
RETURN ID(ch) AS characterId, ID(at) AS attributeId, \
       at.key AS attributeKey, at.value AS attributeValue \
UNION \
MATCH (ch:character)-[:in_chapter]->(:chapter)-[:in_book]->(b:book) \
WHERE ID(b) = $bookId \
MATCH (ch)-[:relation]->(t:character)-[:has_attribute]->(at:attribute) \
RETURN ID(t) AS characterId, ID(at) AS attributeId, \
       at.key AS attributeKey, at.value AS attributeValue";

// ── SQL over the embedded nodes/edges graph ─────────────────────

const SQL_LIST_ALL: &str = "\
SELECT g.id AS genreId, json_extract(g.props, '$.name') AS genreName, \
       a.id AS authorId, json_extract(a.props, '$.name') AS authorName, \
       b.id AS bookId, json_extract(b.props, '$.title') AS bookTitle \
FROM nodes b \
JOIN edges ba ON ba.src = b.id AND ba.type = 'by_author' \
JOIN nodes a ON a.id = ba.dst AND a.label = 'author' \
JOIN edges ag ON ag.src = a.id AND ag.type = 'of_genre' \
JOIN nodes g ON g.id = ag.dst AND g.label = 'genre' \
WHERE b.label = 'book' \
ORDER BY g.id, a.id, b.id";

const SQL_BOOK_HEADER: &str = "\
SELECT json_extract(b.props, '$.title') AS bookTitle, \
       g.id AS genreId, json_extract(g.props, '$.name') AS genreName, \
       a.id AS authorId, json_extract(a.props, '$.name') AS authorName \
FROM nodes b \
JOIN edges ba ON ba.src = b.id AND ba.type = 'by_author' \
JOIN nodes a ON a.id = ba.dst AND a.label = 'author' \
JOIN edges ag ON ag.src = a.id AND ag.type = 'of_genre' \
JOIN nodes g ON g.id = ag.dst AND g.label = 'genre' \
WHERE b.label = 'book' AND b.id = :bookId";

const SQL_BOOK_DETAIL: &str = "\
SELECT c.id AS chapterId, json_extract(c.props, '$.index') AS chapterIndex, \
       json_extract(c.props, '$.title') AS chapterTitle, \
       cha.id AS characterAId, json_extract(cha.props, '$.name') AS characterAName, \
       chb.id AS characterBId, json_extract(chb.props, '$.name') AS characterBName, \
       r.id AS relationId, json_extract(r.props, '$.type') AS relationType \
FROM nodes b \
JOIN edges cb ON cb.dst = b.id AND cb.type = 'in_book' \
JOIN nodes c ON c.id = cb.src AND c.label = 'chapter' \
JOIN edges ic ON ic.dst = c.id AND ic.type = 'in_chapter' \
JOIN nodes cha ON cha.id = ic.src AND cha.label = 'character' \
LEFT JOIN edges r ON r.src = cha.id AND r.type = 'relation' \
LEFT JOIN nodes chb ON chb.id = r.dst AND chb.label = 'character' \
WHERE b.label = 'book' AND b.id = :bookId \
ORDER BY c.id, cha.id, r.id";

const SQL_BOOK_ATTRIBUTES: &str = "\
SELECT ch.id AS characterId, at.id AS attributeId, \
       json_extract(at.props, '$.key') AS attributeKey, \
       json_extract(at.props, '$.value') AS attributeValue \
FROM nodes b \
JOIN edges cb ON cb.dst = b.id AND cb.type = 'in_book' \
JOIN nodes c ON c.id = cb.src AND c.label = 'chapter' \
JOIN edges ic ON ic.dst = c.id AND ic.type = 'in_chapter' \
JOIN nodes ch ON ch.id = ic.src AND ch.label = 'character' \
JOIN edges ha ON ha.src = ch.id AND ha.type = 'has_attribute' \
JOIN nodes at ON at.id = ha.dst AND at.label = 'attribute' \
WHERE b.label = 'book' AND b.id = :bookId \
UNION \
SELECT t.id AS characterId, at.id AS attributeId, \
       json_extract(at.props, '$.key') AS attributeKey, \
       json_extract(at.props, '$.value') AS attributeValue \
FROM nodes b \
JOIN edges cb ON cb.dst = b.id AND cb.type = 'in_book' \
JOIN nodes c ON c.id = cb.src AND c.label = 'chapter' \
JOIN edges ic ON ic.dst = c.id AND ic.type = 'in_chapter' \
JOIN nodes ch ON ch.id = ic.src AND ch.label = 'character' \
JOIN edges r ON r.src = ch.id AND r.type = 'relation' \
JOIN nodes t ON t.id = r.dst AND t.label = 'character' \
JOIN edges ha ON ha.src = t.id AND ha.type = 'has_attribute' \
JOIN nodes at ON at.id = ha.dst AND at.label = 'attribute' \
WHERE b.label = 'book' AND b.id = :bookId \
ORDER BY characterId, attributeId";
