//! Demo catalog for local runs.

use crate::statements::schema;
use bookvis_store::{SqliteGraph, StoreError, StoreResult};
use serde_json::json;
use tracing::info;

const GENRES: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Children Books",
        &[
            ("A. A. Milne", &["Winnie-the-Pooh", "The House at Pooh Corner"]),
            ("Dr. Seuss", &["How the Grinch Stole Christmas", "The Cat in the Hat"]),
            (
                "Mark Twain",
                &["The Adventures of Huckleberry Finn", "The Adventures of Tom Sawyer"],
            ),
        ],
    ),
    (
        "Fiction",
        &[
            ("William Shakespeare", &["Romeo and Juliet", "Hamlet", "Macbeth"]),
            ("Agatha Christie", &["Death on the Nile", "The A.B.C. Murders"]),
        ],
    ),
];

const POOH_CHAPTERS: &[&str] = &[
    "Chapter One IN WHICH We Are Introduced to Winnie-the-Pooh and Some Bees, and the Stories Begin",
    "Chapter Two IN WHICH Pooh Goes Visiting and Gets Into a Tight Place",
    "Chapter Three IN WHICH Pooh and Piglet Go Hunting and Nearly Catch a Woozle",
];

/// Title of the seeded book that carries chapters and characters.
pub const DETAILED_BOOK: &str = "Winnie-the-Pooh";

/// Replaces the contents of `graph` with the demo catalog: two genres, five
/// authors and their books, and a detailed "Winnie-the-Pooh" with chapters,
/// characters, relations and attributes.
///
/// Returns the id of the detailed book.
pub fn seed_demo_catalog(graph: &SqliteGraph) -> StoreResult<i64> {
    graph.clear()?;

    let mut detailed = None;
    for (genre, authors) in GENRES {
        let genre_id = graph.create_node(schema::GENRE, json!({ "name": genre }))?;
        for (author, books) in *authors {
            let author_id = graph.create_node(schema::AUTHOR, json!({ "name": author }))?;
            graph.create_edge(schema::OF_GENRE, author_id, genre_id, json!({}))?;
            for title in *books {
                let book_id = graph.create_node(schema::BOOK, json!({ "title": title }))?;
                graph.create_edge(schema::BY_AUTHOR, book_id, author_id, json!({}))?;
                if *title == DETAILED_BOOK {
                    detailed = Some(book_id);
                }
            }
        }
    }
    let book_id = detailed
        .ok_or_else(|| StoreError::Unavailable(format!("demo catalog is missing {DETAILED_BOOK}")))?;

    let mut chapters = Vec::with_capacity(POOH_CHAPTERS.len());
    for (index, title) in (1_i64..).zip(POOH_CHAPTERS) {
        let chapter = graph.create_node(schema::CHAPTER, json!({ "index": index, "title": title }))?;
        graph.create_edge(schema::IN_BOOK, chapter, book_id, json!({}))?;
        chapters.push(chapter);
    }

    let character = |name: &str, appears_in: &[usize]| -> StoreResult<i64> {
        let id = graph.create_node(schema::CHARACTER, json!({ "name": name }))?;
        for chapter in appears_in {
            graph.create_edge(schema::IN_CHAPTER, id, chapters[*chapter], json!({}))?;
        }
        Ok(id)
    };
    let robin = character("Christopher Robin", &[0, 1, 2])?;
    let pooh = character("Winnie-the-Pooh", &[0, 1, 2])?;
    let eeyore = character("Ior", &[0])?;
    let rabbit = character("Rabbit", &[1])?;
    let piglet = character("Piglet", &[2])?;

    for (from, to) in [(robin, pooh), (pooh, piglet), (pooh, rabbit)] {
        graph.create_edge(schema::RELATION, from, to, json!({ "type": "friend" }))?;
    }

    let attribute = |owner: i64, key: &str, value: &str| -> StoreResult<()> {
        let id = graph.create_node(schema::ATTRIBUTE, json!({ "key": key, "value": value }))?;
        graph.create_edge(schema::HAS_ATTRIBUTE, owner, id, json!({}))?;
        Ok(())
    };
    attribute(robin, "species", "human")?;
    attribute(pooh, "species", "bear")?;
    attribute(pooh, "likes", "honey")?;
    attribute(eeyore, "species", "donkey")?;
    attribute(piglet, "species", "pig")?;
    attribute(rabbit, "species", "rabbit")?;

    info!(nodes = graph.node_count()?, book = book_id, "seeded demo catalog");
    Ok(book_id)
}
