#![allow(dead_code)]

use bookvis_catalog::Statements;
use bookvis_catalog::statements::columns;
use bookvis_store::{Dialect, Params, QueryEngine, Row, StoreError, StoreResult, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// An engine that answers each known statement with canned rows and records
/// the parameters it was called with.
#[derive(Default)]
pub struct ScriptedEngine {
    responses: HashMap<&'static str, Vec<Row>>,
    failing: Option<&'static str>,
    calls: Mutex<Vec<(String, Params)>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, statement: &'static str, rows: Vec<Row>) -> Self {
        self.responses.insert(statement, rows);
        self
    }

    pub fn fail_on(mut self, statement: &'static str) -> Self {
        self.failing = Some(statement);
        self
    }

    pub fn calls(&self) -> Vec<(String, Params)> {
        self.calls.lock().unwrap().clone()
    }
}

impl QueryEngine for ScriptedEngine {
    fn dialect(&self) -> Dialect {
        Dialect::Cypher
    }

    fn execute(&self, statement: &str, params: &Params) -> StoreResult<Vec<Row>> {
        self.calls
            .lock()
            .unwrap()
            .push((statement.to_string(), params.clone()));
        if self.failing == Some(statement) {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(self.responses.get(statement).cloned().unwrap_or_default())
    }
}

pub fn statements() -> Statements {
    Statements::cypher()
}

pub fn catalog_row(genre: (i64, &str), author: (i64, &str), book: (i64, &str)) -> Row {
    Row::new()
        .with(columns::GENRE_ID, genre.0)
        .with(columns::GENRE_NAME, genre.1)
        .with(columns::AUTHOR_ID, author.0)
        .with(columns::AUTHOR_NAME, author.1)
        .with(columns::BOOK_ID, book.0)
        .with(columns::BOOK_TITLE, book.1)
}

pub fn header_row(title: &str, genre: (i64, &str), author: (i64, &str)) -> Row {
    Row::new()
        .with(columns::BOOK_TITLE, title)
        .with(columns::GENRE_ID, genre.0)
        .with(columns::GENRE_NAME, genre.1)
        .with(columns::AUTHOR_ID, author.0)
        .with(columns::AUTHOR_NAME, author.1)
}

/// One book detail row. `relation` is `(relation id, type, target)`, where the
/// target may be missing to model an inconsistent store.
pub fn detail_row(
    chapter: (i64, i64, &str),
    character: (i64, &str),
    relation: Option<(i64, &str, Option<(i64, &str)>)>,
) -> Row {
    let (relation_id, relation_type, target) = match relation {
        Some((id, kind, target)) => (Value::Int(id), Value::from(kind), target),
        None => (Value::Null, Value::Null, None),
    };
    Row::new()
        .with(columns::CHAPTER_ID, chapter.0)
        .with(columns::CHAPTER_INDEX, chapter.1)
        .with(columns::CHAPTER_TITLE, chapter.2)
        .with(columns::CHARACTER_A_ID, character.0)
        .with(columns::CHARACTER_A_NAME, character.1)
        .with(columns::CHARACTER_B_ID, target.map(|t| t.0))
        .with(columns::CHARACTER_B_NAME, target.map(|t| t.1))
        .with(columns::RELATION_ID, relation_id)
        .with(columns::RELATION_TYPE, relation_type)
}

pub fn attribute_row(character: i64, attribute: i64, key: &str, value: &str) -> Row {
    Row::new()
        .with(columns::CHARACTER_ID, character)
        .with(columns::ATTRIBUTE_ID, attribute)
        .with(columns::ATTRIBUTE_KEY, key)
        .with(columns::ATTRIBUTE_VALUE, value)
}
