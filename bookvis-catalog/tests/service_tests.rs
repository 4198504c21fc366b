mod common;

use bookvis_catalog::{BookService, CatalogError, TreeBuilder};
use bookvis_model::{BookId, DetailLevel};
use bookvis_store::{Dialect, QueryEngine};
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn scripted_service() -> (Arc<ScriptedEngine>, BookService) {
    let s = statements();
    let engine = Arc::new(
        ScriptedEngine::new()
            .respond(
                s.list_all,
                vec![
                    catalog_row((1, "Fiction"), (10, "A"), (100, "Title1")),
                    catalog_row((1, "Fiction"), (10, "A"), (101, "Title2")),
                    catalog_row((2, "Drama"), (20, "B"), (200, "Title3")),
                ],
            )
            .respond(
                s.book_header,
                vec![header_row("Title1", (1, "Fiction"), (10, "A"))],
            )
            .respond(
                s.book_detail,
                vec![detail_row(
                    (5, 1, "Opening"),
                    (6, "Hero"),
                    Some((8, "rival", Some((7, "Villain")))),
                )],
            ),
    );
    let shared: Arc<dyn QueryEngine> = engine.clone();
    (engine, BookService::new(shared, TreeBuilder::new(s)))
}

#[test]
fn default_depths() {
    assert_eq!(BookService::LIST_DEPTH, DetailLevel::Book);
    assert_eq!(BookService::DETAIL_DEPTH, DetailLevel::Relation);
}

#[test]
fn with_engine_picks_statements_for_dialect() {
    let engine: Arc<dyn QueryEngine> = Arc::new(ScriptedEngine::new());
    let service = BookService::with_engine(engine);
    assert_eq!(service.builder().statements(), &bookvis_catalog::Statements::for_dialect(Dialect::Cypher));
}

#[test]
fn list_all_is_idempotent() {
    let (_, service) = scripted_service();
    let first = service.list_all().unwrap();
    let second = service.list_all().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn list_document_defaults_to_book_depth() {
    let (_, service) = scripted_service();
    let document = service.list_all_document(None).unwrap();
    assert_eq!(
        document[1],
        json!({
            "id": 2,
            "name": "Drama",
            "authors": [{"id": 20, "name": "B", "books": [{"id": 200, "title": "Title3"}]}]
        })
    );

    let shallow = service.list_all_document(Some(DetailLevel::Genre)).unwrap();
    assert_eq!(shallow, json!([{"id": 1, "name": "Fiction"}, {"id": 2, "name": "Drama"}]));
}

#[test]
fn book_document_defaults_to_relation_depth() {
    let (engine, service) = scripted_service();
    let document = service.book_document(BookId::new(100), None).unwrap();

    assert_eq!(document["relations"][0]["type"], json!("rival"));
    assert_eq!(document["relations"][0]["to"], json!({"id": 7, "name": "Villain"}));
    assert_eq!(document["characters"].as_array().map(Vec::len), Some(2));
    assert!(engine.calls().iter().all(|(_, params)| {
        params.is_empty() || params["bookId"] == bookvis_store::Value::Int(100)
    }));

    let chapters_only = service
        .book_document(BookId::new(100), Some(DetailLevel::Chapter))
        .unwrap();
    assert!(chapters_only.get("characters").is_none());
    assert!(chapters_only.get("relations").is_none());
    assert_eq!(chapters_only["chapters"], json!([{"id": 5, "index": 1, "title": "Opening"}]));
}

#[test]
fn missing_book_is_not_found() {
    let engine: Arc<dyn QueryEngine> = Arc::new(ScriptedEngine::new());
    let service = BookService::with_engine(engine);
    let err = service.get_book(BookId::new(999999)).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert!(service.book_document(BookId::new(999999), None).is_err());
}
