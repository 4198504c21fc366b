use bookvis_model::{
    Attribute, AttributeId, Author, AuthorId, Book, BookId, Chapter, ChapterId, Character,
    CharacterId, DetailLevel, Document, Genre, GenreId, Relation, RelationId, serialize_all,
    to_json_string,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn pooh() -> Arc<Character> {
    Arc::new(
        Character::new(CharacterId::new(30), "Winnie-the-Pooh").with_attributes(vec![
            Attribute::new(AttributeId::new(40), "species", "bear"),
        ]),
    )
}

fn robin() -> Arc<Character> {
    Arc::new(Character::new(CharacterId::new(31), "Christopher Robin"))
}

fn detailed_book() -> Book {
    let pooh = pooh();
    let robin = robin();
    let mut chapter = Chapter::new(ChapterId::new(20), 1, "In Which We Are Introduced");
    chapter.add_character(robin.clone());
    chapter.add_character(pooh.clone());

    Book::new(BookId::new(7), "Winnie-the-Pooh")
        .with_author(Author::new(AuthorId::new(3), "A. A. Milne"))
        .with_genre(Genre::new(GenreId::new(1), "Children Books"))
        .with_chapters(vec![chapter])
        .with_characters(vec![robin.clone(), pooh.clone()])
        .with_relations(vec![Relation::new(RelationId::new(50), "friend", robin, pooh)])
}

fn catalog() -> Genre {
    let mut author = Author::new(AuthorId::new(3), "A. A. Milne");
    author.push_book(Book::new(BookId::new(7), "Winnie-the-Pooh"));
    author.push_book(Book::new(BookId::new(8), "The House at Pooh Corner"));
    let mut genre = Genre::new(GenreId::new(1), "Children Books");
    genre.push_author(author);
    genre
}

// ── Shape ────────────────────────────────────────────────────────

#[test]
fn genre_at_book_depth_nests_authors_and_books() {
    assert_eq!(
        catalog().serialize(DetailLevel::Book),
        json!({
            "id": 1,
            "name": "Children Books",
            "authors": [{
                "id": 3,
                "name": "A. A. Milne",
                "books": [
                    {"id": 7, "title": "Winnie-the-Pooh"},
                    {"id": 8, "title": "The House at Pooh Corner"}
                ]
            }]
        })
    );
}

#[test]
fn genre_at_genre_depth_omits_authors() {
    assert_eq!(
        catalog().serialize(DetailLevel::Genre),
        json!({"id": 1, "name": "Children Books"})
    );
}

#[test]
fn genre_at_author_depth_omits_books() {
    let doc = catalog().serialize(DetailLevel::Author);
    assert_eq!(doc["authors"][0], json!({"id": 3, "name": "A. A. Milne"}));
}

#[test]
fn book_at_relation_depth_is_full_detail() {
    assert_eq!(
        detailed_book().serialize(DetailLevel::Relation),
        json!({
            "id": 7,
            "title": "Winnie-the-Pooh",
            "author": {"id": 3, "name": "A. A. Milne"},
            "genre": {"id": 1, "name": "Children Books"},
            "chapters": [{
                "id": 20,
                "index": 1,
                "title": "In Which We Are Introduced",
                "characters": [
                    {"id": 31, "name": "Christopher Robin"},
                    {"id": 30, "name": "Winnie-the-Pooh"}
                ]
            }],
            "characters": [
                {"id": 31, "name": "Christopher Robin"},
                {"id": 30, "name": "Winnie-the-Pooh"}
            ],
            "relations": [{
                "id": 50,
                "type": "friend",
                "from": {"id": 31, "name": "Christopher Robin"},
                "to": {"id": 30, "name": "Winnie-the-Pooh"}
            }]
        })
    );
}

#[test]
fn book_at_author_depth_omits_detail_collections() {
    let doc = detailed_book().serialize(DetailLevel::Author);
    let object = doc.as_object().unwrap();
    assert!(!object.contains_key("chapters"));
    assert!(!object.contains_key("characters"));
    assert!(!object.contains_key("relations"));
    assert_eq!(doc["author"], json!({"id": 3, "name": "A. A. Milne"}));
}

#[test]
fn chapter_members_appear_from_character_depth() {
    let book = detailed_book();
    let chapter = &book.chapters()[0];
    assert!(chapter.serialize(DetailLevel::Chapter).get("characters").is_none());
    assert_eq!(
        chapter.serialize(DetailLevel::Character)["characters"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn attributes_only_at_attribute_depth() {
    let pooh = pooh();
    assert!(pooh.serialize(DetailLevel::Relation).get("attributes").is_none());
    assert_eq!(
        pooh.serialize(DetailLevel::Attribute)["attributes"],
        json!([{"id": 40, "key": "species", "value": "bear"}])
    );
}

#[test]
fn relation_endpoints_present_at_any_depth() {
    let relation = Relation::new(RelationId::new(50), "friend", robin(), pooh());
    let doc = relation.serialize(DetailLevel::Genre);
    assert_eq!(doc["type"], "friend");
    assert_eq!(doc["from"]["id"], 31);
    assert_eq!(doc["to"]["id"], 30);
}

#[test]
fn relation_endpoints_follow_requested_depth() {
    let relation = Relation::new(RelationId::new(50), "friend", robin(), pooh());
    let doc = relation.serialize(DetailLevel::Attribute);
    assert_eq!(doc["to"]["attributes"][0]["key"], "species");
}

#[test]
fn serialize_all_builds_array_in_order() {
    let genres = vec![
        Genre::new(GenreId::new(2), "Drama"),
        Genre::new(GenreId::new(1), "Fiction"),
    ];
    assert_eq!(
        serialize_all(&genres, DetailLevel::Genre),
        json!([{"id": 2, "name": "Drama"}, {"id": 1, "name": "Fiction"}])
    );
    let text = to_json_string(&genres, DetailLevel::Genre);
    assert!(text.starts_with('['));
    assert!(text.contains("\"Drama\""));
}

// ── Chapter membership ───────────────────────────────────────────

#[test]
fn chapter_add_character_is_idempotent_per_id() {
    let mut chapter = Chapter::new(ChapterId::new(1), 1, "One");
    assert!(chapter.add_character(pooh()));
    assert!(!chapter.add_character(pooh()));
    assert_eq!(chapter.characters().len(), 1);
}

// ── Equality ─────────────────────────────────────────────────────

#[test]
fn equal_trees_compare_equal() {
    assert_eq!(catalog(), catalog());
    assert_eq!(detailed_book(), detailed_book());
}

#[test]
fn genres_differing_in_nested_book_are_unequal() {
    let mut other = Genre::new(GenreId::new(1), "Children Books");
    let mut author = Author::new(AuthorId::new(3), "A. A. Milne");
    author.push_book(Book::new(BookId::new(7), "Winnie-the-Pooh"));
    other.push_author(author);
    assert_ne!(catalog(), other);
}

#[test]
fn relations_compare_endpoints_by_value() {
    let a = Relation::new(RelationId::new(1), "friend", robin(), pooh());
    let b = Relation::new(RelationId::new(1), "friend", robin(), pooh());
    let reversed = Relation::new(RelationId::new(1), "friend", pooh(), robin());
    assert_eq!(a, b);
    assert_ne!(a, reversed);
}

#[test]
fn attributes_compare_all_fields() {
    let a = Attribute::new(AttributeId::new(1), "k", "v");
    assert_eq!(a, Attribute::new(AttributeId::new(1), "k", "v"));
    assert_ne!(a, Attribute::new(AttributeId::new(1), "k", "w"));
    assert_ne!(a, Attribute::new(AttributeId::new(2), "k", "v"));
}

// ── Depth gating property ────────────────────────────────────────

fn level_strategy() -> impl Strategy<Value = DetailLevel> {
    prop::sample::select(DetailLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn book_collections_match_rank(depth in level_strategy()) {
        let doc = detailed_book().serialize(depth);
        let object = doc.as_object().unwrap();
        prop_assert_eq!(object.contains_key("chapters"), depth >= DetailLevel::Chapter);
        prop_assert_eq!(object.contains_key("characters"), depth >= DetailLevel::Character);
        prop_assert_eq!(object.contains_key("relations"), depth >= DetailLevel::Relation);
        prop_assert!(object.contains_key("author"));
        prop_assert!(object.contains_key("genre"));
    }

    #[test]
    fn genre_collections_match_rank(depth in level_strategy()) {
        let doc = catalog().serialize(depth);
        prop_assert_eq!(doc.get("authors").is_some(), depth >= DetailLevel::Author);
        let books_present = doc
            .get("authors")
            .and_then(|authors| authors[0].get("books"))
            .is_some();
        prop_assert_eq!(books_present, depth >= DetailLevel::Book);
    }
}
