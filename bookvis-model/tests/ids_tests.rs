use bookvis_model::{BookId, CharacterId, DetailLevel, GenreId, ModelError};

// ── Store ids ────────────────────────────────────────────────────

#[test]
fn id_wraps_raw_value() {
    let id = BookId::new(42);
    assert_eq!(id.get(), 42);
    assert_eq!(BookId::from(42), id);
}

#[test]
fn id_display_is_raw_number() {
    assert_eq!(GenreId::new(7).to_string(), "7");
}

#[test]
fn id_parses_from_path_segment() {
    assert_eq!("123".parse::<BookId>().unwrap(), BookId::new(123));
    assert_eq!(" 5 ".parse::<CharacterId>().unwrap(), CharacterId::new(5));
    assert!("abc".parse::<BookId>().is_err());
    assert!("".parse::<BookId>().is_err());
}

#[test]
fn id_serializes_transparently() {
    assert_eq!(serde_json::to_string(&BookId::new(9)).unwrap(), "9");
    let parsed: BookId = serde_json::from_str("9").unwrap();
    assert_eq!(parsed, BookId::new(9));
}

// ── Detail levels ────────────────────────────────────────────────

#[test]
fn detail_levels_are_ordered() {
    let levels = DetailLevel::ALL;
    for pair in levels.windows(2) {
        assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
    }
}

#[test]
fn includes_is_inclusive() {
    assert!(DetailLevel::Book.includes(DetailLevel::Book));
    assert!(DetailLevel::Book.includes(DetailLevel::Author));
    assert!(!DetailLevel::Book.includes(DetailLevel::Chapter));
}

#[test]
fn detail_level_parses_case_insensitively() {
    assert_eq!("relation".parse::<DetailLevel>().unwrap(), DetailLevel::Relation);
    assert_eq!("BOOK".parse::<DetailLevel>().unwrap(), DetailLevel::Book);
    for level in DetailLevel::ALL {
        assert_eq!(level.to_string().parse::<DetailLevel>().unwrap(), level);
    }
}

#[test]
fn unknown_detail_level_is_rejected() {
    let err = "everything".parse::<DetailLevel>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownDetailLevel(ref s) if s == "everything"));
    assert_eq!(err.to_string(), "unknown detail level: everything");
}

#[test]
fn detail_level_serde_uses_snake_case() {
    assert_eq!(serde_json::to_string(&DetailLevel::Character).unwrap(), "\"character\"");
}
