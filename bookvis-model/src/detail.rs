use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How deep a serialized tree expands.
///
/// Each entity kind has a rank in this ordering; a child collection is only
/// emitted when the requested level is at or beyond the child's rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Genre,
    Author,
    Book,
    Chapter,
    Character,
    Relation,
    Attribute,
}

impl DetailLevel {
    /// Every level, lowest first.
    pub const ALL: [DetailLevel; 7] = [
        DetailLevel::Genre,
        DetailLevel::Author,
        DetailLevel::Book,
        DetailLevel::Chapter,
        DetailLevel::Character,
        DetailLevel::Relation,
        DetailLevel::Attribute,
    ];

    /// Returns true if children of `kind` are expanded at this level.
    #[must_use]
    pub fn includes(self, kind: DetailLevel) -> bool {
        kind <= self
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Genre => "genre",
            DetailLevel::Author => "author",
            DetailLevel::Book => "book",
            DetailLevel::Chapter => "chapter",
            DetailLevel::Character => "character",
            DetailLevel::Relation => "relation",
            DetailLevel::Attribute => "attribute",
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetailLevel {
    type Err = crate::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| crate::ModelError::UnknownDetailLevel(s.to_string()))
    }
}
