//! Identifier types for catalog entities.
//!
//! The graph store assigns numeric ids that are unique within one entity kind
//! but may collide across kinds, so every kind gets its own newtype and ids of
//! different kinds can never be compared by accident.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! store_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps an identifier assigned by the graph store.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw store identifier.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

store_id!(
    /// Identifier of a genre node.
    GenreId
);
store_id!(
    /// Identifier of an author node.
    AuthorId
);
store_id!(
    /// Identifier of a book node.
    BookId
);
store_id!(
    /// Identifier of a chapter node.
    ChapterId
);
store_id!(
    /// Identifier of a character node.
    CharacterId
);
store_id!(
    /// Identifier of a `relation` edge between two characters.
    RelationId
);
store_id!(
    /// Identifier of an attribute node.
    AttributeId
);
