//! Characters, the relations between them, and their attributes.

use crate::document::put_children;
use crate::{AttributeId, CharacterId, DetailLevel, Document, RelationId};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// A character of a book.
///
/// Characters are shared: the same instance is referenced from the book's
/// character list, from every chapter it appears in and from every relation it
/// takes part in.
#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    name: String,
    attributes: Vec<Attribute>,
}

impl Character {
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.attributes == other.attributes
    }
}

impl Eq for Character {}

impl Document for Character {
    const KIND: DetailLevel = DetailLevel::Character;

    fn serialize(&self, depth: DetailLevel) -> Value {
        let mut object = Map::new();
        object.insert("id".into(), json!(self.id));
        object.insert("name".into(), json!(self.name));
        put_children(&mut object, "attributes", &self.attributes, depth);
        Value::Object(object)
    }
}

/// A typed, directed relation between two characters.
///
/// Both endpoints are required at construction, so a relation can never be
/// serialized with a missing side.
#[derive(Debug, Clone)]
pub struct Relation {
    id: RelationId,
    kind: String,
    from: Arc<Character>,
    to: Arc<Character>,
}

impl Relation {
    pub fn new(
        id: RelationId,
        kind: impl Into<String>,
        from: Arc<Character>,
        to: Arc<Character>,
    ) -> Self {
        Self {
            id,
            kind: kind.into(),
            from,
            to,
        }
    }

    pub fn id(&self) -> RelationId {
        self.id
    }

    /// The relation label, e.g. `friend`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn from(&self) -> &Arc<Character> {
        &self.from
    }

    pub fn to(&self) -> &Arc<Character> {
        &self.to
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.kind == other.kind
            && *self.from == *other.from
            && *self.to == *other.to
    }
}

impl Eq for Relation {}

impl Document for Relation {
    const KIND: DetailLevel = DetailLevel::Relation;

    fn serialize(&self, depth: DetailLevel) -> Value {
        json!({
            "id": self.id,
            "type": self.kind,
            "from": self.from.serialize(depth),
            "to": self.to.serialize(depth),
        })
    }
}

/// A key/value fact about one character.
#[derive(Debug, Clone)]
pub struct Attribute {
    id: AttributeId,
    key: String,
    value: String,
}

impl Attribute {
    pub fn new(id: AttributeId, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> AttributeId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.key == other.key && self.value == other.value
    }
}

impl Eq for Attribute {}

impl Document for Attribute {
    const KIND: DetailLevel = DetailLevel::Attribute;

    fn serialize(&self, _depth: DetailLevel) -> Value {
        json!({
            "id": self.id,
            "key": self.key,
            "value": self.value,
        })
    }
}
