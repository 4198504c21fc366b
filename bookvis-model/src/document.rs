//! Depth-bounded JSON documents.

use crate::DetailLevel;
use serde_json::{Map, Value};

/// An entity that renders itself as a JSON object for a requested depth.
pub trait Document {
    /// The rank of this entity kind in the [`DetailLevel`] ordering.
    const KIND: DetailLevel;

    /// Produces `{id, <name field>, ...}` plus every child collection the
    /// requested depth allows.
    fn serialize(&self, depth: DetailLevel) -> Value;
}

/// Serializes a sequence of entities into a JSON array.
pub fn serialize_all<'a, T, I>(items: I, depth: DetailLevel) -> Value
where
    T: Document + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Array(items.into_iter().map(|item| item.serialize(depth)).collect())
}

/// Serializes a sequence of entities to a JSON string.
pub fn to_json_string<'a, T, I>(items: I, depth: DetailLevel) -> String
where
    T: Document + 'a,
    I: IntoIterator<Item = &'a T>,
{
    serialize_all(items, depth).to_string()
}

/// Adds `field` holding the serialized `children` when `depth` reaches the
/// children's kind.
pub(crate) fn put_children<'a, T, I>(
    object: &mut Map<String, Value>,
    field: &str,
    children: I,
    depth: DetailLevel,
) where
    T: Document + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if depth.includes(T::KIND) {
        object.insert(field.to_string(), serialize_all(children, depth));
    }
}

impl<T: Document> Document for std::sync::Arc<T> {
    const KIND: DetailLevel = T::KIND;

    fn serialize(&self, depth: DetailLevel) -> Value {
        T::serialize(self, depth)
    }
}
