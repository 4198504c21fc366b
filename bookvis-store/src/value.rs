use serde_json::json;
use std::collections::BTreeMap;

/// Statement parameters, keyed by name without the dialect's sigil.
pub type Params = BTreeMap<String, Value>;

/// Whether a handle points at a node or at a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Node,
    Relationship,
}

/// An opaque reference to a node or relationship returned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    kind: HandleKind,
    id: i64,
}

impl Handle {
    pub const fn node(id: i64) -> Self {
        Self {
            kind: HandleKind::Node,
            id,
        }
    }

    pub const fn relationship(id: i64) -> Self {
        Self {
            kind: HandleKind::Relationship,
            id,
        }
    }

    pub const fn kind(&self) -> HandleKind {
        self.kind
    }

    /// The identifier the store assigned to the referenced element.
    pub const fn store_id(&self) -> i64 {
        self.id
    }
}

/// A single cell of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value: an unmatched optional pattern or an absent property.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Handle(Handle),
    /// Lists and maps, passed through uninspected.
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Handle(handle) => match handle.kind() {
                HandleKind::Node => "node",
                HandleKind::Relationship => "relationship",
            },
            Value::Json(_) => "json",
        }
    }

    /// Converts a JSON cell as returned by an HTTP store.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s),
            other => Value::Json(other),
        }
    }

    /// Renders the value as a JSON statement parameter.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => json!(b),
            Value::Int(i) => json!(i),
            Value::Float(f) => json!(f),
            Value::Text(s) => json!(s),
            Value::Handle(handle) => json!(handle.store_id()),
            Value::Json(v) => v.clone(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Handle> for Value {
    fn from(v: Handle) -> Self {
        Value::Handle(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
