use crate::{StoreError, StoreResult, Value};

/// Floats at or beyond this magnitude do not fit an `i64`.
const MAX_WHOLE_FLOAT: f64 = 9.2e18;

/// One result row: named columns in the order the statement returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Builder form, used by engines and tests alike.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.cells.push((column.into(), value.into()));
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw cell lookup. `None` means the column does not exist, which is
    /// different from a column holding [`Value::Null`].
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn value(&self, column: &str) -> StoreResult<&Value> {
        self.get(column)
            .ok_or_else(|| StoreError::MissingColumn(column.to_string()))
    }

    /// Integer column. Node and relationship handles yield their store id.
    pub fn i64(&self, column: &str) -> StoreResult<i64> {
        self.opt_i64(column)?.ok_or_else(|| mismatch(column, "integer", &Value::Null))
    }

    pub fn opt_i64(&self, column: &str) -> StoreResult<Option<i64>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::Int(i) => Ok(Some(*i)),
            Value::Handle(handle) => Ok(Some(handle.store_id())),
            // Stores that only speak doubles still hand back whole ids.
            Value::Float(f) if f.fract() == 0.0 && f.abs() < MAX_WHOLE_FLOAT => {
                Ok(Some(*f as i64))
            }
            other => Err(mismatch(column, "integer", other)),
        }
    }

    /// Text column. Scalars of other types are rendered as text.
    pub fn text(&self, column: &str) -> StoreResult<String> {
        self.opt_text(column)?.ok_or_else(|| mismatch(column, "text", &Value::Null))
    }

    pub fn opt_text(&self, column: &str) -> StoreResult<Option<String>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            Value::Int(i) => Ok(Some(i.to_string())),
            Value::Float(f) => Ok(Some(f.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(mismatch(column, "text", other)),
        }
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

fn mismatch(column: &str, expected: &'static str, found: &Value) -> StoreError {
    StoreError::TypeMismatch {
        column: column.to_string(),
        expected,
        found: found.type_name(),
    }
}
