//! Embedded property graph on SQLite.
//!
//! Nodes and edges live in two tables, each with its own id sequence, and keep
//! their properties as a JSON object that statements read with
//! `json_extract`. Like a real graph store, a node and an edge may therefore
//! share the same numeric id.

use crate::{Dialect, Params, QueryEngine, Row, StoreError, StoreResult, Value};
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// SQLite-backed [`QueryEngine`] speaking [`Dialect::Sql`].
#[derive(Clone)]
pub struct SqliteGraph {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteGraph {
    /// Opens (or creates) a graph database at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens a private in-memory graph.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        let graph = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        graph.init_schema()?;
        Ok(graph)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS nodes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                props TEXT NOT NULL DEFAULT '{}'
            );

            CREATE TABLE IF NOT EXISTS edges (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                src INTEGER NOT NULL REFERENCES nodes(id) ON DELETE CASCADE,
                dst INTEGER NOT NULL REFERENCES nodes(id) ON DELETE CASCADE,
                props TEXT NOT NULL DEFAULT '{}'
            );

            CREATE INDEX IF NOT EXISTS idx_nodes_label ON nodes(label);
            CREATE INDEX IF NOT EXISTS idx_edges_src ON edges(src, type);
            CREATE INDEX IF NOT EXISTS idx_edges_dst ON edges(dst, type);
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("sqlite connection lock poisoned".into()))
    }

    // ── Graph writes ─────────────────────────────────────────────

    /// Creates a node and returns its id.
    pub fn create_node(&self, label: &str, props: serde_json::Value) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO nodes (label, props) VALUES (?1, ?2)",
            params![label, serde_json::to_string(&props)?],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Creates a directed edge `src -[kind]-> dst` and returns its id.
    pub fn create_edge(
        &self,
        kind: &str,
        src: i64,
        dst: i64,
        props: serde_json::Value,
    ) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO edges (type, src, dst, props) VALUES (?1, ?2, ?3, ?4)",
            params![kind, src, dst, serde_json::to_string(&props)?],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Deletes every node and edge.
    pub fn clear(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute_batch("DELETE FROM edges; DELETE FROM nodes;")?;
        Ok(())
    }

    /// Number of nodes currently stored.
    pub fn node_count(&self) -> StoreResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM nodes", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl QueryEngine for SqliteGraph {
    fn dialect(&self) -> Dialect {
        Dialect::Sql
    }

    fn execute(&self, statement: &str, params: &Params) -> StoreResult<Vec<Row>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(statement)?;

        for index in 1..=stmt.parameter_count() {
            let declared = stmt.parameter_name(index).ok_or_else(|| {
                StoreError::InvalidParameter {
                    name: format!("?{index}"),
                    reason: "positional parameters are not supported".into(),
                }
            })?;
            let name = declared.trim_start_matches([':', '$', '@']).to_string();
            let value = params.get(&name).ok_or_else(|| StoreError::InvalidParameter {
                name: name.clone(),
                reason: "no value supplied".into(),
            })?;
            stmt.raw_bind_parameter(index, to_sql(value)?)?;
        }

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let mut rows = stmt.raw_query();
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            let mut out = Row::new();
            for (index, column) in columns.iter().enumerate() {
                out.push(column.as_str(), from_sql(row.get_ref(index)?));
            }
            result.push(out);
        }

        debug!(rows = result.len(), "sqlite statement executed");
        Ok(result)
    }
}

fn to_sql(value: &Value) -> StoreResult<SqlValue> {
    Ok(match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Int(i) => SqlValue::Integer(*i),
        Value::Float(f) => SqlValue::Real(*f),
        Value::Text(s) => SqlValue::Text(s.clone()),
        Value::Handle(handle) => SqlValue::Integer(handle.store_id()),
        Value::Json(v) => SqlValue::Text(serde_json::to_string(v)?),
    })
}

fn from_sql(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int(i),
        ValueRef::Real(f) => Value::Float(f),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Json(serde_json::Value::Array(
            bytes.iter().map(|b| serde_json::Value::from(*b)).collect(),
        )),
    }
}
