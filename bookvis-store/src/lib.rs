//! Graph store adapters for bookvis.
//!
//! The catalog talks to its graph database through one narrow contract,
//! [`QueryEngine::execute`]: a statement plus named parameters in, an ordered
//! list of [`Row`]s out. Cells are scalar [`Value`]s, [`Value::Null`] for "no
//! value", or [`Handle`]s to nodes and relationships whose store id is read
//! with [`Handle::store_id`].
//!
//! # Engines
//!
//! - [`SqliteGraph`]: an embedded property graph in SQLite, used for local
//!   runs and tests
//! - [`Neo4jHttp`]: a Neo4j server reached over its transactional HTTP API

mod engine;
mod error;
mod neo4j;
mod row;
mod sqlite;
mod value;

pub use engine::{Dialect, QueryEngine};
pub use error::{StoreError, StoreResult};
pub use neo4j::{Neo4jConfig, Neo4jHttp};
pub use row::Row;
pub use sqlite::SqliteGraph;
pub use value::{Handle, HandleKind, Params, Value};
