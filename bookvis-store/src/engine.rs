//! The narrow contract between the catalog and a graph store.

use crate::{Params, Row, StoreResult};

/// The statement language an engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Cypher, spoken by Neo4j.
    Cypher,
    /// SQL over the embedded `nodes`/`edges` property graph.
    Sql,
}

/// Executes parameterized statements against a graph store.
///
/// Implementations own connection handling, pooling and timeouts, and must be
/// safe to share between concurrent requests. They never retry on their own.
pub trait QueryEngine: Send + Sync {
    /// The statement language accepted by [`QueryEngine::execute`].
    fn dialect(&self) -> Dialect;

    /// Runs one statement and returns its rows in store order.
    fn execute(&self, statement: &str, params: &Params) -> StoreResult<Vec<Row>>;
}

impl<E: QueryEngine + ?Sized> QueryEngine for std::sync::Arc<E> {
    fn dialect(&self) -> Dialect {
        (**self).dialect()
    }

    fn execute(&self, statement: &str, params: &Params) -> StoreResult<Vec<Row>> {
        (**self).execute(statement, params)
    }
}
