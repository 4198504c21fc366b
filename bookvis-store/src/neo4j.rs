//! Neo4j engine over the transactional HTTP endpoint.
//!
//! Each call is sent as a single auto-commit transaction to
//! `POST {base_url}/db/{database}/tx/commit`.

use crate::{Dialect, Handle, Params, QueryEngine, Row, StoreError, StoreResult, Value};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

/// Connection settings for a Neo4j server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neo4jConfig {
    /// Base URL of the HTTP API (e.g. `http://localhost:7474`).
    pub base_url: String,
    /// Database name.
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:7474".to_string(),
            database: "neo4j".to_string(),
            username: None,
            password: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TxResponse {
    #[serde(default)]
    results: Vec<TxResult>,
    #[serde(default)]
    errors: Vec<TxError>,
}

#[derive(Debug, Deserialize)]
struct TxResult {
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<TxRow>,
}

#[derive(Debug, Deserialize)]
struct TxRow {
    row: Vec<serde_json::Value>,
    #[serde(default)]
    meta: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TxError {
    code: String,
    message: String,
}

/// [`QueryEngine`] speaking Cypher to a Neo4j server.
pub struct Neo4jHttp {
    config: Neo4jConfig,
    client: Client,
}

impl Neo4jHttp {
    pub fn new(config: Neo4jConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Neo4jConfig {
        &self.config
    }

    fn commit_url(&self) -> String {
        format!(
            "{}/db/{}/tx/commit",
            self.config.base_url.trim_end_matches('/'),
            self.config.database
        )
    }
}

impl QueryEngine for Neo4jHttp {
    fn dialect(&self) -> Dialect {
        Dialect::Cypher
    }

    fn execute(&self, statement: &str, params: &Params) -> StoreResult<Vec<Row>> {
        let parameters: serde_json::Map<String, serde_json::Value> = params
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        let body = json!({
            "statements": [{
                "statement": statement,
                "parameters": parameters,
            }]
        });

        let mut request = self
            .client
            .post(self.commit_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body);
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_deref());
        }

        let response = request
            .send()
            .map_err(|e| StoreError::Unavailable(format!("neo4j request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            warn!(%status, "neo4j rejected request");
            return Err(StoreError::Unavailable(format!("neo4j returned {status}: {detail}")));
        }

        let tx: TxResponse = response
            .json()
            .map_err(|e| StoreError::Unavailable(format!("failed to parse neo4j response: {e}")))?;

        if let Some(error) = tx.errors.into_iter().next() {
            return Err(StoreError::Query {
                code: error.code,
                message: error.message,
            });
        }

        let rows: Vec<Row> = tx
            .results
            .into_iter()
            .next()
            .map(decode_result)
            .unwrap_or_default();
        debug!(rows = rows.len(), "neo4j statement executed");
        Ok(rows)
    }
}

fn decode_result(result: TxResult) -> Vec<Row> {
    let TxResult { columns, data } = result;
    data.into_iter()
        .map(|TxRow { row, meta }| {
            let cells: Row = columns
                .iter()
                .cloned()
                .zip(row)
                .enumerate()
                .map(|(index, (column, cell))| (column, decode_cell(cell, meta.get(index))))
                .collect();
            cells
        })
        .collect()
}

/// Graph elements come back as property maps; the element's identity is
/// carried separately in the row's `meta` entry.
fn decode_cell(cell: serde_json::Value, meta: Option<&serde_json::Value>) -> Value {
    let handle = meta.and_then(|m| {
        let id = m.get("id")?.as_i64()?;
        match m.get("type")?.as_str()? {
            "node" => Some(Handle::node(id)),
            "relationship" => Some(Handle::relationship(id)),
            _ => None,
        }
    });
    match handle {
        Some(handle) if !cell.is_null() => Value::Handle(handle),
        _ => Value::from_json(cell),
    }
}
