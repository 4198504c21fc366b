//! HTTP API for the bookvis catalog.
//!
//! | Route             | Response                                        |
//! |-------------------|-------------------------------------------------|
//! | `GET /books`      | genres → authors → books, `?depth=` optional    |
//! | `GET /books/{id}` | one book in full detail, `?depth=` optional     |
//! | `POST /books`     | `501`, writes are not supported                 |
//! | `PUT /books/{id}` | `501`, writes are not supported                 |
//! | `GET /health`     | `OK`                                            |
//!
//! Errors are JSON objects of the form `{"error": "..."}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use bookvis_catalog::{BookService, CatalogError};
use bookvis_model::{BookId, DetailLevel};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error};

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Arc<BookService>,
}

impl AppState {
    pub fn new(service: Arc<BookService>) -> Self {
        Self { service }
    }
}

/// Query string accepted by the read routes.
#[derive(Debug, Default, Deserialize)]
pub struct DepthQuery {
    pub depth: Option<String>,
}

impl DepthQuery {
    fn level(&self) -> Result<Option<DetailLevel>, ApiError> {
        self.depth
            .as_deref()
            .map(|raw| {
                raw.parse::<DetailLevel>()
                    .map_err(|e| ApiError::bad_request(e.to_string()))
            })
            .transpose()
    }
}

/// An error response with a JSON body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            CatalogError::Store(_) => {
                error!("catalog query failed: {err}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Runs a blocking catalog call off the async workers.
async fn run_blocking<F>(state: &AppState, call: F) -> Result<Value, ApiError>
where
    F: FnOnce(&BookService) -> Result<Value, CatalogError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| {
            error!("catalog task failed: {e}");
            ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        })?
        .map_err(ApiError::from)
}

async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<DepthQuery>,
) -> Result<Json<Value>, ApiError> {
    let depth = query.level()?;
    debug!(?depth, "listing catalog");
    let document = run_blocking(&state, move |service| service.list_all_document(depth)).await?;
    Ok(Json(document))
}

async fn get_book(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<DepthQuery>,
) -> Result<Json<Value>, ApiError> {
    let id = raw_id
        .parse::<BookId>()
        .map_err(|_| ApiError::bad_request(format!("invalid book id: {raw_id}")))?;
    let depth = query.level()?;
    debug!(book = %id, ?depth, "loading book");
    let document = run_blocking(&state, move |service| service.book_document(id, depth)).await?;
    Ok(Json(document))
}

async fn create_book() -> ApiError {
    ApiError::new(StatusCode::NOT_IMPLEMENTED, "creating books is not supported")
}

async fn update_book(Path(_id): Path<String>) -> ApiError {
    ApiError::new(StatusCode::NOT_IMPLEMENTED, "updating books is not supported")
}

async fn health() -> &'static str {
    "OK"
}

/// Build the HTTP API router over the given catalog service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/{id}", get(get_book).put(update_book))
        .route("/health", get(health))
        .with_state(state)
}
