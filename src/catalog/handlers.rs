//! REST API handlers for catalog operations
//!
//! This module implements the HTTP endpoints for listing, fetching,
//! creating, replacing and deleting catalog items.

use super::{error::StoreError, models::*, state::SharedState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(root))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(replace_item).delete(delete_item),
        )
}

/// Endpoint: GET /
/// Returns a greeting and the current number of items in the store.
async fn root(State(state): State<SharedState>) -> Json<Welcome> {
    Json(Welcome {
        message: "Bienvenido a mi API".to_string(),
        items_count: state.store.len(),
    })
}

/// Endpoint: GET /items
/// Returns a snapshot of all items in insertion order.
async fn list_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.store.list())
}

/// Endpoint: GET /items/:id
async fn get_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, StoreError> {
    state.store.get(id).map(Json)
}

/// Endpoint: POST /items
/// Inserts a new item; the payload carries the id.
async fn create_item(
    State(state): State<SharedState>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, StoreError> {
    state.store.create(item).map(Json)
}

/// Endpoint: PUT /items/:id
/// Fully overwrites an existing item. The path id wins over the payload id.
async fn replace_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(item): Json<Item>,
) -> Result<Json<Item>, StoreError> {
    state.store.replace(id, item).map(Json)
}

/// Endpoint: DELETE /items/:id
/// Removes an item and confirms with a message naming it.
async fn delete_item(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>, StoreError> {
    let removed = state.store.delete(id)?;
    tracing::info!("Item {} ('{}') deleted", removed.id, removed.name);

    Ok(Json(Deleted {
        message: format!("Item '{}' eliminado", removed.name),
    }))
}
