//! Error types for the item store.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Both variants are expected, recoverable, caller-facing conditions; the
/// display texts are the messages sent over the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the requested id exists.
    #[error("Item no encontrado")]
    NotFound,

    /// An item with the given id is already present.
    #[error("ID ya existe")]
    Conflict,
}

impl StoreError {
    fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::Conflict => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
