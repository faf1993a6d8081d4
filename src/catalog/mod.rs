//! Catalog Domain Module
//!
//! This module contains all catalog business logic, including:
//! - Domain models (Item, response bodies)
//! - The in-memory item store and its error taxonomy
//! - Application state management
//! - REST API handlers

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
