//! Catalog Domain Models
//!
//! This module contains all data structures related to the catalog
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Caller-supplied identifier, unique within the store
    pub id: i64,

    /// Name of the product
    pub name: String,

    /// Optional free-form description. `None` means "not provided" and is
    /// serialized as JSON `null`, distinct from an empty string.
    pub description: Option<String>,

    /// Price of the product, currency-agnostic
    pub price: f64,
}

/// Response for the root endpoint
#[derive(Serialize)]
pub struct Welcome {
    /// Greeting shown to API consumers
    pub message: String,

    /// Number of items currently in the store
    pub items_count: usize,
}

/// Response for a successful delete
#[derive(Serialize)]
pub struct Deleted {
    /// Confirmation message naming the removed item
    pub message: String,
}
