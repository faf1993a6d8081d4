//! Catalog State Management
//!
//! This module manages the application state: the item store and the seed
//! catalog it is loaded with at startup.

use super::models::Item;
use super::store::ItemStore;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state holding the item store
pub struct AppState {
    /// The authoritative in-memory item collection.
    pub store: ItemStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with the store pre-loaded with the seed catalog
    pub fn new() -> Self {
        let store = ItemStore::new();
        for item in seed_catalog() {
            // Seed ids are distinct, so none of these inserts can conflict.
            store.create(item).expect("seed catalog ids are unique");
        }

        Self { store }
    }
}

/// The fixed sample catalog loaded at startup (ids 1-5).
fn seed_catalog() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Laptop".to_string(),
            description: Some("Potente laptop para programación".to_string()),
            price: 1200.00,
        },
        Item {
            id: 2,
            name: "Smartphone".to_string(),
            description: Some("Último modelo con cámara de alta resolución".to_string()),
            price: 800.00,
        },
        Item {
            id: 3,
            name: "Tablet".to_string(),
            description: Some("Perfecta para trabajo y entretenimiento".to_string()),
            price: 500.00,
        },
        Item {
            id: 4,
            name: "Auriculares".to_string(),
            description: Some("Auriculares inalámbricos con cancelación de ruido".to_string()),
            price: 150.00,
        },
        Item {
            id: 5,
            name: "Monitor".to_string(),
            description: Some("Monitor 4K de 27 pulgadas".to_string()),
            price: 350.00,
        },
    ]
}
