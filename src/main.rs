use item_catalog_rust::catalog::AppState;
use item_catalog_rust::router::create_app_router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize application state with the seed catalog
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

#[cfg(test)]
mod tests {
    use item_catalog_rust::catalog::error::StoreError;
    use item_catalog_rust::catalog::models::Item;
    use item_catalog_rust::catalog::state::AppState;

    #[test]
    fn test_seeded_state_and_store_operations() {
        let state = AppState::new();

        // The seed catalog is loaded at construction time
        assert_eq!(state.store.len(), 5);

        let tablet = state.store.get(3).expect("seed item 3 present");
        assert_eq!(
            tablet,
            Item {
                id: 3,
                name: "Tablet".to_string(),
                description: Some("Perfecta para trabajo y entretenimiento".to_string()),
                price: 500.00,
            }
        );

        // Mutations flow through the injected store, not a global
        let teclado = Item {
            id: 6,
            name: "Teclado".to_string(),
            description: None,
            price: 75.0,
        };
        state.store.create(teclado.clone()).expect("id 6 is free");
        assert_eq!(state.store.list().len(), 6);
        assert_eq!(state.store.create(teclado), Err(StoreError::Conflict));

        // A second state is fully isolated from the first
        let other = AppState::new();
        assert_eq!(other.store.len(), 5);
    }
}
