//! Magazzino server - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    use services::*;

    Router::new()
        .route("/", get(root))
        .route("/jwt", get(get_jwt))
        .nest("/api/items", configure_item_routes(state.clone()))
        // API completamente aperta lato CORS, come l'app originale
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Configura le routes protette per la gestione degli articoli
fn configure_item_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item_by_id).put(update_item).delete(delete_item),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
