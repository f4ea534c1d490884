//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config, config};
pub use services::root;

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api/trip", configure_trip_routes())
        .nest("/api/patient", configure_patient_routes())
        .with_state(state)
}

/// Configura le routes per viaggi e clienti
fn configure_trip_routes() -> Router<Arc<AppState>> {
    use services::*;

    // `{id}` è l'id del cliente nella DELETE e l'id del viaggio nella POST:
    // stesso nome perché il segmento è nella stessa posizione
    Router::new()
        .route("/", get(list_trips))
        .route("/{id}", delete(remove_client))
        .route("/{id}/clients", post(assign_client_to_trip))
}

/// Configura le routes per i pazienti
fn configure_patient_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new().route("/{id}", get(get_patient_details))
}
