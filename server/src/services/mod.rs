//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP di un gruppo indipendente:
//! viaggi e clienti da una parte, pazienti dall'altra.

pub mod client;
pub mod patient;
pub mod trip;

// Re-exports per facilitare l'import
pub use client::remove_client;
pub use patient::get_patient_details;
pub use trip::{assign_client_to_trip, list_trips};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
