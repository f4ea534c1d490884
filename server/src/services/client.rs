//! Client services - Rimozione dei clienti

use crate::core::{AppError, AppState};
use crate::repositories::ClientRemoval;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), fields(id_client = %id_client))]
pub async fn remove_client(
    State(state): State<Arc<AppState>>,
    Path(id_client): Path<i64>, // unico parametro della rotta /api/trip/{id}
) -> Result<StatusCode, AppError> {
    debug!("Removing client");
    match state.client.delete_without_trips(&id_client).await? {
        ClientRemoval::Deleted => {
            info!("Client removed");
            Ok(StatusCode::NO_CONTENT)
        }
        ClientRemoval::NotFound => {
            warn!("Client not found");
            Err(AppError::not_found("Client not found"))
        }
        ClientRemoval::HasTrips => {
            warn!("Client still registered on trips");
            Err(AppError::bad_request("Client has assigned trips"))
        }
    }
}
