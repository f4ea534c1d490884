//! Trip services - Lista viaggi e iscrizione dei clienti

use crate::core::{AppError, AppState};
use crate::dtos::{AssignClientDTO, ClientDTO, CountryDTO, CreateClientDTO, TripDTO};
use crate::repositories::Read;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::Utc;
use futures::future::try_join;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn list_trips(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TripDTO>>, AppError> {
    debug!("Listing trips");
    let trips = state.trip.find_all_by_date_from_desc().await?;

    let (countries, clients) = try_join(
        state.trip.find_all_countries(),
        state.trip.find_all_clients(),
    )
    .await?;

    // collegamenti raggruppati per id_trip, l'ordine dei viaggi resta quello della query
    let mut countries_by_trip: HashMap<i64, Vec<CountryDTO>> = HashMap::new();
    for link in countries {
        countries_by_trip
            .entry(link.id_trip)
            .or_default()
            .push(link.country.into());
    }

    let mut clients_by_trip: HashMap<i64, Vec<ClientDTO>> = HashMap::new();
    for link in clients {
        clients_by_trip
            .entry(link.id_trip)
            .or_default()
            .push(link.client.into());
    }

    let trips_dto: Vec<TripDTO> = trips
        .into_iter()
        .map(|trip| {
            let id_trip = trip.id_trip;
            let mut dto = TripDTO::from(trip);
            dto.countries = countries_by_trip.remove(&id_trip).unwrap_or_default();
            dto.clients = clients_by_trip.remove(&id_trip).unwrap_or_default();
            dto
        })
        .collect();

    info!("Successfully retrieved {} trips", trips_dto.len());
    Ok(Json(trips_dto))
}

#[instrument(skip(state, body), fields(id_trip = %id_trip))]
pub async fn assign_client_to_trip(
    State(state): State<Arc<AppState>>,
    Path(id_trip): Path<i64>,
    Json(body): Json<AssignClientDTO>,
) -> Result<StatusCode, AppError> {
    debug!("Assigning client to trip");
    body.validate()?;

    if state.trip.read(&id_trip).await?.is_none() {
        warn!("Trip not found");
        return Err(AppError::not_found("Trip not found"));
    }

    let client = CreateClientDTO::from(body);
    match state
        .client_trip
        .register(&id_trip, &client, Utc::now())
        .await
    {
        Ok(registration) => {
            info!(
                "Client {} assigned to trip {}",
                registration.id_client, registration.id_trip
            );
            Ok(StatusCode::OK)
        }
        // chiave composta di client_trip: cliente già iscritto
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            warn!("Client already assigned to trip");
            Err(AppError::bad_request("Client already assigned to trip"))
        }
        Err(err) => Err(err.into()),
    }
}
