//! TripRepository - Repository per la gestione dei viaggi

use super::Read;
use crate::entities::{Client, Country, Trip};
use sqlx::{Error, FromRow, SqlitePool};
use tracing::{debug, instrument};

/// Paese collegato a un viaggio tramite `country_trip`
#[derive(Debug, Clone, FromRow)]
pub struct TripCountry {
    pub id_trip: i64,
    #[sqlx(flatten)]
    pub country: Country,
}

/// Cliente iscritto a un viaggio tramite `client_trip`
#[derive(Debug, Clone, FromRow)]
pub struct TripClient {
    pub id_trip: i64,
    #[sqlx(flatten)]
    pub client: Client,
}

// TRIP REPOSITORY
pub struct TripRepository {
    connection_pool: SqlitePool,
}

impl TripRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get all trips, most recent `date_from` first
    #[instrument(skip(self))]
    pub async fn find_all_by_date_from_desc(&self) -> Result<Vec<Trip>, Error> {
        debug!("Fetching all trips");
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT
                id_trip,
                name,
                description,
                date_from,
                date_to,
                max_people
            FROM trip
            ORDER BY date_from DESC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} trips", trips.len());
        Ok(trips)
    }

    /// Get every (trip, country) link
    #[instrument(skip(self))]
    pub async fn find_all_countries(&self) -> Result<Vec<TripCountry>, Error> {
        let countries = sqlx::query_as::<_, TripCountry>(
            r#"
            SELECT
                ct.id_trip,
                c.id_country,
                c.name
            FROM country_trip ct
            INNER JOIN country c ON c.id_country = ct.id_country
            ORDER BY ct.id_trip, c.name
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(countries)
    }

    /// Get every (trip, client) registration, in registration order
    #[instrument(skip(self))]
    pub async fn find_all_clients(&self) -> Result<Vec<TripClient>, Error> {
        let clients = sqlx::query_as::<_, TripClient>(
            r#"
            SELECT
                ct.id_trip,
                c.id_client,
                c.first_name,
                c.last_name,
                c.pesel
            FROM client_trip ct
            INNER JOIN client c ON c.id_client = ct.id_client
            ORDER BY ct.id_trip, ct.registered_at
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(clients)
    }
}

impl Read<Trip, i64> for TripRepository {
    #[instrument(skip(self), fields(id_trip = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Trip>, Error> {
        debug!("Reading trip by id");
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT
                id_trip,
                name,
                description,
                date_from,
                date_to,
                max_people
            FROM trip
            WHERE id_trip = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        if trip.is_some() {
            debug!("Trip found");
        } else {
            debug!("Trip not found");
        }

        Ok(trip)
    }
}
