//! ClientTripRepository - Repository per le iscrizioni dei clienti ai viaggi

use crate::dtos::CreateClientDTO;
use crate::entities::ClientTrip;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use sqlx::{Error, SqliteConnection, SqlitePool};
use tracing::{debug, info, instrument};

// CLIENTTRIP REPOSITORY
pub struct ClientTripRepository {
    connection_pool: SqlitePool,
}

impl ClientTripRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Registers a client on a trip in a single transaction.
    ///
    /// The client is looked up by PESEL and created when missing, then the
    /// `client_trip` row is inserted. If the pair is already registered the
    /// insert fails with a unique violation and nothing is persisted, not even
    /// a client created by this call.
    ///
    /// # Arguments
    /// * `id_trip` - Trip to register on (must exist)
    /// * `client` - Client data, used only when the PESEL is unknown
    /// * `registered_at` - Registration timestamp, stored truncated to the second
    #[instrument(skip(self, client), fields(id_trip = %id_trip))]
    pub async fn register(
        &self,
        id_trip: &i64,
        client: &CreateClientDTO,
        registered_at: DateTime<Utc>,
    ) -> Result<ClientTrip, Error> {
        // stesso formato testuale delle altre date: l'ordinamento SQL resta cronologico
        let registered_at = registered_at.trunc_subsecs(0);
        let stored_at = registered_at.to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut tx = self.connection_pool.begin().await?;

        let id_client = find_or_create_client(&mut tx, client).await?;
        debug!("Registering client {} on trip", id_client);

        sqlx::query(
            r#"
            INSERT INTO client_trip (id_client, id_trip, registered_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(id_client)
        .bind(*id_trip)
        .bind(&stored_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Client {} registered on trip {}", id_client, id_trip);
        Ok(ClientTrip {
            id_client,
            id_trip: *id_trip,
            registered_at,
        })
    }
}

/// Inserisce il cliente se il PESEL non esiste ancora e ne restituisce l'id.
/// `ON CONFLICT DO NOTHING` evita la corsa tra lettura e inserimento.
async fn find_or_create_client(
    conn: &mut SqliteConnection,
    client: &CreateClientDTO,
) -> Result<i64, Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO client (first_name, last_name, pesel)
        VALUES (?, ?, ?)
        ON CONFLICT (pesel) DO NOTHING
        "#,
    )
    .bind(&client.first_name)
    .bind(&client.last_name)
    .bind(&client.pesel)
    .execute(&mut *conn)
    .await?;

    if inserted.rows_affected() > 0 {
        info!("Created new client for unknown PESEL");
    }

    sqlx::query_scalar("SELECT id_client FROM client WHERE pesel = ?")
        .bind(&client.pesel)
        .fetch_one(&mut *conn)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Client;
    use chrono::{TimeZone, Timelike};
    use sqlx::SqlitePool;

    fn new_client(name: &str, pesel: &str) -> CreateClientDTO {
        CreateClientDTO {
            first_name: name.to_string(),
            last_name: None,
            pesel: pesel.to_string(),
        }
    }

    async fn client_by_pesel(pool: &SqlitePool, pesel: &str) -> sqlx::Result<Option<Client>> {
        sqlx::query_as::<_, Client>(
            "SELECT id_client, first_name, last_name, pesel FROM client WHERE pesel = ?",
        )
        .bind(pesel)
        .fetch_optional(pool)
        .await
    }

    async fn registrations_of_trip(pool: &SqlitePool, id_trip: i64) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM client_trip WHERE id_trip = ?")
            .bind(id_trip)
            .fetch_one(pool)
            .await
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("trips", "clients")))]
    async fn test_register_known_client(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ClientTripRepository::new(pool.clone());

        // Ewa (3) esiste già: il nome passato viene ignorato
        let registration = repo
            .register(&3, &new_client("Someone else", "99123154321"), Utc::now())
            .await?;

        assert_eq!(registration.id_client, 3);
        assert_eq!(registrations_of_trip(&pool, 3).await?, 1);
        let ewa = client_by_pesel(&pool, "99123154321").await?.unwrap();
        assert_eq!(ewa.first_name, "Ewa");
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("trips", "clients")))]
    async fn test_register_unknown_client_creates_it(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ClientTripRepository::new(pool.clone());

        let registration = repo
            .register(&2, &new_client("Piotr", "01234567890"), Utc::now())
            .await?;

        let piotr = client_by_pesel(&pool, "01234567890")
            .await?
            .expect("client should have been created");
        assert_eq!(piotr.id_client, registration.id_client);
        assert_eq!(piotr.first_name, "Piotr");
        assert!(piotr.last_name.is_none());
        assert_eq!(registrations_of_trip(&pool, 2).await?, 2);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("trips", "clients")))]
    async fn test_register_twice_is_unique_violation(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ClientTripRepository::new(pool.clone());

        // Anna (1) è già iscritta al viaggio 1
        let err = repo
            .register(&1, &new_client("Anna", "90010112345"), Utc::now())
            .await
            .unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(registrations_of_trip(&pool, 1).await?, 2);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("trips", "clients")))]
    async fn test_failed_registration_rolls_back_new_client(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ClientTripRepository::new(pool.clone());

        // viaggio inesistente: la FK fallisce e il nuovo cliente non deve restare
        let result = repo
            .register(&42, &new_client("Ghost", "11111111111"), Utc::now())
            .await;

        assert!(result.is_err());
        assert!(client_by_pesel(&pool, "11111111111").await?.is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("trips", "clients")))]
    async fn test_registered_at_stored_like_fixture_dates(pool: SqlitePool) -> sqlx::Result<()> {
        let repo = ClientTripRepository::new(pool.clone());
        let at = Utc
            .with_ymd_and_hms(2024, 1, 18, 7, 45, 30)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();

        let registration = repo
            .register(&1, &new_client("Ewa", "99123154321"), at)
            .await?;
        assert_eq!(registration.registered_at, at.trunc_subsecs(0));

        let stored: String = sqlx::query_scalar(
            "SELECT registered_at FROM client_trip WHERE id_client = 3 AND id_trip = 1",
        )
        .fetch_one(&pool)
        .await?;
        assert_eq!(stored, "2024-01-18T07:45:30Z");

        // tra le iscrizioni di Anna (15/01) e Jan (20/01)
        let order: Vec<i64> = sqlx::query_scalar(
            "SELECT id_client FROM client_trip WHERE id_trip = 1 ORDER BY registered_at",
        )
        .fetch_all(&pool)
        .await?;
        assert_eq!(order, vec![1, 3, 2]);
        Ok(())
    }
}
