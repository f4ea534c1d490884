//! ClientRepository - Repository per la gestione dei clienti

use sqlx::{Error, SqlitePool};
use tracing::{debug, info, instrument};

/// Result of a guarded client deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRemoval {
    Deleted,
    NotFound,
    HasTrips,
}

// CLIENT REPOSITORY
pub struct ClientRepository {
    connection_pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Deletes a client only if it is not registered on any trip.
    ///
    /// The trip check and the delete run as one statement in one transaction.
    #[instrument(skip(self), fields(id_client = %id_client))]
    pub async fn delete_without_trips(&self, id_client: &i64) -> Result<ClientRemoval, Error> {
        let mut tx = self.connection_pool.begin().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM client
            WHERE id_client = ?
              AND NOT EXISTS (SELECT 1 FROM client_trip WHERE id_client = ?)
            "#,
        )
        .bind(*id_client)
        .bind(*id_client)
        .execute(&mut *tx)
        .await?;

        let outcome = if result.rows_affected() > 0 {
            ClientRemoval::Deleted
        } else {
            // nessuna riga cancellata: cliente assente oppure ancora iscritto
            let exists: i64 =
                sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM client WHERE id_client = ?)")
                    .bind(*id_client)
                    .fetch_one(&mut *tx)
                    .await?;
            if exists > 0 {
                ClientRemoval::HasTrips
            } else {
                ClientRemoval::NotFound
            }
        };

        tx.commit().await?;

        debug!("Client removal outcome: {:?}", outcome);
        if outcome == ClientRemoval::Deleted {
            info!("Client deleted successfully");
        }
        Ok(outcome)
    }
}
