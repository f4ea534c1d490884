//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository usati dai due gruppi di handler (viaggi/clienti e pazienti).
//! Ogni gruppo lavora solo sui propri repository: condividono soltanto il pool.

use crate::repositories::{
    ClientRepository, ClientTripRepository, PatientRepository, TripRepository,
};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository per la gestione dei viaggi
    pub trip: TripRepository,

    /// Repository per la gestione dei clienti
    pub client: ClientRepository,

    /// Repository per le iscrizioni dei clienti ai viaggi
    pub client_trip: ClientTripRepository,

    /// Repository per pazienti e prescrizioni
    pub patient: PatientRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            trip: TripRepository::new(pool.clone()),
            client: ClientRepository::new(pool.clone()),
            client_trip: ClientTripRepository::new(pool.clone()),
            patient: PatientRepository::new(pool),
        }
    }
}
