//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono scritte con `sqlx::query_as` e `#[derive(FromRow)]` sulle entità:
//! la verifica avviene a runtime, quindi la build non richiede un database raggiungibile.
//!
//! Metodi da usare in base al numero di righe attese:
//!
//! | Righe        | Metodo                |
//! |--------------|-----------------------|
//! | nessuna      | `.execute(..)`        |
//! | zero o una   | `.fetch_optional(..)` |
//! | esattamente una | `.fetch_one(..)`   |
//! | molte        | `.fetch_all(..)`      |

pub mod client;
pub mod client_trip;
pub mod patient;
pub mod traits;
pub mod trip;

// Re-esportazione dei trait per facilitare l'import
pub use traits::Read;

// Re-esportazione delle struct dei repository per facilitare l'import
pub use client::{ClientRemoval, ClientRepository};
pub use client_trip::ClientTripRepository;
pub use patient::{PatientRepository, PrescribedMedicament, PrescriptionWithDoctor};
pub use trip::{TripClient, TripCountry, TripRepository};
