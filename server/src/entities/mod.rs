//! Entities module - Domain entities
//!
//! Each entity maps one table of the database. Relations are not embedded here:
//! they are assembled by the repositories into the DTOs returned to the client.

pub mod client;
pub mod client_trip;
pub mod country;
pub mod doctor;
pub mod medicament;
pub mod patient;
pub mod prescription;
pub mod trip;

// Re-exports per facilitare l'import
pub use client::Client;
pub use client_trip::ClientTrip;
pub use country::Country;
pub use doctor::Doctor;
pub use medicament::{Medicament, PrescriptionMedicament};
pub use patient::Patient;
pub use prescription::Prescription;
pub use trip::Trip;
