//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod client;
pub mod patient;
pub mod trip;

pub use client::{AssignClientDTO, CreateClientDTO};
pub use patient::{DoctorDTO, MedicamentDTO, PatientDetailsDTO, PrescriptionDTO};
pub use trip::{ClientDTO, CountryDTO, TripDTO};
