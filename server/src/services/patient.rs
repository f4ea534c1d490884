//! Patient services - Dettaglio paziente con prescrizioni

use crate::core::{AppError, AppState};
use crate::dtos::{MedicamentDTO, PatientDetailsDTO, PrescriptionDTO};
use crate::repositories::Read;
use axum::extract::{Json, Path, State};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[instrument(skip(state), fields(id_patient = %id_patient))]
pub async fn get_patient_details(
    State(state): State<Arc<AppState>>,
    Path(id_patient): Path<i64>,
) -> Result<Json<PatientDetailsDTO>, AppError> {
    debug!("Fetching patient details");
    let patient = state.patient.read(&id_patient).await?.ok_or_else(|| {
        warn!("Patient not found");
        AppError::not_found("Patient not found")
    })?;

    let prescriptions = state
        .patient
        .find_prescriptions_by_patient(&id_patient)
        .await?;
    let medicaments = state
        .patient
        .find_medicaments_by_patient(&id_patient)
        .await?;

    // medicinali raggruppati per prescrizione
    let mut medicaments_by_prescription: HashMap<i64, Vec<MedicamentDTO>> = HashMap::new();
    for line in medicaments {
        medicaments_by_prescription
            .entry(line.entry.id_prescription)
            .or_default()
            .push(MedicamentDTO::new(line.medicament, line.entry));
    }

    let mut details = PatientDetailsDTO::from(patient);
    details.prescriptions = prescriptions
        .into_iter()
        .map(|row| {
            let id_prescription = row.prescription.id_prescription;
            let mut dto = PrescriptionDTO::new(row.prescription, row.doctor);
            dto.medicaments = medicaments_by_prescription
                .remove(&id_prescription)
                .unwrap_or_default();
            dto
        })
        .collect();

    info!(
        "Patient details assembled with {} prescriptions",
        details.prescriptions.len()
    );
    Ok(Json(details))
}
