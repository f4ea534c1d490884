//! PatientRepository - Repository per pazienti, prescrizioni e medicinali

use super::Read;
use crate::entities::{Doctor, Medicament, Patient, Prescription, PrescriptionMedicament};
use sqlx::{Error, FromRow, SqlitePool};
use tracing::{debug, instrument};

/// Prescrizione con il medico che l'ha emessa
#[derive(Debug, Clone, FromRow)]
pub struct PrescriptionWithDoctor {
    #[sqlx(flatten)]
    pub prescription: Prescription,
    #[sqlx(flatten)]
    pub doctor: Doctor,
}

/// Medicinale con dose e indicazioni all'interno di una prescrizione
#[derive(Debug, Clone, FromRow)]
pub struct PrescribedMedicament {
    #[sqlx(flatten)]
    pub medicament: Medicament,
    #[sqlx(flatten)]
    pub entry: PrescriptionMedicament,
}

// PATIENT REPOSITORY
pub struct PatientRepository {
    connection_pool: SqlitePool,
}

impl PatientRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get the prescriptions of a patient, earliest due date first
    #[instrument(skip(self), fields(id_patient = %id_patient))]
    pub async fn find_prescriptions_by_patient(
        &self,
        id_patient: &i64,
    ) -> Result<Vec<PrescriptionWithDoctor>, Error> {
        let prescriptions = sqlx::query_as::<_, PrescriptionWithDoctor>(
            r#"
            SELECT
                p.id_prescription,
                p.date,
                p.due_date,
                p.id_patient,
                p.id_doctor,
                d.first_name,
                d.last_name
            FROM prescription p
            INNER JOIN doctor d ON d.id_doctor = p.id_doctor
            WHERE p.id_patient = ?
            ORDER BY p.due_date ASC, p.id_prescription ASC
            "#,
        )
        .bind(*id_patient)
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Found {} prescriptions", prescriptions.len());
        Ok(prescriptions)
    }

    /// Get every medicament prescribed to a patient, across all prescriptions
    #[instrument(skip(self), fields(id_patient = %id_patient))]
    pub async fn find_medicaments_by_patient(
        &self,
        id_patient: &i64,
    ) -> Result<Vec<PrescribedMedicament>, Error> {
        let medicaments = sqlx::query_as::<_, PrescribedMedicament>(
            r#"
            SELECT
                m.id_medicament,
                m.name,
                pm.id_prescription,
                pm.dose,
                pm.description
            FROM prescription_medicament pm
            INNER JOIN medicament m ON m.id_medicament = pm.id_medicament
            INNER JOIN prescription p ON p.id_prescription = pm.id_prescription
            WHERE p.id_patient = ?
            ORDER BY pm.id_prescription, m.id_medicament
            "#,
        )
        .bind(*id_patient)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(medicaments)
    }
}

impl Read<Patient, i64> for PatientRepository {
    #[instrument(skip(self), fields(id_patient = %id))]
    async fn read(&self, id: &i64) -> Result<Option<Patient>, Error> {
        debug!("Reading patient by id");
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id_patient, first_name, last_name
            FROM patient
            WHERE id_patient = ?
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(patient)
    }
}
