//! Patient DTOs - Dettaglio paziente con prescrizioni, medico e medicinali

use crate::entities::{Doctor, Medicament, Patient, Prescription, PrescriptionMedicament};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetailsDTO {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Ordered by due date, earliest first
    pub prescriptions: Vec<PrescriptionDTO>,
}

impl From<Patient> for PatientDetailsDTO {
    fn from(value: Patient) -> Self {
        Self {
            id: value.id_patient,
            first_name: value.first_name,
            last_name: value.last_name,
            prescriptions: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionDTO {
    pub id: i64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub doctor: DoctorDTO,
    pub medicaments: Vec<MedicamentDTO>,
}

impl PrescriptionDTO {
    pub fn new(prescription: Prescription, doctor: Doctor) -> Self {
        Self {
            id: prescription.id_prescription,
            date: prescription.date,
            due_date: prescription.due_date,
            doctor: doctor.into(),
            medicaments: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDTO {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl From<Doctor> for DoctorDTO {
    fn from(value: Doctor) -> Self {
        Self {
            id: value.id_doctor,
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MedicamentDTO {
    pub id: i64,
    pub name: String,
    pub dose: Option<i64>,
    pub description: String,
}

impl MedicamentDTO {
    pub fn new(medicament: Medicament, entry: PrescriptionMedicament) -> Self {
        Self {
            id: medicament.id_medicament,
            name: medicament.name,
            dose: entry.dose,
            description: entry.description,
        }
    }
}
