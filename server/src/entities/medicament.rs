//! Medicament entity and its join record with prescriptions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Medicament {
    pub id_medicament: i64,
    pub name: String,
}

/// Riga della tabella `prescription_medicament`: dose e indicazioni
/// di un medicinale all'interno di una prescrizione
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct PrescriptionMedicament {
    pub id_medicament: i64,
    pub id_prescription: i64,
    pub dose: Option<i64>,
    pub description: String,
}
