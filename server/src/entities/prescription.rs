//! Prescription entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Prescription {
    pub id_prescription: i64,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub id_patient: i64,
    pub id_doctor: i64,
}
