//! Doctor entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Doctor {
    pub id_doctor: i64,
    pub first_name: String,
    pub last_name: String,
}
