//! Client entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Client {
    pub id_client: i64,
    pub first_name: String,
    // clients registered through the assignment endpoint only carry a first name
    pub last_name: Option<String>,
    /// National identifier, unique per client
    pub pesel: String,
}
