//! Country entity - referenced by trips through the `country_trip` join table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Country {
    pub id_country: i64,
    pub name: String,
}
