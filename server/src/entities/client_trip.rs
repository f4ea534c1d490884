//! ClientTrip entity - registration of a client on a trip

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Join record between [`Client`](super::Client) and [`Trip`](super::Trip).
/// The pair `(id_client, id_trip)` is the primary key.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct ClientTrip {
    pub id_client: i64,
    pub id_trip: i64,
    pub registered_at: DateTime<Utc>,
}
