//! Trip DTOs - Data Transfer Objects per la lista dei viaggi

use crate::entities::{Client, Country, Trip};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Viaggio come restituito da `GET /api/trip`, con paesi e clienti iscritti
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TripDTO {
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i64,
    pub countries: Vec<CountryDTO>,
    pub clients: Vec<ClientDTO>,
}

impl From<Trip> for TripDTO {
    fn from(value: Trip) -> Self {
        Self {
            name: value.name,
            description: value.description,
            date_from: value.date_from,
            date_to: value.date_to,
            max_people: value.max_people,
            countries: Vec::new(), // da popolare con i paesi del viaggio
            clients: Vec::new(),   // da popolare con i clienti iscritti
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CountryDTO {
    pub name: String,
}

impl From<Country> for CountryDTO {
    fn from(value: Country) -> Self {
        Self { name: value.name }
    }
}

/// Solo nome e cognome: PESEL e id non vengono esposti nella lista
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClientDTO {
    pub first_name: String,
    pub last_name: Option<String>,
}

impl From<Client> for ClientDTO {
    fn from(value: Client) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}
