//! Client DTOs - Data Transfer Objects per l'iscrizione dei clienti

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body di `POST /api/trip/{id}/clients`
///
/// Missing fields deserialize as empty strings and are rejected by `validate`.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct AssignClientDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[serde(default, rename = "PESEL", alias = "pesel")]
    #[validate(length(min = 1, message = "PESEL must not be empty"))]
    pub pesel: String,
}

/// DTO per creare un nuovo cliente (senza id_client)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateClientDTO {
    pub first_name: String,
    pub last_name: Option<String>,
    pub pesel: String,
}

impl From<AssignClientDTO> for CreateClientDTO {
    // il nome visualizzato diventa il first_name, il cognome resta vuoto
    fn from(value: AssignClientDTO) -> Self {
        Self {
            first_name: value.name,
            last_name: None,
            pesel: value.pesel,
        }
    }
}
