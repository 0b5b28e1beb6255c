//! Profile DTOs - Data Transfer Objects per i profili utente

use super::validators::{not_blank, trimmed};
use crate::entities::UserProfile;
use serde::{Deserialize, Serialize};
use validator::Validate;

// struct per gestire io col client, la password non viene mai restituita
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileDTO {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<UserProfile> for ProfileDTO {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id,
            email: value.email,
            name: value.name,
        }
    }
}

/// Corpo di POST e PUT: tutti i campi sono obbligatori
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct ProfileRequestDTO {
    #[validate(
        required(message = "This field is required."),
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub password: Option<String>,
}

impl ProfileRequestDTO {
    /// Normalizza email e nome prima della validazione. La password resta com'è.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.map(|e| UserProfile::normalize_email(&e)),
            name: trimmed(self.name),
            password: self.password,
        }
    }

    /// Converte il corpo già validato nel DTO di creazione del repository
    pub fn into_create(self, password_hash: String) -> CreateProfileDTO {
        CreateProfileDTO {
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            password: password_hash,
        }
    }
}

/// Corpo di PATCH: si modificano solo i campi presenti
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct PatchProfileDTO {
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub password: Option<String>,
}

impl PatchProfileDTO {
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.map(|e| UserProfile::normalize_email(&e)),
            name: trimmed(self.name),
            password: self.password,
        }
    }
}

impl From<ProfileRequestDTO> for PatchProfileDTO {
    fn from(value: ProfileRequestDTO) -> Self {
        Self {
            email: value.email,
            name: value.name,
            password: value.password,
        }
    }
}

/// DTO per creare un nuovo profilo (senza id, password già hashata)
#[derive(Debug, Clone)]
pub struct CreateProfileDTO {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// DTO per aggiornare un profilo (solo i campi `Some` vengono modificati, password già hashata)
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDTO {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}
