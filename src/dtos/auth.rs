//! Auth DTOs - credenziali di login e token restituito

use super::validators::not_blank;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// DTO per il login. Il campo si chiama `username` ma contiene l'email del profilo.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct LoginDTO {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank")
    )]
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenDTO {
    pub token: String,
}
