//! Hello DTOs - corpo delle richieste degli endpoint dimostrativi

use super::validators::{not_blank, trimmed};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct HelloDTO {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 10, message = "Ensure this field has no more than 10 characters.")
    )]
    pub name: Option<String>,
}

impl HelloDTO {
    pub fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
        }
    }
}
