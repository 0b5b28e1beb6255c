//! Feed DTOs - Data Transfer Objects per gli stati del feed

use super::validators::{not_blank, trimmed};
use crate::entities::ProfileFeedItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Struct per gestire io col client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FeedItemDTO {
    pub id: i64,
    // id del profilo proprietario, sola lettura
    pub user_profile: i64,
    pub status_text: String,
    pub created_on: DateTime<Utc>,
}

impl From<ProfileFeedItem> for FeedItemDTO {
    fn from(value: ProfileFeedItem) -> Self {
        Self {
            id: value.id,
            user_profile: value.user_profile_id,
            status_text: value.status_text,
            created_on: value.created_on,
        }
    }
}

/// Corpo di POST e PUT. Un eventuale `user_profile` nel corpo viene ignorato.
#[derive(Deserialize, Debug, Clone, Validate)]
pub struct FeedItemRequestDTO {
    #[validate(
        required(message = "This field is required."),
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub status_text: Option<String>,
}

impl FeedItemRequestDTO {
    pub fn normalized(self) -> Self {
        Self {
            status_text: trimmed(self.status_text),
        }
    }
}

/// Corpo di PATCH
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct PatchFeedItemDTO {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Ensure this field has no more than 255 characters.")
    )]
    pub status_text: Option<String>,
}

impl PatchFeedItemDTO {
    pub fn normalized(self) -> Self {
        Self {
            status_text: trimmed(self.status_text),
        }
    }
}

impl From<FeedItemRequestDTO> for PatchFeedItemDTO {
    fn from(value: FeedItemRequestDTO) -> Self {
        Self {
            status_text: value.status_text,
        }
    }
}

/// DTO per creare un nuovo stato (senza id)
#[derive(Debug, Clone)]
pub struct CreateFeedItemDTO {
    pub user_profile_id: i64,
    pub status_text: String,
    pub created_on: DateTime<Utc>,
}

/// DTO per aggiornare uno stato (solo campi modificabili)
#[derive(Debug, Clone, Default)]
pub struct UpdateFeedItemDTO {
    pub status_text: Option<String>,
}

impl From<PatchFeedItemDTO> for UpdateFeedItemDTO {
    fn from(value: PatchFeedItemDTO) -> Self {
        Self {
            status_text: value.status_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::validators::MAX_255;

    #[test]
    fn status_text_over_255_chars_is_rejected() {
        let dto = FeedItemRequestDTO {
            status_text: Some("x".repeat(256)),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.field_errors()["status_text"][0].message.as_deref(),
            Some(MAX_255)
        );
    }

    #[test]
    fn feed_item_dto_exposes_owner_as_user_profile() {
        let created_on = Utc::now();
        let item = ProfileFeedItem {
            id: 7,
            user_profile_id: 2,
            status_text: "Ciao a tutti".to_string(),
            created_on,
        };
        let dto = FeedItemDTO::from(item);
        assert_eq!(dto.user_profile, 2);
        assert_eq!(dto.created_on, created_on);
    }
}
