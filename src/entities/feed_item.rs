//! ProfileFeedItem entity - Stato pubblicato da un profilo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct ProfileFeedItem {
    pub id: i64,
    // proprietario, impostato dal server alla creazione
    pub user_profile_id: i64,
    pub status_text: String,
    pub created_on: DateTime<Utc>,
}

impl ProfileFeedItem {
    pub fn is_owned_by(&self, profile_id: i64) -> bool {
        self.user_profile_id == profile_id
    }
}
