//! FeedItemRepository - Repository per la gestione degli stati del feed

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateFeedItemDTO, UpdateFeedItemDTO};
use crate::entities::ProfileFeedItem;
use sqlx::{Error, SqlitePool};

// FEED ITEM REPO
pub struct FeedItemRepository {
    connection_pool: SqlitePool,
}

impl FeedItemRepository {
    pub fn new(connection_pool: SqlitePool) -> Self {
        Self { connection_pool }
    }

    /// Get all feed items posted by a profile, ordered by id
    pub async fn find_many_by_profile_id(
        &self,
        user_profile_id: &i64,
    ) -> Result<Vec<ProfileFeedItem>, Error> {
        let items = sqlx::query_as::<_, ProfileFeedItem>(
            r#"
            SELECT id, user_profile_id, status_text, created_on
            FROM profile_feed_items
            WHERE user_profile_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_profile_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(items)
    }
}

impl Create<ProfileFeedItem, CreateFeedItemDTO> for FeedItemRepository {
    async fn create(&self, data: &CreateFeedItemDTO) -> Result<ProfileFeedItem, Error> {
        let item = sqlx::query_as::<_, ProfileFeedItem>(
            r#"
            INSERT INTO profile_feed_items (user_profile_id, status_text, created_on)
            VALUES (?, ?, ?)
            RETURNING id, user_profile_id, status_text, created_on
            "#,
        )
        .bind(data.user_profile_id)
        .bind(&data.status_text)
        .bind(data.created_on)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(item)
    }
}

impl Read<ProfileFeedItem, i64> for FeedItemRepository {
    async fn read(&self, id: &i64) -> Result<Option<ProfileFeedItem>, Error> {
        let item = sqlx::query_as::<_, ProfileFeedItem>(
            r#"
            SELECT id, user_profile_id, status_text, created_on
            FROM profile_feed_items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(item)
    }
}

impl ReadAll<ProfileFeedItem> for FeedItemRepository {
    async fn read_all(&self) -> Result<Vec<ProfileFeedItem>, Error> {
        let items = sqlx::query_as::<_, ProfileFeedItem>(
            r#"
            SELECT id, user_profile_id, status_text, created_on
            FROM profile_feed_items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(items)
    }
}

impl Update<ProfileFeedItem, UpdateFeedItemDTO, i64> for FeedItemRepository {
    async fn update(&self, id: &i64, data: &UpdateFeedItemDTO) -> Result<ProfileFeedItem, Error> {
        // First, get the current item to ensure it exists
        let current_item = self.read(id).await?.ok_or(Error::RowNotFound)?;

        // If no content to update, return current item
        let Some(status_text) = &data.status_text else {
            return Ok(current_item);
        };

        // created_on e proprietario non si modificano mai
        sqlx::query("UPDATE profile_feed_items SET status_text = ? WHERE id = ?")
            .bind(status_text)
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for FeedItemRepository {
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM profile_feed_items WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
