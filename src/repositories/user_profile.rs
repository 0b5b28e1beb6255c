//! UserProfileRepository - Repository per la gestione dei profili utente

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreateProfileDTO, UpdateProfileDTO};
use crate::entities::UserProfile;
use sqlx::{Error, QueryBuilder, Sqlite, SqlitePool};

// USER PROFILE REPO
pub struct UserProfileRepository {
    connection_pool: SqlitePool,
}

impl UserProfileRepository {
    pub fn new(connection_pool: SqlitePool) -> UserProfileRepository {
        Self { connection_pool }
    }

    /// Email univoca: è l'identificativo usato al login
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, Error> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, email, name, password FROM user_profiles WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(profile)
    }

    /// Ricerca per termini: ogni termine deve comparire (senza distinzione
    /// di maiuscole) nel nome oppure nell'email. Nessun termine = tutti i profili.
    pub async fn search(&self, terms: &[String]) -> Result<Vec<UserProfile>, Error> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, email, name, password FROM user_profiles");

        for (i, term) in terms.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            let pattern = format!("%{}%", escape_like(term));
            builder
                .push("(name LIKE ")
                .push_bind(pattern.clone())
                .push(" ESCAPE '\\' OR email LIKE ")
                .push_bind(pattern)
                .push(" ESCAPE '\\')");
        }
        builder.push(" ORDER BY id ASC");

        let profiles = builder
            .build_query_as::<UserProfile>()
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(profiles)
    }
}

/// I caratteri jolly di LIKE vanno cercati letteralmente
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl Create<UserProfile, CreateProfileDTO> for UserProfileRepository {
    async fn create(&self, data: &CreateProfileDTO) -> Result<UserProfile, Error> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            INSERT INTO user_profiles (email, name, password)
            VALUES (?, ?, ?)
            RETURNING id, email, name, password
            "#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.password)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(profile)
    }
}

impl Read<UserProfile, i64> for UserProfileRepository {
    async fn read(&self, id: &i64) -> Result<Option<UserProfile>, Error> {
        let profile = sqlx::query_as::<_, UserProfile>(
            "SELECT id, email, name, password FROM user_profiles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(profile)
    }
}

impl ReadAll<UserProfile> for UserProfileRepository {
    async fn read_all(&self) -> Result<Vec<UserProfile>, Error> {
        self.search(&[]).await
    }
}

impl Update<UserProfile, UpdateProfileDTO, i64> for UserProfileRepository {
    async fn update(&self, id: &i64, data: &UpdateProfileDTO) -> Result<UserProfile, Error> {
        // COALESCE lascia invariati i campi non forniti
        sqlx::query_as::<_, UserProfile>(
            r#"
            UPDATE user_profiles
            SET email = COALESCE(?, email),
                name = COALESCE(?, name),
                password = COALESCE(?, password)
            WHERE id = ?
            RETURNING id, email, name, password
            "#,
        )
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.password)
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?
        .ok_or(Error::RowNotFound)
    }
}

/// Gli stati del profilo vengono cancellati dal vincolo ON DELETE CASCADE
impl Delete<i64> for UserProfileRepository {
    async fn delete(&self, id: &i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
