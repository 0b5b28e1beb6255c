//! UserProfile entity - Profilo utente con metodi per gestione password

use bcrypt::{hash, verify};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// hash bcrypt, mai esposto al client
    #[serde(skip_serializing)]
    pub password: String,
}

impl UserProfile {
    /// Verify if target_password matches the stored hashed password
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hash a password using bcrypt with the given cost
    pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
        let hash = hash(password, cost)?;
        Ok(hash)
    }

    /// Normalizza un'email rendendo minuscolo il dominio.
    /// La parte locale resta invariata: alcuni provider la distinguono per maiuscole.
    pub fn normalize_email(email: &str) -> String {
        let email = email.trim();
        match email.rsplit_once('@') {
            Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
            None => email.to_string(),
        }
    }
}
