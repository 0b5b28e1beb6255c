//! Application State - Stato globale dell'applicazione
//!
//! Contiene tutti i repository e le configurazioni condivise
//! necessarie per gestire l'applicazione.

use crate::repositories::{FeedItemRepository, UserProfileRepository};
use sqlx::SqlitePool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione dei profili
    pub user_profile: UserProfileRepository,

    /// Repository per la gestione degli stati del feed
    pub feed: FeedItemRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,

    /// Costo bcrypt usato per hashare le password
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni SQLite condiviso
    /// * `jwt_secret` - Chiave segreta per la firma dei token JWT
    /// * `bcrypt_cost` - Costo bcrypt per le nuove password
    pub fn new(pool: SqlitePool, jwt_secret: String, bcrypt_cost: u32) -> Self {
        Self {
            user_profile: UserProfileRepository::new(pool.clone()),
            feed: FeedItemRepository::new(pool),
            jwt_secret,
            bcrypt_cost,
        }
    }
}
