//! Core Module - Componenti infrastrutturali dell'applicazione
//!
//! Questo modulo contiene tutti i componenti "core" dell'applicazione:
//! - Autenticazione e JWT
//! - Permessi sugli oggetti
//! - Configurazione e database
//! - Gestione errori ed estrazione del body
//! - Stato applicazione

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod extract;
pub mod permissions;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::{
    Caller, Claims, authentication_middleware, decode_jwt, encode_jwt,
    optional_authentication_middleware,
};
pub use config::Config;
pub use error::AppError;
pub use extract::{JsonBody, read_json};
pub use state::AppState;
