//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod feed_item;
pub mod user_profile;

// Re-exports per facilitare l'import
pub use feed_item::ProfileFeedItem;
pub use user_profile::UserProfile;
