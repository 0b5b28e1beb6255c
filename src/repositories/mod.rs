//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.
//! Le query sono scritte con `sqlx::query_as` + `bind` e controllate a runtime,
//! così la compilazione non richiede un database raggiungibile.

// Dichiarazione dei sotto-moduli
pub mod feed_item;
pub mod traits;
pub mod user_profile;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, ReadAll, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use feed_item::FeedItemRepository;
pub use user_profile::UserProfileRepository;
