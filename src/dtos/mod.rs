//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod auth;
pub mod feed_item;
pub mod hello;
pub mod profile;
pub mod query;
pub mod validators;

// Re-exports per facilitare l'import
pub use auth::{LoginDTO, TokenDTO};
pub use feed_item::{
    CreateFeedItemDTO, FeedItemDTO, FeedItemRequestDTO, PatchFeedItemDTO, UpdateFeedItemDTO,
};
pub use hello::HelloDTO;
pub use profile::{
    CreateProfileDTO, PatchProfileDTO, ProfileDTO, ProfileRequestDTO, UpdateProfileDTO,
};
pub use query::ProfileSearchQuery;
