//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod feed;
pub mod hello;
pub mod profile;

// Re-exports per facilitare l'import
pub use auth::login_user;
pub use feed::{
    create_feed_item, delete_feed_item, get_feed_item, list_feed_items, partial_update_feed_item,
    update_feed_item,
};
pub use hello::{
    hello_view_delete, hello_view_get, hello_view_patch, hello_view_post, hello_view_put,
    hello_viewset_create, hello_viewset_destroy, hello_viewset_list,
    hello_viewset_partial_update, hello_viewset_retrieve, hello_viewset_update,
};
pub use profile::{
    create_profile, delete_profile, get_profile, list_profiles, partial_update_profile,
    update_profile,
};

use crate::AppState;
use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

/// Root endpoint - indice delle risorse esposte
pub async fn root(State(_state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "hello-view": "/hello-view/",
        "hello-viewset": "/hello-viewset/",
        "profile": "/profile/",
        "login": "/login/",
        "feed": "/feed/",
    }))
}
