//! Profiles API library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(configure_hello_routes())
        .merge(configure_login_routes())
        .merge(configure_profile_routes(state.clone()))
        .merge(configure_feed_routes(state.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::not_found("Not found.")
}

/// Configura le routes dimostrative (nessuna autenticazione)
fn configure_hello_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route(
            "/hello-view/",
            get(hello_view_get)
                .post(hello_view_post)
                .put(hello_view_put)
                .patch(hello_view_patch)
                .delete(hello_view_delete),
        )
        .route(
            "/hello-viewset/",
            get(hello_viewset_list).post(hello_viewset_create),
        )
        .route(
            "/hello-viewset/{id}/",
            get(hello_viewset_retrieve)
                .put(hello_viewset_update)
                .patch(hello_viewset_partial_update)
                .delete(hello_viewset_destroy),
        )
}

/// Configura la route di login
fn configure_login_routes() -> Router<Arc<AppState>> {
    use services::*;
    Router::new().route("/login/", post(login_user))
}

/// Configura le routes dei profili: autenticazione facoltativa,
/// i permessi sugli oggetti vengono controllati negli handler
fn configure_profile_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::optional_authentication_middleware;
    use services::*;

    Router::new()
        .route("/profile/", get(list_profiles).post(create_profile))
        .route(
            "/profile/{profile_id}/",
            get(get_profile)
                .put(update_profile)
                .patch(partial_update_profile)
                .delete(delete_profile),
        )
        .layer(middleware::from_fn_with_state(
            state,
            optional_authentication_middleware,
        ))
}

/// Configura le routes del feed: autenticazione obbligatoria
fn configure_feed_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    Router::new()
        .route("/feed/", get(list_feed_items).post(create_feed_item))
        .route(
            "/feed/{item_id}/",
            get(get_feed_item)
                .put(update_feed_item)
                .patch(partial_update_feed_item)
                .delete(delete_feed_item),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ))
}
