//! Feed services - CRUD sugli stati pubblicati dai profili
//!
//! Tutte le rotte richiedono autenticazione. Ogni profilo autenticato può
//! leggere tutti gli stati, ma può modificare o cancellare solo i propri.

use crate::core::{AppError, AppState, JsonBody, permissions::post_own_status, read_json};
use crate::dtos::{
    CreateFeedItemDTO, FeedItemDTO, FeedItemRequestDTO, PatchFeedItemDTO, UpdateFeedItemDTO,
};
use crate::entities::{ProfileFeedItem, UserProfile};
use crate::repositories::{Create, Delete, Read, ReadAll, Update};
use axum::{
    Extension,
    extract::{Json, Path, Request, State},
    http::{Method, StatusCode},
};
use axum_macros::debug_handler;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Carica lo stato o risponde 404
async fn load_item(state: &AppState, item_id: i64) -> Result<ProfileFeedItem, AppError> {
    state.feed.read(&item_id).await?.ok_or_else(|| {
        warn!("Feed item {} not found", item_id);
        AppError::not_found("Not found.")
    })
}

#[instrument(skip(state, current_user), fields(profile_id = %current_user.id))]
pub async fn list_feed_items(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserProfile>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<Vec<FeedItemDTO>>, AppError> {
    debug!("Listing feed items");
    let items = state.feed.read_all().await?;
    info!("Retrieved {} feed items", items.len());
    Ok(Json(items.into_iter().map(FeedItemDTO::from).collect()))
}

#[debug_handler]
#[instrument(skip(state, current_user, body), fields(profile_id = %current_user.id))]
pub async fn create_feed_item(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserProfile>,
    JsonBody(body): JsonBody<FeedItemRequestDTO>,
) -> Result<(StatusCode, Json<FeedItemDTO>), AppError> {
    // 1. Validare lo stato
    // 2. Il proprietario è sempre il profilo autenticato, qualunque cosa dica il body
    // 3. created_on viene impostato dal server
    let body = body.normalized();
    body.validate()?;

    let new_item = CreateFeedItemDTO {
        user_profile_id: current_user.id,
        status_text: body.status_text.unwrap_or_default(),
        created_on: Utc::now(),
    };
    let item = state.feed.create(&new_item).await?;

    info!("Feed item {} created", item.id);
    Ok((StatusCode::CREATED, Json(FeedItemDTO::from(item))))
}

#[instrument(skip(state, current_user), fields(profile_id = %current_user.id))]
pub async fn get_feed_item(
    State(state): State<Arc<AppState>>,
    Extension(current_user): Extension<UserProfile>,
    Path(item_id): Path<i64>,
) -> Result<Json<FeedItemDTO>, AppError> {
    let item = load_item(&state, item_id).await?;
    Ok(Json(FeedItemDTO::from(item)))
}

async fn apply_update(
    state: &AppState,
    item_id: i64,
    changes: PatchFeedItemDTO,
) -> Result<ProfileFeedItem, AppError> {
    let update = UpdateFeedItemDTO::from(changes);
    Ok(state.feed.update(&item_id, &update).await?)
}

#[instrument(skip(state, current_user, req), fields(profile_id = %current_user.id))]
pub async fn update_feed_item(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(current_user): Extension<UserProfile>,
    Path(item_id): Path<i64>,
    req: Request,
) -> Result<Json<FeedItemDTO>, AppError> {
    let item = load_item(&state, item_id).await?;
    post_own_status(&method, Some(&current_user), &item)?;

    let body: FeedItemRequestDTO = read_json(req).await?;
    let body = body.normalized();
    body.validate()?;

    let updated = apply_update(&state, item_id, PatchFeedItemDTO::from(body)).await?;
    info!("Feed item {} replaced", item_id);
    Ok(Json(FeedItemDTO::from(updated)))
}

#[instrument(skip(state, current_user, req), fields(profile_id = %current_user.id))]
pub async fn partial_update_feed_item(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(current_user): Extension<UserProfile>,
    Path(item_id): Path<i64>,
    req: Request,
) -> Result<Json<FeedItemDTO>, AppError> {
    let item = load_item(&state, item_id).await?;
    post_own_status(&method, Some(&current_user), &item)?;

    let body: PatchFeedItemDTO = read_json(req).await?;
    let body = body.normalized();
    body.validate()?;

    let updated = apply_update(&state, item_id, body).await?;
    info!("Feed item {} updated", item_id);
    Ok(Json(FeedItemDTO::from(updated)))
}

#[instrument(skip(state, current_user), fields(profile_id = %current_user.id))]
pub async fn delete_feed_item(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(current_user): Extension<UserProfile>,
    Path(item_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let item = load_item(&state, item_id).await?;
    post_own_status(&method, Some(&current_user), &item)?;

    if !state.feed.delete(&item_id).await? {
        return Err(AppError::not_found("Not found."));
    }

    info!("Feed item {} deleted", item_id);
    Ok(StatusCode::NO_CONTENT)
}
