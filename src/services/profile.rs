//! Profile services - CRUD sui profili utente
//!
//! Lettura e creazione sono aperte anche agli anonimi (la creazione è la
//! registrazione). Modifica e cancellazione sono consentite solo sul proprio profilo.

use crate::core::{
    AppError, AppState, Caller, JsonBody, permissions::update_own_profile, read_json,
};
use crate::dtos::{
    PatchProfileDTO, ProfileDTO, ProfileRequestDTO, ProfileSearchQuery, UpdateProfileDTO,
};
use crate::entities::UserProfile;
use crate::repositories::{Create, Delete, Read, Update};
use axum::{
    Extension,
    extract::{Json, Path, Query, Request, State},
    http::{Method, StatusCode},
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

const EMAIL_TAKEN: &str = "user profile with this email already exists.";

fn hash_password(state: &AppState, password: &str) -> Result<String, AppError> {
    UserProfile::hash_password(password, state.bcrypt_cost).map_err(|e| {
        error!("Failed to hash password: {:?}", e);
        AppError::internal_server_error("Failed to hash password")
    })
}

/// Carica il profilo o risponde 404
async fn load_profile(state: &AppState, profile_id: i64) -> Result<UserProfile, AppError> {
    state.user_profile.read(&profile_id).await?.ok_or_else(|| {
        warn!("Profile {} not found", profile_id);
        AppError::not_found("Not found.")
    })
}

/// L'email deve restare univoca; `owner_id` esclude il profilo che si sta modificando
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    owner_id: Option<i64>,
) -> Result<(), AppError> {
    match state.user_profile.find_by_email(email).await? {
        Some(existing) if Some(existing.id) != owner_id => {
            warn!("Email {} already in use by profile {}", email, existing.id);
            Err(AppError::validation("email", EMAIL_TAKEN))
        }
        _ => Ok(()),
    }
}

/// Applica una modifica già validata: controlla l'email e hasha la password
async fn apply_changes(
    state: &AppState,
    profile_id: i64,
    changes: PatchProfileDTO,
) -> Result<UserProfile, AppError> {
    if let Some(email) = &changes.email {
        ensure_email_available(state, email, Some(profile_id)).await?;
    }

    let password = match &changes.password {
        Some(raw) => Some(hash_password(state, raw)?),
        None => None,
    };

    let update = UpdateProfileDTO {
        email: changes.email,
        name: changes.name,
        password,
    };

    Ok(state.user_profile.update(&profile_id, &update).await?)
}

#[instrument(skip(state), fields(search = ?params.search))]
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProfileSearchQuery>, // /profile/?search=mario rossi
) -> Result<Json<Vec<ProfileDTO>>, AppError> {
    debug!("Listing profiles");
    let profiles = state.user_profile.search(&params.terms()).await?;
    info!("Found {} profiles", profiles.len());
    Ok(Json(profiles.into_iter().map(ProfileDTO::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<ProfileRequestDTO>,
) -> Result<(StatusCode, Json<ProfileDTO>), AppError> {
    // 1. Normalizzare e validare il DTO (email, nome e password obbligatori)
    // 2. Rifiutare un'email già registrata con errore sul campo email
    // 3. Hashare la password e salvare il profilo
    let body = body.normalized();
    body.validate()?;

    let email = body.email.as_deref().unwrap_or_default();
    ensure_email_available(&state, email, None).await?;

    let password_hash = hash_password(&state, body.password.as_deref().unwrap_or_default())?;
    let created = state
        .user_profile
        .create(&body.into_create(password_hash))
        .await?;

    info!("Profile {} created", created.id);
    Ok((StatusCode::CREATED, Json(ProfileDTO::from(created))))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<i64>,
) -> Result<Json<ProfileDTO>, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    Ok(Json(ProfileDTO::from(profile)))
}

#[instrument(skip(state, caller, req))]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(caller): Extension<Caller>, // ottenuto da optional_authentication_middleware
    Path(profile_id): Path<i64>,
    req: Request, // body letto solo dopo il controllo sul proprietario
) -> Result<Json<ProfileDTO>, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    update_own_profile(&method, caller.profile(), &profile)?;

    let body: ProfileRequestDTO = read_json(req).await?;
    let body = body.normalized();
    body.validate()?;

    let updated = apply_changes(&state, profile_id, PatchProfileDTO::from(body)).await?;
    info!("Profile {} replaced", profile_id);
    Ok(Json(ProfileDTO::from(updated)))
}

#[instrument(skip(state, caller, req))]
pub async fn partial_update_profile(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(caller): Extension<Caller>,
    Path(profile_id): Path<i64>,
    req: Request,
) -> Result<Json<ProfileDTO>, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    update_own_profile(&method, caller.profile(), &profile)?;

    let body: PatchProfileDTO = read_json(req).await?;
    let body = body.normalized();
    body.validate()?;

    let updated = apply_changes(&state, profile_id, body).await?;
    info!("Profile {} updated", profile_id);
    Ok(Json(ProfileDTO::from(updated)))
}

#[instrument(skip(state, caller))]
pub async fn delete_profile(
    State(state): State<Arc<AppState>>,
    method: Method,
    Extension(caller): Extension<Caller>,
    Path(profile_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let profile = load_profile(&state, profile_id).await?;
    update_own_profile(&method, caller.profile(), &profile)?;

    // gli stati del profilo vengono rimossi in cascata
    if !state.user_profile.delete(&profile_id).await? {
        return Err(AppError::not_found("Not found."));
    }

    info!("Profile {} deleted", profile_id);
    Ok(StatusCode::NO_CONTENT)
}
