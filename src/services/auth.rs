//! Auth services - Login con email e password, restituisce il token

use crate::core::{AppError, AppState, JsonBody, encode_jwt};
use crate::dtos::{LoginDTO, TokenDTO};
use crate::entities::UserProfile;
use axum::{
    extract::{Json, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Unable to log in with provided credentials.";

#[instrument(skip(state, body))]
pub async fn login_user(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare il DTO: username (email) e password obbligatori e non vuoti
    // 2. Cercare il profilo tramite email normalizzata
    // 3. Verificare la password contro l'hash bcrypt
    // 4. Credenziali errate o profilo inesistente -> 400 con non_field_errors
    // 5. Generare il token JWT e restituirlo nel body e nell'header Authorization
    body.validate()?;

    let email = UserProfile::normalize_email(body.username.as_deref().unwrap_or_default());
    let password = body.password.unwrap_or_default();

    let profile = match state.user_profile.find_by_email(&email).await? {
        Some(profile) if profile.verify_password(&password) => profile,
        _ => {
            warn!("Failed login attempt for {}", email);
            return Err(AppError::validation("non_field_errors", INVALID_CREDENTIALS));
        }
    };

    let token = encode_jwt(profile.email, profile.id, &state.jwt_secret)?;

    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| AppError::internal_server_error("Failed to build authorization header"))?;
    headers.insert(header::AUTHORIZATION, bearer);

    info!("Profile {} logged in", profile.id);
    Ok((StatusCode::OK, headers, Json(TokenDTO { token })))
}
