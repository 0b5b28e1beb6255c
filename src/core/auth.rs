use crate::core::{AppError, AppState};
use crate::entities::UserProfile;
use crate::repositories::Read;
use axum::extract::State;
use axum::{Error, body::Body, extract::Request, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

// struct che codifica il contenuto del token jwt
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub id: i64,
    pub email: String,
}

/// Chiamante della richiesta corrente. Inserito nelle Extension da
/// `optional_authentication_middleware`: `None` se la richiesta è anonima.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<UserProfile>);

impl Caller {
    pub fn profile(&self) -> Option<&UserProfile> {
        self.0.as_ref()
    }
}

#[instrument(skip(secret), fields(email = %email, id = %id))]
pub fn encode_jwt(email: String, id: i64, secret: &str) -> Result<String, Error> {
    debug!("Encoding JWT token for profile");
    let now = Utc::now();
    let expire: chrono::TimeDelta = Duration::hours(24);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;
    let claim = Claims { iat, exp, email, id };

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map(|token| {
        info!("JWT token encoded successfully");
        token
    })
    .map_err(|e| {
        error!("Failed to encode JWT token: {:?}", e);
        Error::new("Error in encoding jwt token")
    })
}

#[instrument(skip(jwt_token, secret))]
pub fn decode_jwt(jwt_token: &str, secret: &str) -> Result<TokenData<Claims>, Error> {
    debug!("Decoding JWT token");
    decode::<Claims>(
        jwt_token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| {
        info!("JWT token decoded successfully for profile: {}", data.claims.id);
        data
    })
    .map_err(|e| {
        warn!("Failed to decode JWT token: {:?}", e);
        Error::new("Error in decoding jwt token")
    })
}

/// Estrae il token dall'header Authorization.
/// Schemi accettati: `Bearer <token>` e `Token <token>`.
pub fn extract_token(header_value: &str) -> Result<&str, AppError> {
    let mut parts = header_value.split_whitespace();
    let (scheme, token) = (parts.next(), parts.next());

    match (scheme, token, parts.next()) {
        (Some(scheme), Some(token), None)
            if scheme.eq_ignore_ascii_case("bearer") || scheme.eq_ignore_ascii_case("token") =>
        {
            Ok(token)
        }
        (Some(_), None, _) | (None, _, _) => Err(AppError::unauthorized(
            "Invalid token header. No credentials provided.",
        )),
        _ => Err(AppError::unauthorized("Invalid token header.")),
    }
}

/// Risolve il profilo a partire dal valore dell'header Authorization
async fn authenticate(state: &AppState, header_value: &str) -> Result<UserProfile, AppError> {
    let token = extract_token(header_value)?;

    let token_data = decode_jwt(token, &state.jwt_secret)
        .map_err(|_| AppError::unauthorized("Invalid token."))?;

    // il profilo potrebbe essere stato cancellato dopo l'emissione del token
    match state.user_profile.read(&token_data.claims.id).await? {
        Some(profile) => {
            info!("Profile authenticated: {}", profile.id);
            Ok(profile)
        }
        None => {
            warn!("Profile not found in database: {}", token_data.claims.id);
            Err(AppError::unauthorized("Invalid token."))
        }
    }
}

fn authorization_header(req: &Request) -> Result<Option<&str>, AppError> {
    match req.headers().get(http::header::AUTHORIZATION) {
        Some(header) => header.to_str().map(Some).map_err(|_| {
            warn!("Invalid authorization header format");
            AppError::unauthorized("Invalid token header.")
        }),
        None => Ok(None),
    }
}

/// Middleware per le rotte che richiedono autenticazione.
/// Inserisce il `UserProfile` autenticato nelle Extension della richiesta.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let header = match authorization_header(&req)? {
        Some(header) => header,
        None => {
            warn!("Missing authorization header");
            return Err(AppError::unauthorized(
                "Authentication credentials were not provided.",
            ));
        }
    };

    let profile = authenticate(&state, header).await?;
    req.extensions_mut().insert(profile);
    Ok(next.run(req).await)
}

/// Middleware per le rotte aperte anche agli anonimi.
/// Senza header la richiesta prosegue come anonima; un header presente ma
/// non valido viene comunque rifiutato con 401.
#[instrument(skip(state, req, next))]
pub async fn optional_authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running optional authentication middleware");
    let caller = match authorization_header(&req)? {
        Some(header) => Caller(Some(authenticate(&state, header).await?)),
        None => {
            debug!("Anonymous request");
            Caller(None)
        }
    };

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
