#![allow(dead_code)]

use axum::http::HeaderValue;
use axum_test::TestServer;
use profiles_api::core::{AppState, database};
use serde_json::{Value, json};
use std::sync::Arc;

pub const JWT_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// Crea un AppState per i test su un database SQLite in memoria
///
/// Ogni chiamata produce un database nuovo con le migrations applicate.
/// Il costo bcrypt è il minimo per non rallentare i test.
pub async fn create_test_state() -> Arc<AppState> {
    let pool = database::connect("sqlite::memory:", 1, None)
        .await
        .expect("Failed to open in-memory database");
    database::migrate(&pool)
        .await
        .expect("Failed to run migrations");
    Arc::new(AppState::new(pool, JWT_SECRET.to_string(), 4))
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = profiles_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Scorciatoia: stato nuovo + server
pub async fn setup() -> (Arc<AppState>, TestServer) {
    let state = create_test_state().await;
    let server = create_test_server(state.clone());
    (state, server)
}

/// Genera un JWT token per testing
///
/// # Arguments
/// * `profile_id` - ID del profilo per cui generare il token
/// * `email` - Email del profilo
/// * `jwt_secret` - Secret key per firmare il token
/// * `valid_for_hours` - Validità in ore (negativa per un token già scaduto)
pub fn create_test_jwt(profile_id: i64, email: &str, jwt_secret: &str, valid_for_hours: i64) -> String {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Claims {
        id: i64,
        email: String,
        exp: usize,
        iat: usize,
    }

    let now = Utc::now();
    let claims = Claims {
        id: profile_id,
        email: email.to_string(),
        exp: (now + Duration::hours(valid_for_hours)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Failed to create JWT token")
}

/// Valore dell'header Authorization per `add_header`
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
}

/// Registra un profilo tramite POST /profile/ e ne restituisce l'id
pub async fn register_profile(server: &TestServer, email: &str, name: &str, password: &str) -> i64 {
    let response = server
        .post("/profile/")
        .json(&json!({ "email": email, "name": name, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_i64()
        .expect("profile id in response")
}

/// Esegue il login e restituisce il token
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login/")
        .json(&json!({ "username": email, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["token"]
        .as_str()
        .expect("token in response")
        .to_string()
}

/// Registra e autentica un profilo: restituisce (id, token)
pub async fn signed_up(server: &TestServer, email: &str, name: &str) -> (i64, String) {
    let id = register_profile(server, email, name, "Password123").await;
    let token = login(server, email, "Password123").await;
    (id, token)
}
