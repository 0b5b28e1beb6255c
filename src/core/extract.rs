//! Estrattori del body JSON
//!
//! Un body illeggibile (tipo sbagliato, JSON malformato, Content-Type
//! mancante) risponde 400 nel formato di `AppError` invece che con il
//! testo di axum.

use crate::core::AppError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// Come `axum::Json`, con i rifiuti convertiti in `AppError`
#[derive(axum_macros::FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Legge il body da una richiesta già passata per i controlli di permesso.
/// Le rotte di modifica lo chiamano dopo aver caricato l'oggetto e verificato
/// il proprietario: 404/401/403 precedono sempre gli errori sul body.
pub async fn read_json<T: DeserializeOwned>(req: Request) -> Result<T, AppError> {
    let JsonBody(body) = JsonBody::<T>::from_request(req, &()).await?;
    Ok(body)
}
