//! Hello services - endpoint dimostrativi, nessuna persistenza
//!
//! `/hello-view/` mostra lo stile "una funzione per metodo HTTP",
//! `/hello-viewset/` lo stile a risorsa con azioni list/create/retrieve/update/destroy.

use crate::core::{AppError, JsonBody};
use crate::dtos::HelloDTO;
use axum::extract::{Json, Path};
use serde_json::{Value, json};
use tracing::{debug, instrument};
use validator::Validate;

const AN_APIVIEW: [&str; 4] = [
    "Uses HTTP methods as function (get, post, patch, put, delete)",
    "It is similar to a traditional Django view",
    "Gives you the most control over your logic",
    "is mapped manually to URLs",
];

const A_VIEWSET: [&str; 3] = [
    "Uses actions(list, create, retrieve, update, partial_update)",
    "Automatically maps to URLs using routers",
    "Provides more functionalities with less code",
];

/// Valida il nome e costruisce il saluto
fn greet(body: HelloDTO) -> Result<Json<Value>, AppError> {
    let body = body.normalized();
    body.validate()?;

    let name = body.name.unwrap_or_default();
    debug!("Greeting {}", name);
    Ok(Json(json!({ "message": format!("Hello {}", name) })))
}

// ************************* HELLO VIEW ************************* //

pub async fn hello_view_get() -> Json<Value> {
    Json(json!({ "message": "Hello", "an_apiview": AN_APIVIEW }))
}

#[instrument(skip(body))]
pub async fn hello_view_post(
    JsonBody(body): JsonBody<HelloDTO>,
) -> Result<Json<Value>, AppError> {
    greet(body)
}

pub async fn hello_view_put() -> Json<Value> {
    Json(json!({ "method": "put" }))
}

pub async fn hello_view_patch() -> Json<Value> {
    Json(json!({ "method": "patch" }))
}

pub async fn hello_view_delete() -> Json<Value> {
    Json(json!({ "method": "delete" }))
}

// ************************* HELLO VIEWSET ************************* //

pub async fn hello_viewset_list() -> Json<Value> {
    Json(json!({ "message": "hello!", "a_viewset": A_VIEWSET }))
}

#[instrument(skip(body))]
pub async fn hello_viewset_create(
    JsonBody(body): JsonBody<HelloDTO>,
) -> Result<Json<Value>, AppError> {
    greet(body)
}

// attenzione: "http method" con lo spazio, a differenza delle altre azioni
pub async fn hello_viewset_retrieve(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "http method": "GET" }))
}

pub async fn hello_viewset_update(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "http_method": "PUT" }))
}

pub async fn hello_viewset_partial_update(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "http_method": "PATCH" }))
}

pub async fn hello_viewset_destroy(Path(_id): Path<String>) -> Json<Value> {
    Json(json!({ "http_method": "DELETE" }))
}
