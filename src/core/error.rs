use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, warn};

const INVALID_BODY: &str = "Invalid request body";

/// Errori per campo: nome del campo -> lista di messaggi
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
    fields: Option<FieldErrors>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
            fields: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Aggiunge un messaggio di errore al campo indicato
    pub fn with_field_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .entry(field.to_string())
            .or_default()
            .push(message.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn fields(&self) -> Option<&FieldErrors> {
        self.fields.as_ref()
    }

    // Common error constructors
    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &'static str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: &'static str) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: &'static str) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Errore di validazione con un singolo campo, nello stesso formato del validator
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::bad_request("Validation error").with_field_error(field, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            sqlx::Error::Database(db_err) => {
                error!("Database error: {}", db_err);
                Self::bad_request("Database error")
            }

            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::service_unavailable("Database unavailable")
            }

            other => {
                error!("Unexpected sqlx error: {:?}", other);
                Self::internal_server_error("Internal server error")
            }
        }
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        Self::internal_server_error("Internal server error").with_details(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errors) in err.field_errors() {
            let messages = fields.entry(field.to_string()).or_default();
            for e in errors.iter() {
                let message = match &e.message {
                    Some(m) => m.to_string(),
                    None => e.code.to_string(),
                };
                messages.push(message);
            }
        }

        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation error",
            details: None,
            fields: Some(fields),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let text = rejection.body_text();
        warn!("Rejected request body: {}", text);

        let err = Self::bad_request(INVALID_BODY).with_details(text.clone());
        match &rejection {
            // tipo sbagliato su un campo di primo livello: errore su quel campo
            JsonRejection::JsonDataError(_) => match rejected_field(&text) {
                Some(field) => err.with_field_error(field, "Incorrect type."),
                None => err.with_field_error("non_field_errors", "Invalid data."),
            },
            JsonRejection::JsonSyntaxError(_) => {
                err.with_field_error("non_field_errors", "JSON parse error.")
            }
            JsonRejection::MissingJsonContentType(_) => err.with_field_error(
                "non_field_errors",
                "Unsupported media type: expected application/json.",
            ),
            _ => err.with_field_error("non_field_errors", "Unable to read request body."),
        }
    }
}

/// Nome del campo dal messaggio di serde, es.
/// `"...target type: status_text: invalid type: integer `5`..."` -> `status_text`
fn rejected_field(text: &str) -> Option<&str> {
    let (_, detail) = text.split_once("target type: ")?;
    let (path, _) = detail.split_once(": ")?;
    let simple = !path.is_empty() && path.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    simple.then_some(path)
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            error: self.message,
            details: self.details,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}
