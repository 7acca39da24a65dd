use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

pub const ADMIN_ACCESS_REQUIRED: &str = "Unauthorized: Admin access required.";
pub const OWNER_ACCESS_REQUIRED: &str = "Unauthorized: Owner access required.";
pub const TENANT_ACCESS_REQUIRED: &str = "Unauthorized: Tenant access required.";
pub const LOGIN_REQUIRED: &str = "Please login";
pub const DATABASE_NOT_AVAILABLE: &str = "Database not available";
pub const TENANT_PROFILE_NOT_FOUND: &str = "Tenant profile not found";
pub const CONTACT_SUBMIT_FAILED: &str = "Failed to submit contact form";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{}", DATABASE_NOT_AVAILABLE)]
    DatabaseUnavailable,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid input: {0}")]
    InvalidInput(ValidationErrors),
    #[error("{0}")]
    Failed(String),
    #[error("Internal server error")]
    Internal,
    #[error("Internal server error: {0}")]
    InternalWithMsg(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::DatabaseUnavailable => (StatusCode::SERVICE_UNAVAILABLE, DATABASE_NOT_AVAILABLE.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, LOGIN_REQUIRED.to_string()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidInput(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid input", "fields": field_messages(errors) })),
                ).into_response();
            }
            AppError::Failed(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
            AppError::InternalWithMsg(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

/// Flattens validator output into `{ field: [message, ...] }`.
pub fn field_messages(errors: &ValidationErrors) -> Value {
    let mut fields = Map::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(msg) => Value::String(msg.to_string()),
                None => Value::String(e.code.to_string()),
            })
            .collect();
        fields.insert(field.to_string(), Value::Array(messages));
    }
    Value::Object(fields)
}
