use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

use crate::models::advertisement::NOT_FOUND_MESSAGE;
use crate::models::schema::FieldError;

/// Envelope shared by every error response: `{"status": "error", "description": ...}`.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Always `"error"`.
    #[schema(example = "error")]
    pub status: &'static str,
    pub description: ErrorDescription,
}

/// Either a plain message or the field-error list of a failed validation.
#[derive(Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum ErrorDescription {
    Message(String),
    Fields(Vec<FieldError>),
}

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0:?}")]
    Validation(Vec<FieldError>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn advertisement_not_found() -> Self {
        AppError::NotFound(NOT_FOUND_MESSAGE.into())
    }

    /// Turns a unique-constraint violation on `title` into a `Conflict`;
    /// anything else stays an internal error.
    pub fn from_title_write(err: DbErr, title: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!(%title, %detail, "Unique constraint violated on title");
                AppError::Conflict(format!("{title} already exists"))
            }
            _ => AppError::from(err),
        }
    }

    fn status_and_description(self) -> (StatusCode, ErrorDescription) {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, ErrorDescription::Fields(errors))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorDescription::Message(msg)),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorDescription::Message(msg)),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDescription::Message("internal server error".into()),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, description) = self.status_and_description();
        let body = ErrorBody {
            status: "error",
            description,
        };
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}
