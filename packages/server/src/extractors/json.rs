use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::error::AppError;
use crate::models::schema::{FieldError, RequestSchema};

/// Reads the body as JSON and validates it against `T`, turning both
/// decode failures and schema violations into `AppError::Validation`.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: RequestSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(vec![FieldError::undecodable_body(e.body_text())]))?;
        T::from_json(&value).map(AppJson).map_err(AppError::Validation)
    }
}
