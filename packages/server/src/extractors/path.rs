use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// The `{id}` path segment of an advertisement route.
///
/// Only positive integers match; anything else is answered as a missing
/// record, the same way an integer route converter would fail to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisementId(pub i32);

impl AdvertisementId {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i32>().ok().filter(|id| *id > 0).map(Self)
    }
}

impl<S> FromRequestParts<S> for AdvertisementId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::advertisement_not_found())?;
        Self::parse(&raw).ok_or_else(AppError::advertisement_not_found)
    }
}
