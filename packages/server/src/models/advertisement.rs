use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::schema::{FieldError, ObjectFields, RequestSchema, field_errors};
use crate::entity::advertisement;

/// Message used for every "no such record" response.
pub const NOT_FOUND_MESSAGE: &str = "advertisement doesn't exist";

/// Timestamps are exposed to clients truncated to the hour.
const CREATION_DATE_FORMAT: &str = "%Y-%m-%dT%H";

#[derive(Debug, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct CreateAdvertisementRequest {
    #[schema(example = "Bicycle for sale")]
    pub title: String,
    #[schema(example = "Barely used, pick-up only")]
    pub description: String,
    #[schema(example = "alice")]
    pub owner: String,
}

impl RequestSchema for CreateAdvertisementRequest {
    fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let fields = ObjectFields::new(body)?;
        match (
            fields.required_str("title"),
            fields.required_str("description"),
            fields.required_str("owner"),
        ) {
            (Ok(title), Ok(description), Ok(owner)) => Ok(Self {
                title,
                description,
                owner,
            }),
            (title, description, owner) => Err(field_errors([
                title.err(),
                description.err(),
                owner.err(),
            ])),
        }
    }
}

/// PATCH payload. `None` means the field was absent (or `null`) and is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, utoipa::ToSchema)]
pub struct PatchAdvertisementRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

impl PatchAdvertisementRequest {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RequestSchema for PatchAdvertisementRequest {
    fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let fields = ObjectFields::new(body)?;
        match (
            fields.optional_str("title"),
            fields.optional_str("description"),
            fields.optional_str("owner"),
        ) {
            (Ok(title), Ok(description), Ok(owner)) => Ok(Self {
                title,
                description,
                owner,
            }),
            (title, description, owner) => Err(field_errors([
                title.err(),
                description.err(),
                owner.err(),
            ])),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: i32,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "successfully")]
    pub status: &'static str,
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self {
            status: "successfully",
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct AdvertisementResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Bicycle for sale")]
    pub title: String,
    #[schema(example = "Barely used, pick-up only")]
    pub description: String,
    #[schema(example = "alice")]
    pub owner: String,
    /// Creation time in UTC, hour precision.
    #[schema(example = "2024-05-01T14")]
    pub creation_date: String,
}

impl From<advertisement::Model> for AdvertisementResponse {
    fn from(m: advertisement::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            owner: m.owner,
            creation_date: format_creation_date(&m.creation_date),
        }
    }
}

pub fn format_creation_date(ts: &DateTime<Utc>) -> String {
    ts.format(CREATION_DATE_FORMAT).to_string()
}
