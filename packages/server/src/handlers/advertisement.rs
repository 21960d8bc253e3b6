use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::advertisement;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AdvertisementId;
use crate::models::advertisement::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/advertisement/",
    tag = "Advertisements",
    operation_id = "createAdvertisement",
    summary = "Create an advertisement",
    description = "Creates a new advertisement. All fields are required and `title` must be unique. `id` and `creation_date` are assigned by the server. Responds with 200, not 201.",
    request_body = CreateAdvertisementRequest,
    responses(
        (status = 200, description = "Advertisement created", body = CreatedResponse),
        (status = 400, description = "Validation error (field-error list)", body = ErrorBody),
        (status = 409, description = "Title already taken", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_advertisement(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAdvertisementRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let txn = state.db.begin().await?;

    let new_ad = advertisement::ActiveModel {
        title: Set(payload.title.clone()),
        description: Set(payload.description),
        owner: Set(payload.owner),
        ..Default::default()
    };

    let model = new_ad
        .insert(&txn)
        .await
        .map_err(|e| AppError::from_title_write(e, &payload.title))?;
    txn.commit()
        .await
        .map_err(|e| AppError::from_title_write(e, &payload.title))?;

    tracing::info!(id = model.id, "Advertisement created");
    Ok(Json(CreatedResponse { id: model.id }))
}

#[utoipa::path(
    get,
    path = "/advertisement/{id}",
    tag = "Advertisements",
    operation_id = "getAdvertisement",
    summary = "Get an advertisement by ID",
    params(("id" = i32, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement details", body = AdvertisementResponse),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_advertisement(
    State(state): State<AppState>,
    AdvertisementId(id): AdvertisementId,
) -> Result<Json<AdvertisementResponse>, AppError> {
    let model = find_advertisement(&state.db, id).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    patch,
    path = "/advertisement/{id}",
    tag = "Advertisements",
    operation_id = "updateAdvertisement",
    summary = "Update an advertisement",
    description = "Partially updates an advertisement. Only the provided fields are modified; absent or null fields keep their value. An empty payload returns the current record unchanged.",
    params(("id" = i32, Path, description = "Advertisement ID")),
    request_body = PatchAdvertisementRequest,
    responses(
        (status = 200, description = "Advertisement updated", body = AdvertisementResponse),
        (status = 400, description = "Validation error (field-error list)", body = ErrorBody),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
        (status = 409, description = "Title already taken", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_advertisement(
    State(state): State<AppState>,
    AdvertisementId(id): AdvertisementId,
    AppJson(payload): AppJson<PatchAdvertisementRequest>,
) -> Result<Json<AdvertisementResponse>, AppError> {
    if payload.is_empty() {
        let existing = find_advertisement(&state.db, id).await?;
        return Ok(Json(existing.into()));
    }

    let txn = state.db.begin().await?;

    // Write before reading: a transaction that reads first cannot upgrade its
    // lock on SQLite once another writer holds it.
    let changes = advertisement::ActiveModel {
        title: payload.title.clone().map_or(NotSet, Set),
        description: payload.description.map_or(NotSet, Set),
        owner: payload.owner.map_or(NotSet, Set),
        ..Default::default()
    };

    // Only `title` is unique, so a violation always involves the new title.
    let title = payload.title.unwrap_or_default();
    let updated = advertisement::Entity::update_many()
        .set(changes)
        .filter(advertisement::Column::Id.eq(id))
        .exec(&txn)
        .await
        .map_err(|e| AppError::from_title_write(e, &title))?;
    if updated.rows_affected == 0 {
        return Err(AppError::advertisement_not_found());
    }

    let model = find_advertisement(&txn, id).await?;
    txn.commit()
        .await
        .map_err(|e| AppError::from_title_write(e, &title))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/advertisement/{id}",
    tag = "Advertisements",
    operation_id = "deleteAdvertisement",
    summary = "Delete an advertisement",
    params(("id" = i32, Path, description = "Advertisement ID")),
    responses(
        (status = 200, description = "Advertisement deleted", body = DeletedResponse),
        (status = 404, description = "Advertisement not found", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_advertisement(
    State(state): State<AppState>,
    AdvertisementId(id): AdvertisementId,
) -> Result<Json<DeletedResponse>, AppError> {
    let txn = state.db.begin().await?;

    let deleted = advertisement::Entity::delete_by_id(id).exec(&txn).await?;
    if deleted.rows_affected == 0 {
        return Err(AppError::advertisement_not_found());
    }

    txn.commit().await?;
    tracing::info!("Advertisement deleted");
    Ok(Json(DeletedResponse::default()))
}

async fn find_advertisement<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<advertisement::Model, AppError> {
    advertisement::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| {
            tracing::debug!("Advertisement not found");
            AppError::advertisement_not_found()
        })
}
