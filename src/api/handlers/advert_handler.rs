//! Advert handlers.

use axum::{
    extract::Path,
    response::Json,
    routing::{get, post},
    Router,
};
use sea_orm::ActiveValue::Set;

use super::record_id;
use crate::api::extractors::ValidatedJson;
use crate::api::schemas::{CreateAdvert, UpdateAdvert};
use crate::api::AppState;
use crate::domain::Advert;
use crate::errors::{AppError, AppResult, OptionExt, Resource};
use crate::infra::entities::{AdvertActiveModel, AdvertEntity};
use crate::infra::Session;
use crate::types::{IdResponse, StatusResponse};

/// Create advert routes
pub fn advert_routes() -> Router<AppState> {
    Router::new()
        .route("/adv/", post(create_advert))
        .route(
            "/adv/:id/",
            get(get_advert).patch(update_advert).delete(delete_advert),
        )
}

async fn load_advert(session: &Session, id: i32) -> AppResult<Advert> {
    session
        .get::<AdvertEntity>(id)
        .await?
        .map(Advert::from)
        .ok_or_not_found(Resource::Advert)
}

// An unknown owner_id surfaces as a foreign-key violation and is reported
// the same way as a duplicate header.
fn write_error(err: sea_orm::DbErr) -> AppError {
    AppError::from_write(err, Resource::Advert)
}

/// Post a new advert
#[utoipa::path(
    post,
    path = "/adv/",
    tag = "Adverts",
    request_body = CreateAdvert,
    responses(
        (status = 200, description = "Advert created", body = IdResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "Advert already exists", body = ErrorResponse)
    )
)]
pub async fn create_advert(
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateAdvert>,
) -> AppResult<Json<IdResponse>> {
    let model = AdvertActiveModel {
        header: Set(payload.header),
        description: Set(payload.description),
        owner_id: Set(Some(payload.owner_id)),
        ..Default::default()
    };

    let stored = session.insert(model).await.map_err(write_error)?;
    session.commit().await.map_err(write_error)?;

    tracing::info!(advert_id = stored.id, owner_id = payload.owner_id, "Advert created");
    Ok(Json(IdResponse::new(stored.id)))
}

/// Get advert by ID
#[utoipa::path(
    get,
    path = "/adv/{id}/",
    tag = "Adverts",
    params(
        ("id" = i32, Path, description = "Advert ID")
    ),
    responses(
        (status = 200, description = "Advert record", body = Advert),
        (status = 404, description = "Advert not found", body = ErrorResponse)
    )
)]
pub async fn get_advert(Path(id): Path<String>, session: Session) -> AppResult<Json<Advert>> {
    let id = record_id(&id, Resource::Advert)?;
    let advert = load_advert(&session, id).await?;
    Ok(Json(advert))
}

/// Update the supplied fields of an advert
#[utoipa::path(
    patch,
    path = "/adv/{id}/",
    tag = "Adverts",
    params(
        ("id" = i32, Path, description = "Advert ID")
    ),
    request_body = UpdateAdvert,
    responses(
        (status = 200, description = "Updated advert record", body = Advert),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Advert not found", body = ErrorResponse),
        (status = 409, description = "Advert already exists", body = ErrorResponse)
    )
)]
pub async fn update_advert(
    Path(id): Path<String>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<UpdateAdvert>,
) -> AppResult<Json<Advert>> {
    let id = record_id(&id, Resource::Advert)?;
    let mut advert = load_advert(&session, id).await?;
    advert.apply_all(payload.changes());

    let stored = session
        .update(AdvertActiveModel::from(&advert))
        .await
        .map_err(write_error)?;
    session.commit().await.map_err(write_error)?;

    tracing::info!(advert_id = id, "Advert updated");
    Ok(Json(Advert::from(stored)))
}

/// Delete advert by ID
#[utoipa::path(
    delete,
    path = "/adv/{id}/",
    tag = "Adverts",
    params(
        ("id" = i32, Path, description = "Advert ID")
    ),
    responses(
        (status = 200, description = "Advert deleted", body = StatusResponse),
        (status = 404, description = "Advert not found", body = ErrorResponse)
    )
)]
pub async fn delete_advert(
    Path(id): Path<String>,
    session: Session,
) -> AppResult<Json<StatusResponse>> {
    let id = record_id(&id, Resource::Advert)?;
    if !session.delete::<AdvertEntity>(id).await.map_err(write_error)? {
        return Err(AppError::NotFound(Resource::Advert));
    }
    session.commit().await.map_err(write_error)?;

    tracing::info!(advert_id = id, "Advert deleted");
    Ok(Json(StatusResponse::deleted()))
}
