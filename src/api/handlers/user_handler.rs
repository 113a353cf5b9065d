//! User handlers.

use axum::{
    extract::Path,
    response::Json,
    routing::{get, post},
    Router,
};
use sea_orm::ActiveValue::Set;

use super::record_id;
use crate::api::extractors::ValidatedJson;
use crate::api::schemas::{CreateUser, UpdateUser};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt, Resource};
use crate::infra::entities::{UserActiveModel, UserEntity};
use crate::infra::Session;
use crate::types::{IdResponse, StatusResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/", post(create_user))
        .route(
            "/user/:id/",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

async fn load_user(session: &Session, id: i32) -> AppResult<User> {
    session
        .get::<UserEntity>(id)
        .await?
        .map(User::from)
        .ok_or_not_found(Resource::User)
}

fn write_error(err: sea_orm::DbErr) -> AppError {
    AppError::from_write(err, Resource::User)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/user/",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created", body = IdResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse)
    )
)]
pub async fn create_user(
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Json<IdResponse>> {
    let model = UserActiveModel {
        name: Set(payload.name),
        password: Set(payload.password),
        ..Default::default()
    };

    let stored = session.insert(model).await.map_err(write_error)?;
    session.commit().await.map_err(write_error)?;

    tracing::info!(user_id = stored.id, "User created");
    Ok(Json(IdResponse::new(stored.id)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(Path(id): Path<String>, session: Session) -> AppResult<Json<User>> {
    let id = record_id(&id, Resource::User)?;
    let user = load_user(&session, id).await?;
    Ok(Json(user))
}

/// Update the supplied fields of a user
#[utoipa::path(
    patch,
    path = "/user/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Updated user record", body = User),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Path(id): Path<String>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let id = record_id(&id, Resource::User)?;
    let mut user = load_user(&session, id).await?;
    let changes = payload.changes();
    let changed = changes.len();
    user.apply_all(changes);

    let stored = session
        .update(UserActiveModel::from(&user))
        .await
        .map_err(write_error)?;
    session.commit().await.map_err(write_error)?;

    tracing::info!(user_id = id, changed, "User updated");
    Ok(Json(User::from(stored)))
}

/// Delete user by ID; the user's adverts are kept without an owner
#[utoipa::path(
    delete,
    path = "/user/{id}/",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = StatusResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Path(id): Path<String>,
    session: Session,
) -> AppResult<Json<StatusResponse>> {
    let id = record_id(&id, Resource::User)?;
    if !session.delete::<UserEntity>(id).await.map_err(write_error)? {
        return Err(AppError::NotFound(Resource::User));
    }
    session.commit().await.map_err(write_error)?;

    tracing::info!(user_id = id, "User deleted");
    Ok(Json(StatusResponse::deleted()))
}
