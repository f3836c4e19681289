//! User CRUD handlers: create, list, read, update, delete.
//!
//! Each handler makes one call on [`crate::service::UserStore`], which owns the
//! session for the duration of that call.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;
use crate::validation::{ListParams, UserCreate, UserResponse, UserUpdate};
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Stored user with its assigned id", body = UserResponse),
        (status = 422, description = "Missing or mistyped field", body = ErrorBody),
        (status = 500, description = "Storage failure, including a duplicate email"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<UserCreate>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.create(&body).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(Json(user.into()))
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(ListParams),
    responses(
        (status = 200, description = "Up to `limit` users after the first `skip`", body = [UserResponse]),
        (status = 422, description = "Non-integer skip or limit", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.users.list(params.skip, params.limit).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get(user_id).await?.ok_or_else(AppError::user_not_found)?;
    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The user after the update", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(body): ApiJson<UserUpdate>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .users
        .update(user_id, body)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    tracing::info!(user_id, "user updated");
    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The removed user's last values", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.delete(user_id).await?.ok_or_else(AppError::user_not_found)?;
    tracing::info!(user_id, "user deleted");
    Ok(Json(user.into()))
}
