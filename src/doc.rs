//! OpenAPI document for the user endpoints, served at `GET /openapi.json`.

use crate::error::ErrorBody;
use crate::validation::{UserCreate, UserResponse, UserUpdate};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service",
        description = "Create, read, update and delete user records."
    ),
    paths(
        crate::handlers::users::create,
        crate::handlers::users::list,
        crate::handlers::users::read,
        crate::handlers::users::update,
        crate::handlers::users::delete,
    ),
    components(schemas(UserCreate, UserUpdate, UserResponse, ErrorBody)),
    tags((name = "users", description = "User records"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
