//! Router assembly.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::doc::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: user CRUD, probes and the OpenAPI document.
pub fn app(state: AppState, request_body_limit: usize) -> Router {
    Router::new()
        .merge(user_routes(state.clone()))
        .merge(common_routes(state))
        .route("/openapi.json", get(openapi_json))
        .layer(RequestBodyLimitLayer::new(request_body_limit))
        .layer(TraceLayer::new_for_http())
}
