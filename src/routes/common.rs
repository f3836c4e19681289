//! Probe routes: liveness, readiness, version.

use crate::entity::USERS_TABLE;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    users_table: &'static str,
}

impl ReadyBody {
    fn status_code(&self) -> StatusCode {
        if self.status == "ok" {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Ready once the database answers and `users` has been bootstrapped.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let body = check_storage(state.users.pool()).await;
    (body.status_code(), Json(body))
}

async fn check_storage(pool: &SqlitePool) -> ReadyBody {
    let table: Result<Option<(String,)>, _> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(USERS_TABLE)
            .fetch_optional(pool)
            .await;
    match table {
        Ok(Some(_)) => ReadyBody {
            status: "ok",
            database: "ok",
            users_table: "ok",
        },
        Ok(None) => {
            tracing::warn!(table = USERS_TABLE, "readiness: table missing");
            ReadyBody {
                status: "degraded",
                database: "ok",
                users_table: "missing",
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness: database unavailable");
            ReadyBody {
                status: "degraded",
                database: "unavailable",
                users_table: "unknown",
            }
        }
    }
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
