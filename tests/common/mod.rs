use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use user_service::{app, connect, ensure_users_table, AppState, ServiceConfig, UserStore};

pub async fn test_app() -> Router {
    let config = ServiceConfig::in_memory();
    let pool = connect(&config).await.unwrap();
    ensure_users_table(&pool).await.unwrap();
    app(AppState::new(UserStore::new(pool)), config.request_body_limit)
}

/// Send one request; the body is parsed as JSON when possible, else returned as a string.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[allow(dead_code)]
pub async fn create_user(app: &Router, name: &str, email: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/users/",
        Some(serde_json::json!({ "name": name, "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}
