//! Extractors that turn axum rejections into [`crate::AppError`] so every failure
//! answers with a `{"detail": ...}` body.

mod api;
pub use api::{ApiJson, ApiPath, ApiQuery};
