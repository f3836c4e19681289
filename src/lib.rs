//! User service: CRUD over a single `users` table, exposed as a JSON HTTP API.

pub mod config;
pub mod doc;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use config::ServiceConfig;
pub use entity::User;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, user_routes};
pub use service::UserStore;
pub use state::AppState;
pub use store::{connect, ensure_users_table};
pub use validation::{FieldUpdate, ListParams, UserCreate, UserResponse, UserUpdate};
