//! Pool construction and `users` table bootstrap.

use crate::config::{ServiceConfig, DATABASE_URL_VAR};
use crate::entity::{CREATE_USERS_NAME_INDEX, CREATE_USERS_TABLE, USERS_TABLE};
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open a pool for `config.database_url`, creating the database file if it does not exist.
///
/// Every connection to `sqlite::memory:` opens a separate empty database, so in-memory
/// pools are pinned to one connection that is never recycled.
pub async fn connect(config: &ServiceConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| ConfigError::Invalid {
            key: DATABASE_URL_VAR,
            reason: e.to_string(),
        })?
        .create_if_missing(true);

    let pool_opts = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };
    let pool = pool_opts.connect_with(opts).await?;
    Ok(pool)
}

/// Create `users` and its index if absent. Safe to call on every startup.
pub async fn ensure_users_table(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USERS_NAME_INDEX).execute(pool).await?;
    tracing::debug!(table = USERS_TABLE, "table ensured");
    Ok(())
}
