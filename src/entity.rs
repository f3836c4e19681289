//! The `users` table and its row type.

use sqlx::FromRow;

pub const USERS_TABLE: &str = "users";

/// Column list shared by every statement that returns a full row.
pub const USER_COLUMNS: &str = "id, name, email";

/// One row of `users`. `id` is assigned by SQLite and never reused.
#[derive(Clone, Debug, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

pub(crate) const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR NOT NULL,
        email VARCHAR NOT NULL UNIQUE
    )
"#;

pub(crate) const CREATE_USERS_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS ix_users_name ON users (name)";
