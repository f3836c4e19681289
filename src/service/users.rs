//! Storage client for `users`: one pooled connection per operation.

use crate::entity::{User, USER_COLUMNS};
use crate::error::AppError;
use crate::validation::{UserCreate, UserUpdate};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

/// Handle passed to every handler through [`crate::AppState`].
///
/// Each call checks out one connection (the request's session). The guard goes back to
/// the pool when dropped, which covers early returns, errors and cancelled futures alike.
#[derive(Clone, Debug)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        UserStore { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn session(&self) -> Result<PoolConnection<Sqlite>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    /// Insert a row; a duplicate email fails with the storage layer's unique violation.
    pub async fn create(&self, input: &UserCreate) -> Result<User, AppError> {
        let mut session = self.session().await?;
        let sql = format!("INSERT INTO users (name, email) VALUES (?, ?) RETURNING {}", USER_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&mut *session)
            .await?;
        Ok(user)
    }

    /// Rows in id order, skipping `skip` and returning at most `limit`.
    /// Negative values go to SQLite unchanged.
    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<User>, AppError> {
        let mut session = self.session().await?;
        let sql = format!("SELECT {} FROM users ORDER BY id LIMIT ? OFFSET ?", USER_COLUMNS);
        tracing::debug!(sql = %sql, skip, limit, "query");
        let users = sqlx::query_as::<_, User>(&sql)
            .bind(limit)
            .bind(skip)
            .fetch_all(&mut *session)
            .await?;
        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<Option<User>, AppError> {
        let mut session = self.session().await?;
        fetch_by_id(&mut session, id).await
    }

    /// Look the row up, overlay the set fields, write it back. `None` if no row has `id`.
    ///
    /// Email uniqueness is not re-checked here; the UNIQUE constraint still rejects a clash.
    pub async fn update(&self, id: i64, changes: UserUpdate) -> Result<Option<User>, AppError> {
        let mut session = self.session().await?;
        let Some(current) = fetch_by_id(&mut session, id).await? else {
            return Ok(None);
        };
        let next = changes.apply_to(current);
        let sql = format!("UPDATE users SET name = ?, email = ? WHERE id = ? RETURNING {}", USER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&next.name)
            .bind(&next.email)
            .bind(id)
            .fetch_optional(&mut *session)
            .await?;
        Ok(user)
    }

    /// Remove the row and return its last values. `None` if no row has `id`.
    pub async fn delete(&self, id: i64) -> Result<Option<User>, AppError> {
        let mut session = self.session().await?;
        let sql = format!("DELETE FROM users WHERE id = ? RETURNING {}", USER_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&mut *session)
            .await?;
        Ok(user)
    }
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<User>, AppError> {
    let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
    tracing::debug!(sql = %sql, id, "query");
    let user = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::store::{connect, ensure_users_table};
    use crate::validation::FieldUpdate;

    async fn store() -> UserStore {
        let pool = connect(&ServiceConfig::in_memory()).await.unwrap();
        ensure_users_table(&pool).await.unwrap();
        UserStore::new(pool)
    }

    fn new_user(name: &str, email: &str) -> UserCreate {
        UserCreate {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn ids_increase_and_are_not_reused() {
        let store = store().await;
        let a = store.create(&new_user("A", "a@x.com")).await.unwrap();
        let b = store.create(&new_user("B", "b@x.com")).await.unwrap();
        assert!(b.id > a.id);

        store.delete(b.id).await.unwrap();
        let c = store.create(&new_user("C", "c@x.com")).await.unwrap();
        assert!(c.id > b.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_database_error() {
        let store = store().await;
        store.create(&new_user("A", "a@x.com")).await.unwrap();
        let err = store.create(&new_user("B", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)));
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let store = store().await;
        for i in 0..5 {
            store.create(&new_user(&format!("u{i}"), &format!("u{i}@x.com"))).await.unwrap();
        }
        let page = store.list(1, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["u1", "u2"]);
        assert!(store.list(5, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn negative_limit_is_passed_through() {
        let store = store().await;
        for i in 0..3 {
            store.create(&new_user(&format!("u{i}"), &format!("u{i}@x.com"))).await.unwrap();
        }
        // SQLite reads a negative LIMIT as unbounded.
        assert_eq!(store.list(0, -1).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let store = store().await;
        assert!(store.update(42, UserUpdate::default()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_with_no_fields_keeps_row() {
        let store = store().await;
        let user = store.create(&new_user("A", "a@x.com")).await.unwrap();
        let same = store.update(user.id, UserUpdate::default()).await.unwrap();
        assert_eq!(same, Some(user));
    }

    #[tokio::test]
    async fn update_email_only() {
        let store = store().await;
        let user = store.create(&new_user("A", "a@x.com")).await.unwrap();
        let changes = UserUpdate {
            name: FieldUpdate::Absent,
            email: FieldUpdate::Set("new@x.com".into()),
        };
        let updated = store.update(user.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.name, "A");
        assert_eq!(updated.email, "new@x.com");
        assert_eq!(store.get(user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn delete_returns_last_values() {
        let store = store().await;
        let user = store.create(&new_user("A", "a@x.com")).await.unwrap();
        assert_eq!(store.delete(user.id).await.unwrap(), Some(user.clone()));
        assert!(store.get(user.id).await.unwrap().is_none());
        assert!(store.delete(user.id).await.unwrap().is_none());
    }
}
