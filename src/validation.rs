//! Request and response shapes for the user endpoints.

use crate::entity::User;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_SKIP: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;

/// Body of `POST /users/`. Both fields are required.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Body of `PUT /users/{user_id}`. Only fields carrying a value are written.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: FieldUpdate<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: FieldUpdate<String>,
}

impl UserUpdate {
    /// Overlay the set fields onto `current`. `id` is never touched.
    pub fn apply_to(self, current: User) -> User {
        User {
            id: current.id,
            name: self.name.merge(current.name),
            email: self.email.merge(current.email),
        }
    }
}

/// A field in a partial update: missing from the body, explicitly `null`, or set.
///
/// `Null` is kept distinct from `Absent` so a later revision can treat it as "clear",
/// but today both leave the stored value unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Absent,
    Null,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Absent
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, FieldUpdate::Set(_))
    }

    pub fn merge(self, current: T) -> T {
        match self {
            FieldUpdate::Set(v) => v,
            FieldUpdate::Absent | FieldUpdate::Null => current,
        }
    }
}

// Only called when the key is present; `#[serde(default)]` covers the missing case.
impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => FieldUpdate::Set(v),
            None => FieldUpdate::Null,
        })
    }
}

/// Every user endpoint answers with this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Query string of `GET /users/`. Values are not range-checked.
#[derive(Clone, Copy, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of leading records to omit.
    #[serde(default = "default_skip")]
    pub skip: i64,
    /// Maximum number of records returned.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        ListParams {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_skip() -> i64 {
    DEFAULT_SKIP
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> User {
        User {
            id: 7,
            name: "Alice".into(),
            email: "a@x.com".into(),
        }
    }

    #[test]
    fn update_distinguishes_missing_from_null() {
        let update: UserUpdate = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(update.name, FieldUpdate::Null);
        assert_eq!(update.email, FieldUpdate::Absent);
    }

    #[test]
    fn update_overwrites_only_set_fields() {
        let update: UserUpdate = serde_json::from_value(json!({ "name": "Bob" })).unwrap();
        assert!(update.name.is_set());
        let user = update.apply_to(alice());
        assert_eq!(user, User { id: 7, name: "Bob".into(), email: "a@x.com".into() });
    }

    #[test]
    fn null_fields_keep_stored_values() {
        let update: UserUpdate = serde_json::from_value(json!({ "name": null, "email": null })).unwrap();
        assert_eq!(update.apply_to(alice()), alice());
    }

    #[test]
    fn update_rejects_wrong_types() {
        assert!(serde_json::from_value::<UserUpdate>(json!({ "email": 42 })).is_err());
    }

    #[test]
    fn create_requires_both_fields() {
        assert!(serde_json::from_value::<UserCreate>(json!({ "name": "Alice" })).is_err());
        let ok: UserCreate = serde_json::from_value(json!({ "name": "Alice", "email": "a@x.com", "extra": 1 })).unwrap();
        assert_eq!(ok.email, "a@x.com");
    }

    #[test]
    fn list_params_default() {
        let params: ListParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!((params.skip, params.limit), (DEFAULT_SKIP, DEFAULT_LIMIT));
    }
}
