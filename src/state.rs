//! Shared application state for all routes.

use crate::service::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        AppState { users }
    }
}
