//! Storage client used by the HTTP handlers.

mod users;
pub use users::UserStore;
