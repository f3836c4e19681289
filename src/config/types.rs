//! Runtime settings for the service process.

use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://.test.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_BODY_LIMIT: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// SQLite connection string. The database file is created if missing.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Maximum accepted request body, in bytes.
    pub request_body_limit: usize,
}

impl ServiceConfig {
    /// In-memory database, used by tests and throwaway runs.
    pub fn in_memory() -> Self {
        ServiceConfig {
            database_url: "sqlite::memory:".into(),
            ..Self::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            request_body_limit: DEFAULT_REQUEST_BODY_LIMIT,
        }
    }
}
