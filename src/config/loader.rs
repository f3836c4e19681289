//! Load [`ServiceConfig`] from environment variables.

use crate::config::types::ServiceConfig;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const MAX_CONNECTIONS_VAR: &str = "DB_MAX_CONNECTIONS";
pub const REQUEST_BODY_LIMIT_VAR: &str = "REQUEST_BODY_LIMIT";

impl ServiceConfig {
    /// Read the process environment. Callers load `.env` beforehand.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or empty keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let defaults = ServiceConfig::default();
        let config = ServiceConfig {
            database_url: get(DATABASE_URL_VAR).unwrap_or(defaults.database_url),
            bind_addr: parse_or(BIND_ADDR_VAR, get(BIND_ADDR_VAR), defaults.bind_addr)?,
            max_connections: parse_or(MAX_CONNECTIONS_VAR, get(MAX_CONNECTIONS_VAR), defaults.max_connections)?,
            request_body_limit: parse_or(
                REQUEST_BODY_LIMIT_VAR,
                get(REQUEST_BODY_LIMIT_VAR),
                defaults.request_body_limit,
            )?,
        };
        validate(&config)?;
        Ok(config)
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("'{}': {}", s, e),
        }),
        None => Ok(default),
    }
}
