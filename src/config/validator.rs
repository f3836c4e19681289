//! Sanity checks on loaded settings. `DATABASE_URL` is parsed once, in [`crate::store::connect`].

use crate::config::loader::{MAX_CONNECTIONS_VAR, REQUEST_BODY_LIMIT_VAR};
use crate::config::ServiceConfig;
use crate::error::ConfigError;

pub fn validate(config: &ServiceConfig) -> Result<(), ConfigError> {
    if config.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: MAX_CONNECTIONS_VAR,
            reason: "must be at least 1".into(),
        });
    }
    if config.request_body_limit == 0 {
        return Err(ConfigError::Invalid {
            key: REQUEST_BODY_LIMIT_VAR,
            reason: "must be at least 1 byte".into(),
        });
    }
    Ok(())
}
