use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_KEY, DEFAULT_UNKNOWN_EXPIRY_VALID};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed key the serialized session record is stored under, in every
    /// backend.
    pub storage_key: String,
    /// Whether a token without a decodable `exp` claim counts as a live
    /// session. Some OAuth providers rely on server-side session cookies
    /// and issue tokens without a standard expiry.
    pub unknown_expiry_valid: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: String::from(DEFAULT_STORAGE_KEY),
            unknown_expiry_valid: DEFAULT_UNKNOWN_EXPIRY_VALID,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }
        if self.storage_key.len() > 128 {
            return Err(ConfigError::session(
                "session.storage_key exceeds maximum length",
            ));
        }
        Ok(())
    }
}
