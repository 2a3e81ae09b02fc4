use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIRECTORY};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory the file-backed session store writes into, relative to
    /// the config directory.
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let dir = std::path::Path::new(&self.dir);
        if dir.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
