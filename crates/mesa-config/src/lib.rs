mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

const DEFAULT_STORAGE_KEY: &str = "mesa.session";
const DEFAULT_UNKNOWN_EXPIRY_VALID: bool = true;
const DEFAULT_STORAGE_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
