mod config;
mod error;
mod identity_config;
mod log_level;
mod logging_config;
mod store_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "GL_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".givelink";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_STORE_BASE_URL: &str = "https://firestore.googleapis.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
