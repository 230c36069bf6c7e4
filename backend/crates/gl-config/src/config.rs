use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    IdentityConfig, LoggingConfig, StoreConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for GL_CONFIG_DIR env var, else use ./.givelink/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config from an explicit directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GL_CONFIG_DIR env var > ./.givelink/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate ranges and formats. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.identity.validate()?;
        self.store.validate()?;
        self.validation.validate()?;
        Ok(())
    }

    /// Like validate(), and also require the credentials needed to reach the
    /// hosted identity provider and profile store.
    pub fn validate_for_remote(&self) -> ConfigErrorResult<()> {
        self.validate()?;
        self.identity.require_api_key()?;
        self.store.require_project_id()?;
        Ok(())
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  identity: {} (api key {}, timeout {}s)",
            self.identity.base_url,
            if self.identity.api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            self.identity.request_timeout_secs
        );
        info!(
            "  store: {} project={} collections={}/{}",
            self.store.base_url,
            self.store.project_id.as_deref().unwrap_or("<unset>"),
            self.store.volunteer_collection,
            self.store.store_collection
        );
        info!(
            "  logging: {} (colored: {}, output: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.destination()
        );
        info!(
            "  validation: min_password_length={}",
            self.validation.min_password_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity
        Self::apply_env_string("GL_IDENTITY_BASE_URL", &mut self.identity.base_url);
        Self::apply_env_option_string("GL_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_parse(
            "GL_IDENTITY_TIMEOUT_SECS",
            &mut self.identity.request_timeout_secs,
        );

        // Store
        Self::apply_env_string("GL_STORE_BASE_URL", &mut self.store.base_url);
        Self::apply_env_option_string("GL_STORE_PROJECT_ID", &mut self.store.project_id);
        Self::apply_env_string(
            "GL_STORE_VOLUNTEER_COLLECTION",
            &mut self.store.volunteer_collection,
        );
        Self::apply_env_string("GL_STORE_STORE_COLLECTION", &mut self.store.store_collection);

        // Logging
        Self::apply_env_parse("GL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GL_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "GL_VALIDATION_MIN_PASSWORD_LENGTH",
            &mut self.validation.min_password_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored with a warning.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => warn!("Ignoring {var_name}={val:?}: not a valid value"),
            }
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
