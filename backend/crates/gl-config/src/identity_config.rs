use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Identity provider endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub base_url: String,
    /// Project web API key. Secret, never logged.
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            api_key: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::identity(format!(
                "identity.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if !(MIN_REQUEST_TIMEOUT_SECS..=MAX_REQUEST_TIMEOUT_SECS)
            .contains(&self.request_timeout_secs)
        {
            return Err(ConfigError::identity(format!(
                "identity.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    /// The API key, required before talking to the remote provider.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::identity(
                "identity.api_key is required (set GL_IDENTITY_API_KEY)",
            )),
        }
    }
}
