use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORE_BASE_URL};

use gl_core::AccountRole;

use serde::Deserialize;

/// Profile document store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub project_id: Option<String>,
    pub volunteer_collection: String,
    pub store_collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_STORE_BASE_URL),
            project_id: None,
            volunteer_collection: String::from(AccountRole::Volunteer.default_collection()),
            store_collection: String::from(AccountRole::Store.default_collection()),
        }
    }
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::store(format!(
                "store.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        for (key, value) in [
            ("store.volunteer_collection", &self.volunteer_collection),
            ("store.store_collection", &self.store_collection),
        ] {
            if value.trim().is_empty() || value.contains('/') {
                return Err(ConfigError::store(format!(
                    "{key} must be a non-empty name without '/', got '{value}'"
                )));
            }
        }

        if self.volunteer_collection == self.store_collection {
            return Err(ConfigError::store(
                "store.volunteer_collection and store.store_collection must differ",
            ));
        }

        Ok(())
    }

    /// Collection holding profile documents for `role`.
    pub fn collection_for(&self, role: AccountRole) -> &str {
        match role {
            AccountRole::Volunteer => &self.volunteer_collection,
            AccountRole::Store => &self.store_collection,
        }
    }

    /// The project id, required before talking to the remote store.
    pub fn require_project_id(&self) -> ConfigErrorResult<&str> {
        match self.project_id.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(ConfigError::store(
                "store.project_id is required (set GL_STORE_PROJECT_ID)",
            )),
        }
    }
}
