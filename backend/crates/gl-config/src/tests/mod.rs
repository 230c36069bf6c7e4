mod config;

use std::env;
use std::fs;

use tempfile::TempDir;

/// Every variable the loader reads. Cleared by `setup_config_dir` so the
/// developer's shell cannot leak into assertions.
const GL_ENV_VARS: &[&str] = &[
    "GL_IDENTITY_BASE_URL",
    "GL_IDENTITY_API_KEY",
    "GL_IDENTITY_TIMEOUT_SECS",
    "GL_STORE_BASE_URL",
    "GL_STORE_PROJECT_ID",
    "GL_STORE_VOLUNTEER_COLLECTION",
    "GL_STORE_STORE_COLLECTION",
    "GL_LOG_LEVEL",
    "GL_LOG_COLORED",
    "GL_LOG_FILE",
    "GL_VALIDATION_MIN_PASSWORD_LENGTH",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory, GL_CONFIG_DIR pointed at it, GL_* overrides cleared.
pub(crate) struct TestConfigDir {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn write_config(&self, contents: &str) {
        fs::write(self.temp.path().join("config.toml"), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = GL_ENV_VARS.iter().map(|k| EnvGuard::remove(*k)).collect();
    guards.push(EnvGuard::set(
        "GL_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    ));
    TestConfigDir {
        temp,
        _guards: guards,
    }
}
