use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Loading
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults() {
    // Given
    let _dir = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.identity.base_url,
        "https://identitytoolkit.googleapis.com"
    );
    assert_eq!(config.identity.request_timeout_secs, 30);
    assert!(config.identity.api_key.is_none());
    assert_eq!(config.store.volunteer_collection, "volunteers");
    assert_eq!(config.store.store_collection, "stores");
    assert_eq!(*config.logging.level, LevelFilter::Info);
    assert_eq!(config.validation.min_password_length, 6);
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let dir = setup_config_dir();
    let nested = dir.temp.path().join("nested").join("conf");

    // When
    let result = Config::load_from(&nested);

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

#[test]
#[serial]
fn given_config_file_when_load_then_values_applied() {
    // Given
    let dir = setup_config_dir();
    dir.write_config(
        r#"
[identity]
api_key = "file-key"
request_timeout_secs = 10

[store]
project_id = "food-share"
store_collection = "partner_stores"

[logging]
level = "debug"
colored = false

[validation]
min_password_length = 8
"#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.identity.api_key.as_deref(), Some("file-key"));
    assert_eq!(config.identity.request_timeout_secs, 10);
    assert_eq!(config.store.project_id.as_deref(), Some("food-share"));
    assert_eq!(config.store.store_collection, "partner_stores");
    assert_eq!(config.store.volunteer_collection, "volunteers");
    assert_eq!(*config.logging.level, LevelFilter::Debug);
    assert!(!config.logging.colored);
    assert_eq!(config.validation.min_password_length, 8);
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let dir = setup_config_dir();
    dir.write_config("[identity\napi_key = ");

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_file() {
    // Given
    let dir = setup_config_dir();
    dir.write_config("[identity]\napi_key = \"file-key\"\n");
    let _key = EnvGuard::set("GL_IDENTITY_API_KEY", "env-key");
    let _project = EnvGuard::set("GL_STORE_PROJECT_ID", "env-project");
    let _level = EnvGuard::set("GL_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("GL_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.identity.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.store.project_id.as_deref(), Some("env-project"));
    assert_eq!(*config.logging.level, LevelFilter::Warn);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_unparseable_numeric_env_when_load_then_default_kept() {
    // Given
    let _dir = setup_config_dir();
    let _timeout = EnvGuard::set("GL_IDENTITY_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.identity.request_timeout_secs, 30);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    let _dir = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_defaults_when_validate_for_remote_then_error() {
    let _dir = setup_config_dir();

    let config = Config::load().unwrap();

    assert_that!(config.validate_for_remote(), err(anything()));
}

#[test]
#[serial]
fn given_api_key_and_project_when_validate_for_remote_then_ok() {
    // Given
    let _dir = setup_config_dir();
    let _key = EnvGuard::set("GL_IDENTITY_API_KEY", "key");
    let _project = EnvGuard::set("GL_STORE_PROJECT_ID", "project");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate_for_remote(), ok(anything()));
}
