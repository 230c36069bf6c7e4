#![allow(dead_code)]

use gl_identity::{RestIdentityProvider, RestProfileStore, Session};

use std::time::Duration;

use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const PROJECT_ID: &str = "food-share";
pub const COMMIT_PATH: &str = "/v1/projects/food-share/databases/(default)/documents:commit";

pub fn identity_provider(server: &MockServer, session: Session) -> RestIdentityProvider {
    RestIdentityProvider::new(&server.uri(), API_KEY, Duration::from_secs(5), session).unwrap()
}

pub fn profile_store(server: &MockServer, session: Session) -> RestProfileStore {
    RestProfileStore::new(&server.uri(), PROJECT_ID, Duration::from_secs(5), session).unwrap()
}
