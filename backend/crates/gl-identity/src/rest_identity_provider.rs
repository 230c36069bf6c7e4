use crate::wire::{
    AuthResponse, ErrorEnvelope, OobCodeRequest, PASSWORD_RESET_REQUEST_TYPE,
    PasswordAuthRequest,
};
use crate::{IdentityError, IdentityProvider, IdentityResult, Session};

use gl_core::{Credentials, Uid, mask_email};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

const SIGN_UP_PATH: &str = "/v1/accounts:signUp";
const SIGN_IN_PATH: &str = "/v1/accounts:signInWithPassword";
const SEND_OOB_CODE_PATH: &str = "/v1/accounts:sendOobCode";

/// Identity provider reached over its JSON REST API.
pub struct RestIdentityProvider {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
    session: Session,
}

impl RestIdentityProvider {
    /// Create a provider client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://identitytoolkit.googleapis.com")
    /// * `api_key` - Project web API key, sent as the `key` query parameter
    /// * `timeout` - Per-request timeout; expiry surfaces as a network failure
    /// * `session` - Receives the bearer token of the last signed-in identity
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        session: Session,
    ) -> IdentityResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdentityError::unexpected(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            session,
        })
    }

    /// POST `body` to `path` and decode either the success or error shape.
    async fn post<B, R>(&self, path: &str, body: &B) -> IdentityResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = format!("{}{}?key={}", self.base_url, path, self.api_key);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| {
                IdentityError::unexpected(format!("Malformed {path} response: {e}"))
            });
        }

        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Err(envelope.error.into_identity_error()),
            Err(_) => Err(IdentityError::provider(
                status.as_u16().to_string(),
                String::from_utf8_lossy(&bytes).chars().take(200).collect::<String>(),
            )),
        }
    }

    async fn password_auth(&self, path: &str, credentials: &Credentials) -> IdentityResult<Uid> {
        let request = PasswordAuthRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };

        let response: AuthResponse = self.post(path, &request).await?;
        if response.local_id.is_empty() {
            return Err(IdentityError::unexpected("Response carried an empty localId"));
        }

        let uid = Uid::new(response.local_id);
        match response.id_token {
            Some(token) => self.session.set(uid.clone(), token),
            None => {
                warn!("Identity {uid} returned without an id token; session cleared");
                self.session.clear();
            }
        }

        Ok(uid)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_identity(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        debug!("Creating identity for {}", mask_email(&credentials.email));
        self.password_auth(SIGN_UP_PATH, credentials).await
    }

    async fn authenticate(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        debug!("Authenticating {}", mask_email(&credentials.email));
        self.password_auth(SIGN_IN_PATH, credentials).await
    }

    async fn send_password_reset(&self, email: &str) -> IdentityResult<()> {
        debug!("Requesting password reset for {}", mask_email(email));
        let request = OobCodeRequest {
            request_type: PASSWORD_RESET_REQUEST_TYPE,
            email,
        };
        let _: serde_json::Value = self.post(SEND_OOB_CODE_PATH, &request).await?;
        Ok(())
    }
}
