use crate::IdentityResult;

use gl_core::{Credentials, Uid};

use async_trait::async_trait;

/// Credential-based identity service. Exactly one identity exists per email.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an identity and return its uid.
    async fn create_identity(&self, credentials: &Credentials) -> IdentityResult<Uid>;

    /// Authenticate an existing identity and return its uid.
    async fn authenticate(&self, credentials: &Credentials) -> IdentityResult<Uid>;

    /// Dispatch a password reset email.
    async fn send_password_reset(&self, email: &str) -> IdentityResult<()>;
}
