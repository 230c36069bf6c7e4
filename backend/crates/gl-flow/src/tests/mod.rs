mod registration;

use crate::Navigator;

use gl_core::{Credentials, RegistrationForm, Route, SignInForm, Uid};
use gl_identity::{IdentityProvider, IdentityResult, MemoryIdentityProvider};

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

/// Records every navigation instead of performing it.
#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub history: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate_and_clear_history(&mut self, route: Route) {
        self.history.clear();
        self.history.push(route);
    }
}

/// Holds every call until the gate is notified, then delegates.
pub(crate) struct GatedIdentityProvider {
    pub inner: MemoryIdentityProvider,
    gate: Arc<Notify>,
}

impl GatedIdentityProvider {
    pub fn new(inner: MemoryIdentityProvider, gate: Arc<Notify>) -> Self {
        Self { inner, gate }
    }
}

#[async_trait]
impl IdentityProvider for GatedIdentityProvider {
    async fn create_identity(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        self.gate.notified().await;
        self.inner.create_identity(credentials).await
    }

    async fn authenticate(&self, credentials: &Credentials) -> IdentityResult<Uid> {
        self.gate.notified().await;
        self.inner.authenticate(credentials).await
    }

    async fn send_password_reset(&self, email: &str) -> IdentityResult<()> {
        self.gate.notified().await;
        self.inner.send_password_reset(email).await
    }
}

pub(crate) struct PanickingIdentityProvider;

#[async_trait]
impl IdentityProvider for PanickingIdentityProvider {
    async fn create_identity(&self, _credentials: &Credentials) -> IdentityResult<Uid> {
        panic!("provider exploded");
    }

    async fn authenticate(&self, _credentials: &Credentials) -> IdentityResult<Uid> {
        panic!("provider exploded");
    }

    async fn send_password_reset(&self, _email: &str) -> IdentityResult<()> {
        panic!("provider exploded");
    }
}

pub(crate) fn registration_form(email: &str, password: &str, confirm: &str) -> RegistrationForm {
    RegistrationForm {
        organization_name: "Corner Market".to_string(),
        contact_name: "Ana Ruiz".to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        address: "12 Elm St".to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

pub(crate) fn sign_in_form(email: &str, password: &str) -> SignInForm {
    SignInForm::new(email, password)
}
