//! Sign-in and password reset for an existing account.

use crate::error_boundary::{run_guarded, settle};
use crate::{
    AttemptContext, FlowResult, Navigator, Operation, Outcome, RequestController, dispatch,
    messages,
};

use gl_core::{AccountRole, Route, SignInForm, mask_email};
use gl_identity::IdentityProvider;

use std::sync::Arc;

use log::{debug, info};

pub struct SignInWorkflow {
    role: AccountRole,
    identity: Arc<dyn IdentityProvider>,
    controller: RequestController,
}

impl SignInWorkflow {
    pub fn new(role: AccountRole, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            role,
            identity,
            controller: RequestController::new(),
        }
    }

    pub fn role(&self) -> AccountRole {
        self.role
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    /// Authenticate and route to the role dashboard.
    pub async fn submit(&self, form: &SignInForm) -> Outcome {
        if !self.controller.is_active() {
            return Outcome::Abandoned;
        }

        let ctx = AttemptContext::new(self.role, Operation::SignIn);
        debug!("{} Sign-in submitted", ctx.log_prefix());

        let result = run_guarded(&ctx, self.sign_in(&ctx, form)).await;
        settle(&ctx, &self.controller, result)
    }

    /// Send a password reset email to the address in the form. A blank
    /// address is answered locally with a prompt.
    pub async fn reset_password(&self, form: &SignInForm) -> Outcome {
        if !self.controller.is_active() {
            return Outcome::Abandoned;
        }

        let ctx = AttemptContext::new(self.role, Operation::PasswordReset);
        debug!("{} Password reset requested", ctx.log_prefix());

        let result = run_guarded(&ctx, self.send_reset(&ctx, form)).await;
        settle(&ctx, &self.controller, result)
    }

    pub fn dispatch<N: Navigator + ?Sized>(&self, outcome: &Outcome, navigator: &mut N) -> bool {
        dispatch(outcome, navigator, &self.controller)
    }

    /// Back button: leave for home, clearing history.
    pub fn navigate_back<N: Navigator + ?Sized>(&self, navigator: &mut N) -> bool {
        dispatch(&Outcome::Navigate(Route::Home), navigator, &self.controller)
    }

    async fn sign_in(&self, ctx: &AttemptContext, form: &SignInForm) -> FlowResult<Outcome> {
        self.controller.start_validation()?;
        let credentials = form.validate()?;

        let _in_flight = self.controller.begin()?;
        let uid = self.identity.authenticate(&credentials).await?;
        info!("{} Signed in as {}", ctx.log_prefix(), uid);

        Ok(Outcome::Navigate(self.role.dashboard()))
    }

    async fn send_reset(&self, ctx: &AttemptContext, form: &SignInForm) -> FlowResult<Outcome> {
        self.controller.start_validation()?;
        let email = form.reset_email()?;

        let _in_flight = self.controller.begin()?;
        self.identity.send_password_reset(&email).await?;
        info!("{} Reset email sent to {}", ctx.log_prefix(), mask_email(&email));

        Ok(Outcome::Notice(messages::RESET_EMAIL_SENT.to_string()))
    }
}
