//! Account provisioning: validate, create identity, write profile, navigate.

use crate::error_boundary::{run_guarded, settle};
use crate::{
    AttemptContext, FlowError, FlowResult, Navigator, Operation, Outcome, RequestController,
    dispatch,
};

use gl_core::{AccountRole, ProfileDocument, RegistrationForm, Route, ValidationRules};
use gl_identity::{IdentityProvider, ProfileStore};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct RegistrationWorkflow {
    role: AccountRole,
    collection: String,
    rules: ValidationRules,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    controller: RequestController,
}

impl RegistrationWorkflow {
    pub fn new(
        role: AccountRole,
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            role,
            collection: role.default_collection().to_string(),
            rules: ValidationRules::default(),
            identity,
            store,
            controller: RequestController::new(),
        }
    }

    /// Write profiles to `collection` instead of the role default.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn role(&self) -> AccountRole {
        self.role
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn controller(&self) -> &RequestController {
        &self.controller
    }

    /// Run one registration attempt. Never fails: every error is converted
    /// into `Outcome::Failed` and mirrored in the controller state.
    pub async fn submit(&self, form: &RegistrationForm) -> Outcome {
        if !self.controller.is_active() {
            return Outcome::Abandoned;
        }

        let ctx = AttemptContext::new(self.role, Operation::Register);
        debug!("{} Registration submitted", ctx.log_prefix());

        let result = run_guarded(&ctx, self.provision(&ctx, form)).await;
        settle(&ctx, &self.controller, result)
    }

    /// Navigate for a settled outcome. Returns whether it navigated.
    pub fn dispatch<N: Navigator + ?Sized>(&self, outcome: &Outcome, navigator: &mut N) -> bool {
        dispatch(outcome, navigator, &self.controller)
    }

    /// Back button: leave for home, clearing history.
    pub fn navigate_back<N: Navigator + ?Sized>(&self, navigator: &mut N) -> bool {
        dispatch(&Outcome::Navigate(Route::Home), navigator, &self.controller)
    }

    async fn provision(&self, ctx: &AttemptContext, form: &RegistrationForm) -> FlowResult<Outcome> {
        self.controller.start_validation()?;
        let (profile, credentials) = form.validate(&self.rules)?;

        let _in_flight = self.controller.begin()?;

        // Identity first: the document key is the identity's uid
        let uid = self.identity.create_identity(&credentials).await?;
        info!("{} Identity {} created", ctx.log_prefix(), uid);

        let document = ProfileDocument::new(profile);
        if let Err(source) = self
            .store
            .put_document(&self.collection, uid.as_str(), &document.fields())
            .await
        {
            // No rollback: the identity stays without a profile document
            warn!(
                "{} Orphaned identity {}: profile write to {} failed: {}",
                ctx.log_prefix(),
                uid,
                self.collection,
                source
            );
            return Err(FlowError::persistence(uid, source));
        }

        Ok(Outcome::Navigate(self.role.dashboard()))
    }
}
