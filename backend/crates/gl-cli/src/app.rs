//! Wiring between loaded configuration, the remote adapters and the
//! account workflows.

use crate::{CliResult, Commands};

use gl_config::Config;
use gl_flow::{Navigator, Outcome, RegistrationWorkflow, SignInWorkflow};
use gl_identity::{
    IdentityProvider, ProfileStore, RestIdentityProvider, RestProfileStore, Session,
};

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Collaborators shared by every command.
pub struct Backend {
    pub config: Config,
    pub identity: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn ProfileStore>,
}

impl Backend {
    /// Build REST adapters for the hosted identity provider and profile
    /// store. Both share one session so profile writes carry the token of
    /// the identity just created.
    pub fn remote(config: Config) -> CliResult<Self> {
        config.validate_for_remote()?;

        let timeout = Duration::from_secs(config.identity.request_timeout_secs);
        let session = Session::new();

        let identity = RestIdentityProvider::new(
            &config.identity.base_url,
            config.identity.require_api_key()?,
            timeout,
            session.clone(),
        )?;
        let store = RestProfileStore::new(
            &config.store.base_url,
            config.store.require_project_id()?,
            timeout,
            session,
        )?;

        info!("Remote backend ready");
        Ok(Self {
            config,
            identity: Arc::new(identity),
            store: Arc::new(store),
        })
    }

    pub fn with_clients(
        config: Config,
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            config,
            identity,
            store,
        }
    }
}

/// Run one command to completion and perform the navigation it settles on.
pub async fn execute<N: Navigator + ?Sized>(
    command: &Commands,
    backend: &Backend,
    navigator: &mut N,
) -> Outcome {
    let role = command.role();

    match command {
        Commands::Register(args) => {
            let workflow =
                RegistrationWorkflow::new(role, backend.identity.clone(), backend.store.clone())
                    .with_collection(backend.config.store.collection_for(role))
                    .with_rules(backend.config.validation.rules());

            let outcome = workflow.submit(&args.to_form()).await;
            workflow.dispatch(&outcome, navigator);
            outcome
        }
        Commands::SignIn(args) => {
            let workflow = SignInWorkflow::new(role, backend.identity.clone());

            let outcome = workflow.submit(&args.to_form()).await;
            workflow.dispatch(&outcome, navigator);
            outcome
        }
        Commands::ResetPassword(args) => {
            let workflow = SignInWorkflow::new(role, backend.identity.clone());
            workflow.reset_password(&args.to_form()).await
        }
    }
}
