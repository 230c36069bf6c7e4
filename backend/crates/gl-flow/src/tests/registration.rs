use super::{RecordingNavigator, registration_form};
use crate::{Outcome, RegistrationWorkflow, WorkflowPhase, messages};

use gl_core::{AccountRole, FieldValue, FormField, Route, Uid, ValidationRules};
use gl_identity::{MemoryIdentityProvider, MemoryProfileStore};

use std::sync::Arc;

fn workflow(
    role: AccountRole,
    identity: &Arc<MemoryIdentityProvider>,
    store: &Arc<MemoryProfileStore>,
) -> RegistrationWorkflow {
    RegistrationWorkflow::new(role, identity.clone(), store.clone())
}

#[tokio::test]
async fn given_valid_store_form_when_submit_then_profile_written_and_dashboard() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_next_uid("abc123"));
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;

    assert_eq!(outcome, Outcome::Navigate(Route::StoreDashboard));
    assert_eq!(identity.uid_for("a@b.com"), Some(Uid::new("abc123")));

    let document = store.document("stores", "abc123").unwrap();
    assert_eq!(document.get("active"), Some(&FieldValue::Bool(true)));
    assert_eq!(document.get("createdAt"), Some(&FieldValue::ServerTimestamp));
    assert_eq!(document.get("name"), Some(&FieldValue::from("Corner Market")));
    assert_eq!(document.get("contactName"), Some(&FieldValue::from("Ana Ruiz")));
    assert_eq!(document.get("email"), Some(&FieldValue::from("a@b.com")));
    assert_eq!(document.get("phone"), Some(&FieldValue::from("555-0100")));
    assert_eq!(document.get("address"), Some(&FieldValue::from("12 Elm St")));
    assert_eq!(document.len(), 7);

    let state = workflow.controller().snapshot();
    assert_eq!(state.phase, WorkflowPhase::Succeeded);
    assert!(!state.in_flight());
}

#[tokio::test]
async fn given_volunteer_workflow_when_submit_then_volunteers_collection() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_next_uid("v1"));
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Volunteer, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("vol@b.com", "secret1", "secret1"))
        .await;

    assert_eq!(outcome, Outcome::Navigate(Route::VolunteerDashboard));
    assert!(store.document("volunteers", "v1").is_some());
    assert!(store.document("stores", "v1").is_none());
}

#[tokio::test]
async fn given_collection_override_when_submit_then_override_used() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_next_uid("s1"));
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store).with_collection("shops");

    workflow
        .submit(&registration_form("shop@b.com", "secret1", "secret1"))
        .await;

    assert!(store.document("shops", "s1").is_some());
    assert_eq!(store.document_count(), 1);
}

#[tokio::test]
async fn given_short_password_when_submit_then_length_error_and_no_remote_call() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "abcde", "abcde"))
        .await;

    assert_eq!(
        outcome,
        Outcome::Failed {
            code: "VALIDATION_ERROR",
            message: "At least 6 characters".to_string(),
            field: Some(FormField::Password),
        }
    );
    assert_eq!(identity.total_calls(), 0);
    assert_eq!(store.put_calls(), 0);
    assert_eq!(workflow.controller().snapshot().phase, WorkflowPhase::ValidationFailed);
}

#[tokio::test]
async fn given_custom_rules_when_submit_then_configured_minimum_applied() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow =
        workflow(AccountRole::Volunteer, &identity, &store).with_rules(ValidationRules::new(10));

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret12", "secret12"))
        .await;

    assert_eq!(outcome.message(), Some("At least 10 characters"));
    assert_eq!(identity.total_calls(), 0);
}

#[tokio::test]
async fn given_mismatched_confirmation_when_submit_then_no_remote_call() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Volunteer, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret2"))
        .await;

    assert_eq!(outcome.message(), Some("Passwords do not match"));
    assert_eq!(identity.total_calls(), 0);
    assert_eq!(identity.identity_count(), 0);
}

#[tokio::test]
async fn given_blank_field_when_submit_then_field_prompt() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store);
    let mut form = registration_form("a@b.com", "secret1", "secret1");
    form.address = "   ".to_string();

    let outcome = workflow.submit(&form).await;

    assert_eq!(
        outcome,
        Outcome::Failed {
            code: "VALIDATION_ERROR",
            message: "Please enter an address".to_string(),
            field: Some(FormField::Address),
        }
    );
    assert_eq!(identity.total_calls(), 0);
}

#[tokio::test]
async fn given_existing_email_when_submit_then_email_in_use_and_no_document() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_identity("u0", "a@b.com", "secret1"));
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;

    assert_eq!(outcome.message(), Some(messages::EMAIL_ALREADY_IN_USE));
    assert_eq!(store.put_calls(), 0);

    let state = workflow.controller().snapshot();
    assert_eq!(state.phase, WorkflowPhase::RemoteFailed);
    assert_eq!(state.last_error.as_deref(), Some(messages::EMAIL_ALREADY_IN_USE));
    assert!(!state.in_flight());
}

#[tokio::test]
async fn given_offline_provider_when_submit_then_generic_registration_failure() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    identity.set_offline(true);
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Volunteer, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;

    assert_eq!(outcome.message(), Some(messages::REGISTRATION_FAILED));
    assert!(!workflow.controller().in_flight());
}

#[tokio::test]
async fn given_store_rejects_when_submit_then_orphaned_identity_and_generic_message() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_next_uid("u1"));
    let store = Arc::new(MemoryProfileStore::new());
    store.set_rejecting(true);
    let workflow = workflow(AccountRole::Store, &identity, &store);

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;

    assert_eq!(
        outcome,
        Outcome::Failed {
            code: "PERSISTENCE_ERROR",
            message: messages::REGISTRATION_FAILED.to_string(),
            field: None,
        }
    );
    assert_eq!(identity.uid_for("a@b.com"), Some(Uid::new("u1")));
    assert_eq!(store.document_count(), 0);
    assert!(!workflow.controller().in_flight());
}

#[tokio::test]
async fn given_failure_when_resubmitted_then_second_attempt_succeeds() {
    let identity = Arc::new(MemoryIdentityProvider::new().with_next_uid("abc123"));
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Store, &identity, &store);

    let first = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret9"))
        .await;
    let second = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;

    assert!(!first.is_success());
    assert_eq!(second, Outcome::Navigate(Route::StoreDashboard));
    assert_eq!(workflow.controller().snapshot().last_error, None);
}

#[tokio::test]
async fn given_success_when_dispatch_then_history_replaced_by_dashboard() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Volunteer, &identity, &store);
    let mut navigator = RecordingNavigator {
        history: vec![Route::Home],
    };

    let outcome = workflow
        .submit(&registration_form("a@b.com", "secret1", "secret1"))
        .await;
    let navigated = workflow.dispatch(&outcome, &mut navigator);

    assert!(navigated);
    assert_eq!(navigator.history, vec![Route::VolunteerDashboard]);
    assert_eq!(workflow.controller().snapshot().phase, WorkflowPhase::Navigated);
}

#[tokio::test]
async fn given_failure_when_dispatch_then_no_navigation() {
    let identity = Arc::new(MemoryIdentityProvider::new());
    let store = Arc::new(MemoryProfileStore::new());
    let workflow = workflow(AccountRole::Volunteer, &identity, &store);
    let mut navigator = RecordingNavigator::default();

    let outcome = workflow.submit(&registration_form("", "secret1", "secret1")).await;

    assert!(!workflow.dispatch(&outcome, &mut navigator));
    assert!(navigator.history.is_empty());
}

#[test]
fn given_registration_screen_when_back_then_home() {
    let workflow = RegistrationWorkflow::new(
        AccountRole::Store,
        Arc::new(MemoryIdentityProvider::new()),
        Arc::new(MemoryProfileStore::new()),
    );

    let mut navigator = RecordingNavigator {
        history: vec![Route::Home, Route::Home],
    };

    assert!(workflow.navigate_back(&mut navigator));
    assert_eq!(navigator.history, vec![Route::Home]);
    assert_eq!(workflow.collection(), "stores");
}
