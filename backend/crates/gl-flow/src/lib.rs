pub mod attempt_context;
pub mod error;
pub mod error_boundary;
pub mod messages;
pub mod navigator;
pub mod operation;
pub mod outcome;
pub mod registration_workflow;
pub mod request_controller;
pub mod request_state;
pub mod sign_in_workflow;
pub mod workflow_phase;

pub use attempt_context::AttemptContext;
pub use error::{FlowError, Result as FlowResult};
pub use navigator::{Navigator, dispatch};
pub use operation::Operation;
pub use outcome::Outcome;
pub use registration_workflow::RegistrationWorkflow;
pub use request_controller::{InFlightGuard, RequestController};
pub use request_state::RequestState;
pub use sign_in_workflow::SignInWorkflow;
pub use workflow_phase::WorkflowPhase;

#[cfg(test)]
mod tests;
