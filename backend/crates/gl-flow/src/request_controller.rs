//! Busy flag and user-visible error state for one screen instance.

use crate::{FlowError, FlowResult, RequestState, WorkflowPhase};

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use tokio::sync::watch;

/// Owns the `RequestState` of a screen and publishes every change to
/// subscribers. The presentation layer observes through `subscribe()`.
///
/// After `dispose()` every mutation is skipped, so a call that resolves after
/// the screen is gone cannot touch its state.
#[derive(Debug)]
pub struct RequestController {
    state: watch::Sender<RequestState>,
    active: AtomicBool,
}

impl Default for RequestController {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestController {
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(RequestState::default()),
            active: AtomicBool::new(true),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> RequestState {
        self.state.borrow().clone()
    }

    pub fn in_flight(&self) -> bool {
        self.state.borrow().in_flight()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Enter `Validating`, clearing the previous error and notice.
    /// Rejected with `Busy` while another submission is running.
    #[track_caller]
    pub fn start_validation(&self) -> FlowResult<()> {
        let mut accepted = false;
        self.mutate(|state| {
            if !state.phase.accepts_submission() {
                return false;
            }
            accepted = true;
            state.phase = WorkflowPhase::Validating;
            state.last_error = None;
            state.notice = None;
            true
        });

        if accepted || !self.is_active() {
            Ok(())
        } else {
            Err(FlowError::busy())
        }
    }

    /// Record a local validation failure.
    pub fn reject(&self, message: impl Into<String>) {
        let message = message.into();
        self.transition(WorkflowPhase::ValidationFailed, |state| {
            state.last_error = Some(message);
        });
    }

    /// Enter `Submitting`. The returned guard leaves it on drop, so the busy
    /// flag is cleared on every exit path, unwinding included.
    #[track_caller]
    pub fn begin(&self) -> FlowResult<InFlightGuard<'_>> {
        let mut accepted = false;
        self.mutate(|state| {
            if state.phase.is_in_flight() {
                return false;
            }
            accepted = true;
            state.phase = WorkflowPhase::Submitting;
            state.last_error = None;
            state.notice = None;
            true
        });

        if accepted || !self.is_active() {
            debug!("Request in flight");
            Ok(InFlightGuard { controller: self })
        } else {
            Err(FlowError::busy())
        }
    }

    /// Leave `Submitting`. No-op from any other phase.
    pub fn complete(&self) {
        self.mutate(|state| {
            if !state.phase.is_in_flight() {
                return false;
            }
            state.phase = WorkflowPhase::Idle;
            true
        });
    }

    /// Record a remote failure to be shown to the user.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.transition(WorkflowPhase::RemoteFailed, |state| {
            state.last_error = Some(message);
        });
    }

    /// Record a transient success notice.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.transition(WorkflowPhase::Idle, |state| {
            state.notice = Some(message);
        });
    }

    pub fn succeed(&self) {
        self.transition(WorkflowPhase::Succeeded, |_| {});
    }

    pub fn mark_navigated(&self) {
        self.transition(WorkflowPhase::Navigated, |_| {});
    }

    /// Tear down: reset state and ignore every later mutation.
    pub fn dispose(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            debug!("Request state disposed");
            self.state.send_replace(RequestState::default());
        }
    }

    fn transition(&self, phase: WorkflowPhase, update: impl FnOnce(&mut RequestState)) {
        self.mutate(|state| {
            if state.phase != phase {
                debug!("Phase {:?} -> {:?}", state.phase, phase);
            }
            state.phase = phase;
            update(state);
            true
        });
    }

    fn mutate(&self, update: impl FnOnce(&mut RequestState) -> bool) {
        if !self.is_active() {
            return;
        }
        self.state.send_if_modified(update);
    }
}

/// Clears the busy flag when dropped.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    controller: &'a RequestController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.controller.complete();
    }
}
