use crate::WorkflowPhase;

/// Observable state of one screen instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub phase: WorkflowPhase,
    /// Last user-visible error, shown as a modal or inline notice.
    pub last_error: Option<String>,
    /// Transient success notice (e.g. reset email sent).
    pub notice: Option<String>,
}

impl RequestState {
    pub fn in_flight(&self) -> bool {
        self.phase.is_in_flight()
    }
}
