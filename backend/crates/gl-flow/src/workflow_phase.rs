/// Lifecycle of one submission:
/// `Idle → Validating → (ValidationFailed) | Submitting → (RemoteFailed) | Succeeded → Navigated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorkflowPhase {
    #[default]
    Idle,
    Validating,
    ValidationFailed,
    Submitting,
    RemoteFailed,
    Succeeded,
    Navigated,
}

impl WorkflowPhase {
    /// Only `Submitting` holds the busy flag.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Whether a new submission may start from this phase. Failures settle
    /// back to idle.
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, Self::Validating | Self::Submitting)
    }
}
