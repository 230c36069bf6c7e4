use gl_core::{FormField, Route};

/// What the presentation layer should do once a workflow run settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Navigate to `route`, clearing history.
    Navigate(Route),
    /// Show a transient notice.
    Notice(String),
    /// Show `message`; highlight `field` when set.
    Failed {
        code: &'static str,
        message: String,
        field: Option<FormField>,
    },
    /// Rejected because another submission is in flight.
    Busy,
    /// The screen was disposed before the run settled; nothing to show.
    Abandoned,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Navigate(_) | Self::Notice(_))
    }

    /// The user-visible message, if the outcome carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Notice(message) | Self::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}
