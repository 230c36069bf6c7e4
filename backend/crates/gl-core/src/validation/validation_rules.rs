use crate::{CoreError, CoreResult, FormField};

pub const MIN_MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_MIN_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Client-side rules applied before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_password_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationRules {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    /// Reject blank (empty or whitespace-only) values.
    #[track_caller]
    pub fn require(&self, field: FormField, value: &str) -> CoreResult<()> {
        if value.trim().is_empty() {
            return Err(CoreError::validation(field, field.blank_message()));
        }
        Ok(())
    }

    /// Length is counted in characters, not bytes.
    #[track_caller]
    pub fn check_password_length(&self, password: &str) -> CoreResult<()> {
        if password.chars().count() < self.min_password_length {
            return Err(CoreError::validation(
                FormField::Password,
                format!("At least {} characters", self.min_password_length),
            ));
        }
        Ok(())
    }
}
