use crate::{CoreError, CoreResult, Credentials, FormField};

pub const RESET_EMAIL_PROMPT: &str = "Please enter your email address first.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields must be present. A blank email is rejected; the password is
    /// only rejected when empty, since whitespace passwords can be registered.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<Credentials> {
        if self.email.trim().is_empty() {
            return Err(CoreError::validation(
                FormField::Email,
                FormField::Email.blank_message(),
            ));
        }
        if self.password.is_empty() {
            return Err(CoreError::validation(
                FormField::Password,
                FormField::Password.blank_message(),
            ));
        }
        Ok(Credentials::new(self.email.trim(), self.password.clone()))
    }

    /// The email a password reset would be sent to.
    #[track_caller]
    pub fn reset_email(&self) -> CoreResult<String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::validation(FormField::Email, RESET_EMAIL_PROMPT));
        }
        Ok(email.to_string())
    }
}
