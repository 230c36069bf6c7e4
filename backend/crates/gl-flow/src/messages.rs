//! User-facing text shown by the account screens.

use gl_core::AccountRole;

pub const EMAIL_ALREADY_IN_USE: &str = "Email already in use";
pub const WEAK_PASSWORD: &str = "Weak password";
pub const INCORRECT_PASSWORD: &str = "Incorrect password. Please try again.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const CHECK_CONNECTION: &str = "Please check your internet connection and try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const SIGN_IN_FAILED: &str = "Sign in failed. Please try again.";
pub const RESET_FAILED: &str = "Could not send reset email. Please try again.";
pub const RESET_EMAIL_SENT: &str = "Password reset email sent. Check your inbox.";
pub const BUSY: &str = "Please wait for the current request to finish.";
pub const UNKNOWN_ERROR: &str = "Something went wrong. Please try again.";

/// Role-specific text for an unregistered email.
pub fn no_account_found(role: AccountRole) -> String {
    format!("No {} account found with that email.", role.as_str())
}

/// Generic sign-in failure, carrying the provider's raw text when present.
pub fn sign_in_failed(provider_message: Option<&str>) -> String {
    match provider_message {
        Some(raw) => format!("Sign in failed: {raw}"),
        None => SIGN_IN_FAILED.to_string(),
    }
}
