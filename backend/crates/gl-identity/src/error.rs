use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the identity provider, normalised to the kinds the
/// account screens react to.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Email already in use {location}")]
    EmailAlreadyInUse { location: ErrorLocation },

    #[error("Weak password {location}")]
    WeakPassword { location: ErrorLocation },

    #[error("User not found {location}")]
    UserNotFound { location: ErrorLocation },

    #[error("Wrong password {location}")]
    WrongPassword { location: ErrorLocation },

    #[error("Invalid email {location}")]
    InvalidEmail { location: ErrorLocation },

    #[error("Network failure: {message} {location}")]
    NetworkFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider error {code}: {message} {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected provider response: {message} {location}")]
    UnexpectedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    /// Map a provider error code (e.g. `EMAIL_EXISTS`) to a kind.
    #[track_caller]
    pub fn from_provider_code(code: &str, message: impl Into<String>) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match code {
            "EMAIL_EXISTS" => Self::EmailAlreadyInUse { location },
            "WEAK_PASSWORD" => Self::WeakPassword { location },
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => Self::UserNotFound { location },
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => Self::WrongPassword { location },
            "INVALID_EMAIL" | "MISSING_EMAIL" => Self::InvalidEmail { location },
            _ => Self::Provider {
                code: code.to_string(),
                message: message.into(),
                location,
            },
        }
    }

    #[track_caller]
    pub fn email_already_in_use() -> Self {
        Self::EmailAlreadyInUse {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn weak_password() -> Self {
        Self::WeakPassword {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found() -> Self {
        Self::UserNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn wrong_password() -> Self {
        Self::WrongPassword {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_email() -> Self {
        Self::InvalidEmail {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for logs and diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmailAlreadyInUse { .. } => "EMAIL_ALREADY_IN_USE",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::WrongPassword { .. } => "WRONG_PASSWORD",
            Self::InvalidEmail { .. } => "INVALID_EMAIL",
            Self::NetworkFailure { .. } => "NETWORK_FAILURE",
            Self::Provider { .. } => "PROVIDER_ERROR",
            Self::UnexpectedResponse { .. } => "UNEXPECTED_RESPONSE",
        }
    }

    /// Raw provider text for unmapped failures, if any.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Provider { message, .. } | Self::UnexpectedResponse { message, .. }
                if !message.is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        // URLs carry the API key
        let err = err.without_url();
        if err.is_timeout() || err.is_connect() || err.is_request() {
            Self::network(err.to_string())
        } else {
            Self::unexpected(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
