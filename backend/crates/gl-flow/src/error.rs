use crate::{Operation, messages};

use gl_core::{AccountRole, CoreError, FormField, Uid};
use gl_identity::{IdentityError, StoreError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    /// Local input rejection. Never reaches the network.
    #[error("Validation failed: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Identity provider failed: {source} {location}")]
    Identity {
        #[source]
        source: IdentityError,
        location: ErrorLocation,
    },

    /// Profile write failed after the identity was created. The identity
    /// `uid` exists without a profile document.
    #[error("Profile write for {uid} failed: {source} {location}")]
    Persistence {
        uid: Uid,
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("A request is already in flight {location}")]
    Busy { location: ErrorLocation },

    #[error("Unexpected failure: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

impl FlowError {
    #[track_caller]
    pub fn busy() -> Self {
        Self::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence(uid: Uid, source: StoreError) -> Self {
        Self::Persistence {
            uid,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Identity { .. } => "IDENTITY_ERROR",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::Busy { .. } => "BUSY",
            Self::Unknown { .. } => "UNKNOWN_ERROR",
        }
    }

    /// Form field to highlight, for validation failures.
    pub fn field(&self) -> Option<FormField> {
        match self {
            Self::Validation { source, .. } => source.field(),
            _ => None,
        }
    }

    /// The fixed text shown to the user for this failure.
    pub fn user_message(&self, role: AccountRole, operation: Operation) -> String {
        match self {
            Self::Validation { source, .. } => source.user_message(),
            Self::Identity { source, .. } => identity_message(source, role, operation),
            Self::Persistence { .. } => messages::REGISTRATION_FAILED.to_string(),
            Self::Busy { .. } => messages::BUSY.to_string(),
            Self::Unknown { .. } => messages::UNKNOWN_ERROR.to_string(),
        }
    }
}

fn identity_message(error: &IdentityError, role: AccountRole, operation: Operation) -> String {
    match (operation, error) {
        (Operation::Register, IdentityError::EmailAlreadyInUse { .. }) => {
            messages::EMAIL_ALREADY_IN_USE.to_string()
        }
        (Operation::Register, IdentityError::WeakPassword { .. }) => {
            messages::WEAK_PASSWORD.to_string()
        }
        (Operation::Register, _) => messages::REGISTRATION_FAILED.to_string(),

        (Operation::SignIn | Operation::PasswordReset, IdentityError::UserNotFound { .. }) => {
            messages::no_account_found(role)
        }
        (Operation::SignIn | Operation::PasswordReset, IdentityError::InvalidEmail { .. }) => {
            messages::INVALID_EMAIL.to_string()
        }
        (Operation::SignIn, IdentityError::WrongPassword { .. }) => {
            messages::INCORRECT_PASSWORD.to_string()
        }
        (Operation::SignIn, IdentityError::NetworkFailure { .. }) => {
            messages::CHECK_CONNECTION.to_string()
        }
        (Operation::SignIn, other) => messages::sign_in_failed(other.provider_message()),

        (Operation::PasswordReset, _) => messages::RESET_FAILED.to_string(),
    }
}

impl From<CoreError> for FlowError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IdentityError> for FlowError {
    #[track_caller]
    fn from(source: IdentityError) -> Self {
        Self::Identity {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
