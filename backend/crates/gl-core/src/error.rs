use crate::FormField;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Local, pre-network input rejection. `message` is user-facing.
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: FormField,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid account role: {value} {location}")]
    InvalidAccountRole {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for `field` at caller location.
    #[track_caller]
    pub fn validation(field: FormField, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The user-facing text, without location noise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidAccountRole { value, .. } => {
                format!("Unknown account type '{value}'")
            }
        }
    }

    /// The form field this error points at, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            Self::InvalidAccountRole { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
