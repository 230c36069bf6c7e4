use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No signed-in session for document write {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Document write rejected ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network failure: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        match err.status() {
            Some(status) => Self::rejected(status.as_u16(), err.to_string()),
            None => Self::network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
