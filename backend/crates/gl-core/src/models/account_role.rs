use crate::{CoreError, CoreResult, Route};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which kind of account a screen provisions or signs into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    Volunteer,
    Store,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Store => "store",
        }
    }

    /// Default profile collection for this role.
    pub fn default_collection(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteers",
            Self::Store => "stores",
        }
    }

    /// Dashboard the user lands on after registering or signing in.
    pub fn dashboard(&self) -> Route {
        match self {
            Self::Volunteer => Route::VolunteerDashboard,
            Self::Store => Route::StoreDashboard,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "volunteer" => Ok(Self::Volunteer),
            "store" => Ok(Self::Store),
            _ => Err(CoreError::InvalidAccountRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
