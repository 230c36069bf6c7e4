use std::fmt;

use serde::{Deserialize, Serialize};

/// Navigation destinations reachable from the account screens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    VolunteerDashboard,
    StoreDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::VolunteerDashboard => "/volunteer-dashboard",
            Self::StoreDashboard => "/store-dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
