use serde::{Deserialize, Serialize};

/// Validated, trimmed profile fields collected by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
    /// Store name or volunteer name depending on the role.
    pub organization_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}
