use std::fmt;

use serde::{Deserialize, Serialize};

/// Input fields on the account screens, in the order they are validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    OrganizationName,
    ContactName,
    Email,
    Phone,
    Address,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrganizationName => "organization_name",
            Self::ContactName => "contact_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    /// Prompt shown when the field is left blank.
    pub fn blank_message(&self) -> &'static str {
        match self {
            Self::OrganizationName => "Please enter a name",
            Self::ContactName => "Please enter a contact name",
            Self::Email => "Please enter your email",
            Self::Phone => "Please enter a phone number",
            Self::Address => "Please enter an address",
            Self::Password => "Please enter your password",
            Self::ConfirmPassword => "Please confirm your password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
