//! Profile record persisted under the identity's uid.

use crate::{FieldValue, RegistrationProfile};

use std::collections::BTreeMap;

pub const FIELD_NAME: &str = "name";
pub const FIELD_CONTACT_NAME: &str = "contactName";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_ADDRESS: &str = "address";
pub const FIELD_ACTIVE: &str = "active";
pub const FIELD_CREATED_AT: &str = "createdAt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDocument {
    pub profile: RegistrationProfile,
    /// Deactivation flag. Documents are never deleted by this system.
    pub active: bool,
}

impl ProfileDocument {
    /// New documents are always active.
    pub fn new(profile: RegistrationProfile) -> Self {
        Self {
            profile,
            active: true,
        }
    }

    /// Wire fields, including the server-assigned `createdAt`.
    pub fn fields(&self) -> BTreeMap<String, FieldValue> {
        let mut fields = BTreeMap::new();
        fields.insert(
            FIELD_NAME.to_string(),
            FieldValue::from(self.profile.organization_name.as_str()),
        );
        fields.insert(
            FIELD_CONTACT_NAME.to_string(),
            FieldValue::from(self.profile.contact_name.as_str()),
        );
        fields.insert(
            FIELD_EMAIL.to_string(),
            FieldValue::from(self.profile.email.as_str()),
        );
        fields.insert(
            FIELD_PHONE.to_string(),
            FieldValue::from(self.profile.phone.as_str()),
        );
        fields.insert(
            FIELD_ADDRESS.to_string(),
            FieldValue::from(self.profile.address.as_str()),
        );
        fields.insert(FIELD_ACTIVE.to_string(), FieldValue::Bool(self.active));
        fields.insert(FIELD_CREATED_AT.to_string(), FieldValue::ServerTimestamp);
        fields
    }
}
