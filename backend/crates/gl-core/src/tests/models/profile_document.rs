use crate::models::profile_document::{FIELD_ACTIVE, FIELD_CREATED_AT, FIELD_NAME};
use crate::{FieldValue, ProfileDocument, RegistrationProfile};

fn profile() -> RegistrationProfile {
    RegistrationProfile {
        organization_name: "Corner Market".to_string(),
        contact_name: "Sam Lee".to_string(),
        email: "a@b.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
    }
}

#[test]
fn test_new_profile_document_is_active() {
    let document = ProfileDocument::new(profile());
    assert!(document.active);
}

#[test]
fn test_profile_document_fields() {
    let fields = ProfileDocument::new(profile()).fields();

    assert_eq!(fields.len(), 7);
    assert_eq!(
        fields.get(FIELD_NAME),
        Some(&FieldValue::String("Corner Market".to_string()))
    );
    assert_eq!(fields.get(FIELD_ACTIVE), Some(&FieldValue::Bool(true)));
    assert_eq!(
        fields.get(FIELD_CREATED_AT),
        Some(&FieldValue::ServerTimestamp)
    );
}
