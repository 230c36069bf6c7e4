use crate::{CoreError, FormField, RegistrationForm, ValidationRules};

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        organization_name: "Corner Market".to_string(),
        contact_name: "Sam Lee".to_string(),
        email: "a@b.com".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    }
}

fn rejected_field(form: &RegistrationForm) -> Option<FormField> {
    form.validate(&ValidationRules::default())
        .err()
        .and_then(|e| e.field())
}

#[test]
fn given_complete_form_when_validated_then_returns_trimmed_profile() {
    // Given
    let mut form = valid_form();
    form.organization_name = "  Corner Market ".to_string();
    form.email = " a@b.com ".to_string();

    // When
    let (profile, credentials) = form.validate(&ValidationRules::default()).unwrap();

    // Then
    assert_eq!(profile.organization_name, "Corner Market");
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(credentials.email, "a@b.com");
    assert_eq!(credentials.password, "secret1");
}

#[test]
fn given_whitespace_only_field_when_validated_then_names_that_field() {
    let cases = [
        (FormField::OrganizationName, {
            let mut f = valid_form();
            f.organization_name = "   ".to_string();
            f
        }),
        (FormField::ContactName, {
            let mut f = valid_form();
            f.contact_name = String::new();
            f
        }),
        (FormField::Email, {
            let mut f = valid_form();
            f.email = "\t".to_string();
            f
        }),
        (FormField::Phone, {
            let mut f = valid_form();
            f.phone = String::new();
            f
        }),
        (FormField::Address, {
            let mut f = valid_form();
            f.address = " \n ".to_string();
            f
        }),
    ];

    for (field, form) in cases {
        assert_eq!(rejected_field(&form), Some(field));
    }
}

#[test]
fn given_five_char_password_when_validated_then_at_least_six_characters() {
    // Given
    let mut form = valid_form();
    form.password = "abcde".to_string();
    form.confirm_password = "abcde".to_string();

    // When
    let result = form.validate(&ValidationRules::default());

    // Then
    let err = result.unwrap_err();
    assert_eq!(err.field(), Some(FormField::Password));
    assert_eq!(err.user_message(), "At least 6 characters");
}

#[test]
fn given_custom_minimum_when_validated_then_message_uses_minimum() {
    let mut form = valid_form();
    form.password = "secret1".to_string();
    form.confirm_password = "secret1".to_string();

    let err = form.validate(&ValidationRules::new(10)).unwrap_err();

    assert_eq!(err.user_message(), "At least 10 characters");
}

#[test]
fn given_mismatched_confirmation_when_validated_then_passwords_do_not_match() {
    // Given
    let mut form = valid_form();
    form.confirm_password = "secret2".to_string();

    // When
    let err = form.validate(&ValidationRules::default()).unwrap_err();

    // Then
    assert!(matches!(
        err,
        CoreError::Validation {
            field: FormField::ConfirmPassword,
            ..
        }
    ));
    assert_eq!(err.user_message(), "Passwords do not match");
}

#[test]
fn given_empty_password_when_validated_then_password_prompt() {
    let mut form = valid_form();
    form.password = String::new();

    let err = form.validate(&ValidationRules::default()).unwrap_err();

    assert_eq!(err.user_message(), "Please enter your password");
}

#[test]
fn given_multibyte_password_when_validated_then_counts_characters() {
    let mut form = valid_form();
    form.password = "ééééé".to_string();
    form.confirm_password = "ééééé".to_string();

    assert_eq!(rejected_field(&form), Some(FormField::Password));
}
