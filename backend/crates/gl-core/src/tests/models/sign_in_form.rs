use crate::models::sign_in_form::RESET_EMAIL_PROMPT;
use crate::{FormField, SignInForm};

#[test]
fn given_valid_sign_in_form_when_validated_then_returns_trimmed_email() {
    let form = SignInForm::new(" a@b.com ", "secret1");

    let credentials = form.validate().unwrap();

    assert_eq!(credentials.email, "a@b.com");
    assert_eq!(credentials.password, "secret1");
}

#[test]
fn given_empty_email_when_validated_then_email_error() {
    let form = SignInForm::new("", "secret1");

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some(FormField::Email));
    assert_eq!(err.user_message(), "Please enter your email");
}

#[test]
fn given_empty_password_when_validated_then_password_error() {
    let form = SignInForm::new("a@b.com", "");

    let err = form.validate().unwrap_err();

    assert_eq!(err.field(), Some(FormField::Password));
}

#[test]
fn given_blank_email_when_reset_email_then_prompt() {
    let form = SignInForm::new("  ", "");

    let err = form.reset_email().unwrap_err();

    assert_eq!(err.user_message(), RESET_EMAIL_PROMPT);
}

#[test]
fn given_email_when_reset_email_then_trimmed() {
    let form = SignInForm::new(" a@b.com", "");
    assert_eq!(form.reset_email().unwrap(), "a@b.com");
}

#[test]
fn given_whitespace_password_when_validated_then_kept_verbatim() {
    let form = SignInForm::new("a@b.com", "      ");

    let credentials = form.validate().unwrap();

    assert_eq!(credentials.password, "      ");
}
