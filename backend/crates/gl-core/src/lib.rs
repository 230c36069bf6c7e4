pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use models::account_role::AccountRole;
pub use models::credentials::Credentials;
pub use models::field_value::FieldValue;
pub use models::profile_document::ProfileDocument;
pub use models::registration_form::RegistrationForm;
pub use models::registration_profile::RegistrationProfile;
pub use models::route::Route;
pub use models::sign_in_form::SignInForm;
pub use models::uid::Uid;
pub use validation::form_field::FormField;
pub use validation::masked_email::mask_email;
pub use validation::validation_rules::{
    DEFAULT_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, MIN_MIN_PASSWORD_LENGTH,
    ValidationRules,
};

#[cfg(test)]
mod tests;
