//! Raw registration input and its synchronous validity check.

use crate::{
    CoreError, CoreResult, Credentials, FormField, RegistrationProfile, ValidationRules,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub organization_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Validate the form and split it into the profile to persist and the
    /// credentials to register. Fails on the first offending field.
    #[track_caller]
    pub fn validate(
        &self,
        rules: &ValidationRules,
    ) -> CoreResult<(RegistrationProfile, Credentials)> {
        rules.require(FormField::OrganizationName, &self.organization_name)?;
        rules.require(FormField::ContactName, &self.contact_name)?;
        rules.require(FormField::Email, &self.email)?;
        rules.require(FormField::Phone, &self.phone)?;
        rules.require(FormField::Address, &self.address)?;

        if self.password.is_empty() {
            return Err(CoreError::validation(
                FormField::Password,
                FormField::Password.blank_message(),
            ));
        }
        rules.check_password_length(&self.password)?;

        if self.confirm_password.is_empty() {
            return Err(CoreError::validation(
                FormField::ConfirmPassword,
                FormField::ConfirmPassword.blank_message(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation(
                FormField::ConfirmPassword,
                "Passwords do not match",
            ));
        }

        let email = self.email.trim().to_string();
        let profile = RegistrationProfile {
            organization_name: self.organization_name.trim().to_string(),
            contact_name: self.contact_name.trim().to_string(),
            email: email.clone(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        };

        Ok((profile, Credentials::new(email, self.password.clone())))
    }
}
