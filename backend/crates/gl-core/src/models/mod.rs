pub mod account_role;
pub mod credentials;
pub mod field_value;
pub mod profile_document;
pub mod registration_form;
pub mod registration_profile;
pub mod route;
pub mod sign_in_form;
pub mod uid;
