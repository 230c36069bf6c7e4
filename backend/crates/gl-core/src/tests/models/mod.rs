mod account_role;
mod credentials;
mod profile_document;
mod registration_form;
mod sign_in_form;
