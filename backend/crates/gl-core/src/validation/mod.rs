pub mod form_field;
pub mod masked_email;
pub mod validation_rules;
