use gl_core::{AccountRole, RegistrationForm, SignInForm};

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and its profile
    Register(RegisterArgs),

    /// Sign in to an existing account
    SignIn(SignInArgs),

    /// Send a password reset email
    ResetPassword(ResetPasswordArgs),
}

impl Commands {
    pub fn role(&self) -> AccountRole {
        match self {
            Self::Register(args) => args.role,
            Self::SignIn(args) => args.role,
            Self::ResetPassword(args) => args.role,
        }
    }
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Account type: volunteer or store
    #[arg(long, value_parser = parse_role)]
    pub role: AccountRole,

    /// Store or volunteer organization name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub contact_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub password: String,

    #[arg(long)]
    pub confirm_password: String,
}

impl RegisterArgs {
    pub fn to_form(&self) -> RegistrationForm {
        RegistrationForm {
            organization_name: self.name.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct SignInArgs {
    #[arg(long, value_parser = parse_role)]
    pub role: AccountRole,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,
}

impl SignInArgs {
    pub fn to_form(&self) -> SignInForm {
        SignInForm::new(self.email.as_str(), self.password.as_str())
    }
}

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    #[arg(long, value_parser = parse_role)]
    pub role: AccountRole,

    #[arg(long, default_value = "")]
    pub email: String,
}

impl ResetPasswordArgs {
    pub fn to_form(&self) -> SignInForm {
        SignInForm::new(self.email.as_str(), "")
    }
}

fn parse_role(value: &str) -> Result<AccountRole, String> {
    value.parse::<AccountRole>().map_err(|e| e.user_message())
}
