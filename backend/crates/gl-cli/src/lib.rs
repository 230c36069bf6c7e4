//! gl-cli library
//!
//! Command parsing, backend wiring and console navigation for the
//! `givelink` binary. Exported for the binary and for tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod console_navigator;
pub mod error;
pub mod logger;


pub use app::{Backend, execute};
pub use cli::Cli;
pub use commands::{Commands, RegisterArgs, ResetPasswordArgs, SignInArgs};
pub use console_navigator::ConsoleNavigator;
pub use error::{CliError, Result as CliResult};
