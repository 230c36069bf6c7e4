//! givelink - account provisioning CLI
//!
//! # Examples
//!
//! ```bash
//! # Register a store account
//! givelink register --role store --name "Corner Market" --contact-name "Ana Ruiz" \
//!     --email ana@example.com --phone 555-0100 --address "12 Elm St" \
//!     --password secret1 --confirm-password secret1
//!
//! # Sign in
//! givelink sign-in --role volunteer --email vol@example.com --password secret1
//!
//! # Request a password reset
//! givelink reset-password --role volunteer --email vol@example.com
//! ```

use gl_cli::{Backend, Cli, CliResult, ConsoleNavigator, execute, logger};
use gl_config::Config;
use gl_flow::Outcome;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let backend = match setup(cli.config_dir.clone()) {
        Ok(backend) => backend,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut navigator = ConsoleNavigator::stdout();
    let outcome = execute(&cli.command, &backend, &mut navigator).await;

    match outcome {
        Outcome::Navigate(_) => ExitCode::SUCCESS,
        Outcome::Notice(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Outcome::Failed { code, message, .. } => {
            error!("{} failed: {code}", cli.command.role());
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        Outcome::Busy | Outcome::Abandoned => ExitCode::FAILURE,
    }
}

fn setup(config_dir: Option<PathBuf>) -> CliResult<Backend> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };
    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let log_file = config.logging.file.as_ref().map(|file| config_dir.join(file));
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting givelink v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Backend::remote(config)
}
