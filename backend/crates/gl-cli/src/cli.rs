use crate::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "givelink")]
#[command(about = "Register, sign in and reset passwords for GiveLink volunteer and store accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config directory (defaults to $GL_CONFIG_DIR, then ./.givelink)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}
