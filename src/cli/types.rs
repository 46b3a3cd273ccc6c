//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::models::LoadMode;

#[derive(Parser, Debug)]
#[command(name = "wp-bootstrap")]
#[command(
    about = "Validate the WordPress environment and hand off to the platform",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file (defaults to ./wp-bootstrap.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read variables from a dotenv file; the process environment still wins
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Fail on missing or malformed variables
    #[arg(long, global = true, conflicts_with = "lenient")]
    pub strict: bool,

    /// Treat missing variables as empty
    #[arg(long, global = true)]
    pub lenient: bool,
}

impl Cli {
    /// Mode requested on the command line, if any
    pub const fn mode_override(&self) -> Option<LoadMode> {
        if self.strict {
            Some(LoadMode::Strict)
        } else if self.lenient {
            Some(LoadMode::Lenient)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the environment and hand off to the platform runtime
    Run(RunArgs),

    /// Validate the environment without starting the platform
    Check,

    /// Print the resolved configuration
    Show(ShowArgs),

    /// List the environment variables the bootstrap reads
    Vars,

    /// Print freshly generated keys and salts
    GenerateSecrets,
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Spawn the platform and wait instead of replacing this process
    #[arg(long)]
    pub no_exec: bool,

    /// Platform command line, replacing the configured program and script
    #[arg(last = true)]
    pub command: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Print secret values instead of redacting them
    #[arg(long)]
    pub reveal: bool,
}
