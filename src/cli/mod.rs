//! Command-line interface
//!
//! `main` parses [`Cli`], then [`execute`] dispatches to the command modules
//! and [`handle_error`] reports failures.

pub mod commands;
pub mod context;
pub mod output;
pub mod types;

use anyhow::Result;
use console::style;

pub use context::CommandContext;
pub use types::{Cli, Commands, RunArgs, ShowArgs};

use std::path::Path;

use crate::infrastructure::env::{scan_assignments, DotenvFile, ProcessEnv};
use crate::infrastructure::logging::{LoggerImpl, SecretScrubber};

/// Run the parsed command line, returning the process exit code
pub fn execute(cli: Cli) -> Result<i32> {
    let ctx = CommandContext::from_cli(&cli)?;
    let logger = LoggerImpl::init(&ctx.settings.logging)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(&args, &ctx, logger),
        Commands::Check => commands::check::execute(&ctx, cli.json),
        Commands::Show(args) => commands::show::execute(&args, &ctx, cli.json),
        Commands::Vars => commands::vars::execute(&ctx, cli.json),
        Commands::GenerateSecrets => commands::generate::execute(cli.json),
    }
}

/// Scrubber for error reports.
///
/// Knows the secrets of the process environment and of `env_file`, the same
/// sources the command read. A file dotenvy rejected is scanned line by line,
/// since the parse error may quote the offending line.
pub fn error_scrubber(env_file: Option<&Path>) -> SecretScrubber {
    let scrubber = SecretScrubber::from_env(&ProcessEnv);
    let Some(path) = env_file else {
        return scrubber;
    };
    match DotenvFile::<ProcessEnv>::read(path) {
        Ok(file) => scrubber.with_env(&file),
        Err(_) => scrubber.with_env(&scan_assignments(path)),
    }
}

/// Print `err` with secrets scrubbed and exit with status 1
pub fn handle_error(err: &anyhow::Error, json_mode: bool, env_file: Option<&Path>) -> ! {
    let scrubber = error_scrubber(env_file);
    let chain: Vec<String> = err.chain().map(|e| scrubber.scrub(&e.to_string())).collect();

    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": chain.first(),
            "causes": chain.iter().skip(1).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {}", style("Error:").red().bold(), chain.join(": "));
    }
    std::process::exit(1)
}
