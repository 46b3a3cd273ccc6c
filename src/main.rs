//! wp-bootstrap CLI entry point.

use clap::Parser;

use wp_bootstrap::cli::{execute, handle_error, Cli};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let env_file = cli.env_file.clone();

    match execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => handle_error(&err, json, env_file.as_deref()),
    }
}
