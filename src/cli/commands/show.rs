//! Implementation of the `wp-bootstrap show` command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::context::CommandContext;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::cli::types::ShowArgs;
use crate::domain::models::{RuntimeConfig, REDACTED, SECRET_VARIABLES};

#[derive(Debug, Serialize)]
pub struct ConstantRow {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub revealed: bool,
    pub constants: Vec<ConstantRow>,
}

impl ShowOutput {
    /// Constant table of `config`, with secret values masked unless `reveal`
    pub fn from_config(config: &RuntimeConfig, reveal: bool) -> Self {
        let constants = config
            .constants()
            .into_iter()
            .map(|(name, value)| {
                let value = if !reveal && is_secret_constant(name) && !value.is_empty() {
                    REDACTED.to_string()
                } else {
                    value
                };
                ConstantRow { name, value }
            })
            .collect();
        Self {
            revealed: reveal,
            constants,
        }
    }
}

fn is_secret_constant(name: &str) -> bool {
    name == "DB_PASSWORD" || SECRET_VARIABLES.iter().any(|(_, constant)| *constant == name)
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .constants
            .iter()
            .map(|row| (row.name, row.value.clone()))
            .collect();
        TableFormatter::new().format_constants(&pairs)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: &ShowArgs, ctx: &CommandContext, json_mode: bool) -> Result<i32> {
    let env = ctx.env_source()?;
    let config = ctx
        .loader()
        .load(&env, &ctx.boot_context())
        .context("Failed to load runtime configuration")?;

    output(&ShowOutput::from_config(&config, args.reveal), json_mode);
    Ok(0)
}
