//! Implementation of the `wp-bootstrap check` command.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::context::CommandContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{LoadMode, CONSUMED_VARIABLES};

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub valid: bool,
    pub mode: LoadMode,
    pub unset: Vec<&'static str>,
    pub debug_enabled: bool,
    pub base_path: PathBuf,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{} environment is valid ({} mode)",
            style("✓").green().bold(),
            self.mode
        )];
        if !self.unset.is_empty() {
            lines.push(format!("\nNot set ({}):", self.unset.len()));
            for name in &self.unset {
                lines.push(format!("  - {name}"));
            }
        }
        lines.push(format!("\nBase path: {}", self.base_path.display()));
        if self.debug_enabled {
            lines.push("Debug mode: enabled".to_string());
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(ctx: &CommandContext, json_mode: bool) -> Result<i32> {
    let env = ctx.env_source()?;
    let unset: Vec<&'static str> = CONSUMED_VARIABLES
        .iter()
        .copied()
        .filter(|name| !env.contains(name))
        .collect();

    let config = ctx
        .loader()
        .load(&env, &ctx.boot_context())
        .context("Environment check failed")?;

    let output_data = CheckOutput {
        valid: true,
        mode: ctx.settings.mode,
        unset,
        debug_enabled: config.debug_enabled(),
        base_path: config.base_path().to_path_buf(),
    };
    output(&output_data, json_mode);
    Ok(0)
}
