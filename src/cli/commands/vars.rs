//! Implementation of the `wp-bootstrap vars` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::context::CommandContext;
use crate::cli::output::table::VariableRow;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::runtime_config::{MYSQL_PASSWORD, WORDPRESS_DEBUG};
use crate::domain::models::{CONSUMED_VARIABLES, SECRET_VARIABLES};
use crate::domain::ports::EnvSource;

#[derive(Debug, Serialize)]
pub struct VarsOutput {
    pub variables: Vec<VariableRow>,
}

impl VarsOutput {
    /// Presence of each consumed variable in `env`; values are never read out
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        let variables = CONSUMED_VARIABLES
            .iter()
            .map(|&name| VariableRow {
                name,
                set: env.contains(name),
                required: name != WORDPRESS_DEBUG,
                secret: name == MYSQL_PASSWORD
                    || SECRET_VARIABLES.iter().any(|(variable, _)| *variable == name),
            })
            .collect();
        Self { variables }
    }
}

impl CommandOutput for VarsOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_variables(&self.variables)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(ctx: &CommandContext, json_mode: bool) -> Result<i32> {
    let env = ctx.env_source()?;
    output(&VarsOutput::from_env(&env), json_mode);
    Ok(0)
}
