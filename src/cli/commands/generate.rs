//! Implementation of the `wp-bootstrap generate-secrets` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::services::secrets::{generate_secrets, to_dotenv, GeneratedSecret};

#[derive(Debug, Serialize)]
pub struct SecretsOutput {
    pub secrets: Vec<GeneratedSecret>,
}

impl CommandOutput for SecretsOutput {
    fn to_human(&self) -> String {
        to_dotenv(&self.secrets).trim_end().to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(json_mode: bool) -> Result<i32> {
    output(
        &SecretsOutput {
            secrets: generate_secrets(),
        },
        json_mode,
    );
    Ok(0)
}
