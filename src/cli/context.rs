//! State shared by every command: settings, artifact directory, variable source.

use anyhow::Result;
use std::path::PathBuf;

use super::types::Cli;
use crate::domain::models::BootstrapSettings;
use crate::domain::ports::{EnvSource, PlatformEntrypoint};
use crate::infrastructure::config::{BootContext, ConfigLoader, SettingsLoader};
use crate::infrastructure::env::{DotenvFile, ProcessEnv};
use crate::services::Bootstrap;

pub struct CommandContext {
    pub settings: BootstrapSettings,
    pub artifact_dir: PathBuf,
    pub env_file: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve settings from the global flags; command line mode flags win.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = SettingsLoader::load(cli.config.as_deref())?;
        if let Some(mode) = cli.mode_override() {
            settings.mode = mode;
        }
        let artifact_dir = SettingsLoader::artifact_dir(cli.config.as_deref())?;

        Ok(Self {
            settings,
            artifact_dir,
            env_file: cli.env_file.clone(),
        })
    }

    /// The process environment, layered over `--env-file` when given
    pub fn env_source(&self) -> Result<Box<dyn EnvSource>> {
        let source: Box<dyn EnvSource> = match self.env_file {
            Some(ref path) => Box::new(DotenvFile::load(path)?),
            None => Box::new(ProcessEnv),
        };
        Ok(source)
    }

    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::from_settings(&self.settings, &self.artifact_dir)
    }

    /// Boot context seeded with the settings' base path, if one is configured
    pub fn boot_context(&self) -> BootContext {
        self.settings
            .base_path
            .as_ref()
            .map_or_else(BootContext::new, BootContext::with_base_path)
    }

    pub fn bootstrap<P: PlatformEntrypoint>(
        &self,
        entrypoint: P,
    ) -> Result<Bootstrap<Box<dyn EnvSource>, P>> {
        Ok(Bootstrap::from_settings(
            &self.settings,
            &self.artifact_dir,
            self.env_source()?,
            entrypoint,
        ))
    }
}
