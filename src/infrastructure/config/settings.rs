use anyhow::Context;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::errors::SettingsError;
use crate::domain::models::BootstrapSettings;

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "wp-bootstrap.yaml";

/// Prefix of environment variables overriding settings
pub const ENV_PREFIX: &str = "WP_BOOTSTRAP_";

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML settings file (`path`, or `wp-bootstrap.yaml` when `None`), optional
    /// 3. Environment variables (`WP_BOOTSTRAP_*`, `__` separates nesting levels)
    pub fn load(path: Option<&Path>) -> anyhow::Result<BootstrapSettings> {
        let path = path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), Path::to_path_buf);
        let figment = Figment::new()
            .merge(Serialized::defaults(BootstrapSettings::default()))
            .merge(Yaml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let settings = Self::extract(&figment)
            .with_context(|| format!("Failed to load settings (file: {})", path.display()))?;
        debug!(path = %path.display(), mode = %settings.mode, "settings loaded");
        Ok(settings)
    }

    /// Extract and validate settings from an already assembled figment
    pub fn extract(figment: &Figment) -> Result<BootstrapSettings, SettingsError> {
        let settings: BootstrapSettings = figment.extract().map_err(Box::new)?;
        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &BootstrapSettings) -> Result<(), SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        if settings.entrypoint.program.trim().is_empty() {
            return Err(SettingsError::EmptyEntrypoint);
        }

        Ok(())
    }

    /// Directory the configuration artifact lives in.
    ///
    /// The settings file's directory when the file exists, otherwise the
    /// current working directory.
    pub fn artifact_dir(settings_path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let path = settings_path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE), Path::to_path_buf);
        if path.is_file() {
            let absolute = path
                .canonicalize()
                .with_context(|| format!("Failed to resolve {}", path.display()))?;
            if let Some(parent) = absolute.parent() {
                return Ok(parent.to_path_buf());
            }
        }
        std::env::current_dir().context("Failed to get current directory")
    }
}
