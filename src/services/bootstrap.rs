//! Bootstrap driver: load the environment once, then hand off to the platform.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::domain::errors::ConfigError;
use crate::domain::models::{BootstrapSettings, RuntimeConfig};
use crate::domain::ports::{EnvSource, PlatformEntrypoint};
use crate::infrastructure::config::{BootContext, ConfigLoader};

/// Wires an environment source, a loader and a platform entrypoint together.
///
/// The loader never calls the platform itself; `run` is the only place the
/// configuration crosses over, and it does so exactly once.
pub struct Bootstrap<E, P> {
    loader: ConfigLoader,
    env: E,
    ctx: BootContext,
    entrypoint: P,
}

impl<E: EnvSource, P: PlatformEntrypoint> Bootstrap<E, P> {
    pub fn new(loader: ConfigLoader, env: E, entrypoint: P) -> Self {
        Self {
            loader,
            env,
            ctx: BootContext::new(),
            entrypoint,
        }
    }

    /// Driver for `settings`.
    ///
    /// An explicit `base_path` in the settings counts as an earlier
    /// initialisation stage and wins over `artifact_dir`.
    pub fn from_settings(
        settings: &BootstrapSettings,
        artifact_dir: impl Into<PathBuf>,
        env: E,
        entrypoint: P,
    ) -> Self {
        let ctx = settings
            .base_path
            .as_ref()
            .map_or_else(BootContext::new, BootContext::with_base_path);
        Self {
            loader: ConfigLoader::from_settings(settings, artifact_dir),
            env,
            ctx,
            entrypoint,
        }
    }

    pub const fn context(&self) -> &BootContext {
        &self.ctx
    }

    /// Resolve the runtime configuration without handing it off
    pub fn prepare(&self) -> Result<RuntimeConfig, ConfigError> {
        self.loader.load(&self.env, &self.ctx)
    }

    /// Transfer `config` to the platform, returning its exit code
    pub fn hand_off(&self, config: RuntimeConfig) -> Result<i32> {
        self.entrypoint
            .hand_off(config)
            .context("Platform handoff failed")
    }

    /// Prepare and hand off in one linear pass
    pub fn run(&self) -> Result<i32> {
        let config = self
            .prepare()
            .context("Failed to load runtime configuration")?;
        info!(mode = %self.loader.mode(), "configuration ready");
        self.hand_off(config)
    }
}
