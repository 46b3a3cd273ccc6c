use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{info, instrument, warn};

use super::boot_context::BootContext;
use crate::domain::errors::ConfigError;
use crate::domain::models::runtime_config::{
    DB_CHARSET, DB_COLLATE, MYSQL_DATABASE, MYSQL_PASSWORD, MYSQL_USER, WORDPRESS_DB_HOST,
    WORDPRESS_DEBUG, WORDPRESS_TABLE_PREFIX, WP_AUTH_KEY, WP_AUTH_SALT, WP_LOGGED_IN_KEY,
    WP_LOGGED_IN_SALT, WP_NONCE_KEY, WP_NONCE_SALT, WP_SECURE_AUTH_KEY, WP_SECURE_AUTH_SALT,
};
use crate::domain::models::{
    AuthSecrets, BootstrapSettings, DatabaseSettings, LoadMode, RuntimeConfig, Secret,
};
use crate::domain::ports::EnvSource;

/// Phrase shipped in the platform's sample configuration in place of real keys
pub const PLACEHOLDER_PHRASE: &str = "put your unique phrase here";

static TABLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("table prefix pattern is valid"));

/// Builds a [`RuntimeConfig`] from an environment in a single pass.
///
/// Values are copied verbatim. The only derived fields are `debug_enabled`
/// (exactly `"true"` enables it) and the base path, which comes from the
/// [`BootContext`] or, when no earlier stage set one, the artifact directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    mode: LoadMode,
    artifact_dir: PathBuf,
    min_secret_length: usize,
}

impl ConfigLoader {
    pub fn new(mode: LoadMode) -> Self {
        Self {
            mode,
            artifact_dir: PathBuf::from("."),
            min_secret_length: 0,
        }
    }

    /// Loader configured from bootstrap settings
    pub fn from_settings(settings: &BootstrapSettings, artifact_dir: impl Into<PathBuf>) -> Self {
        Self::new(settings.mode)
            .with_artifact_dir(artifact_dir)
            .with_min_secret_length(settings.min_secret_length)
    }

    /// Directory holding the configuration artifact; the base path fallback
    #[must_use]
    pub fn with_artifact_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.artifact_dir = dir.into();
        self
    }

    /// Minimum key/salt length in characters (0 disables the check)
    #[must_use]
    pub const fn with_min_secret_length(mut self, min: usize) -> Self {
        self.min_secret_length = min;
        self
    }

    pub const fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn artifact_dir(&self) -> &Path {
        &self.artifact_dir
    }

    /// Load using a fresh [`BootContext`]
    pub fn load_from<E: EnvSource + ?Sized>(&self, env: &E) -> Result<RuntimeConfig, ConfigError> {
        self.load(env, &BootContext::new())
    }

    /// Read every consumed variable, validate, and assemble the configuration.
    #[instrument(skip_all, fields(mode = %self.mode))]
    pub fn load<E: EnvSource + ?Sized>(
        &self,
        env: &E,
        ctx: &BootContext,
    ) -> Result<RuntimeConfig, ConfigError> {
        let database = DatabaseSettings {
            name: self.required(env, MYSQL_DATABASE)?,
            user: self.required(env, MYSQL_USER)?,
            password: Secret::new(self.required(env, MYSQL_PASSWORD)?),
            host: self.required(env, WORDPRESS_DB_HOST)?,
            charset: DB_CHARSET,
            collate: DB_COLLATE,
        };

        let secrets = AuthSecrets {
            auth_key: self.secret(env, WP_AUTH_KEY)?,
            secure_auth_key: self.secret(env, WP_SECURE_AUTH_KEY)?,
            logged_in_key: self.secret(env, WP_LOGGED_IN_KEY)?,
            nonce_key: self.secret(env, WP_NONCE_KEY)?,
            auth_salt: self.secret(env, WP_AUTH_SALT)?,
            secure_auth_salt: self.secret(env, WP_SECURE_AUTH_SALT)?,
            logged_in_salt: self.secret(env, WP_LOGGED_IN_SALT)?,
            nonce_salt: self.secret(env, WP_NONCE_SALT)?,
        };

        let table_prefix = self.required(env, WORDPRESS_TABLE_PREFIX)?;
        let debug_enabled = env.var(WORDPRESS_DEBUG).is_some_and(|raw| raw == "true");

        self.check_table_prefix(&table_prefix)?;
        self.check_secrets(&secrets)?;

        let base_path = ctx.establish_base_path(&self.artifact_dir).to_path_buf();

        info!(
            db_host = %database.host,
            table_prefix = %table_prefix,
            debug_enabled,
            base_path = %base_path.display(),
            "runtime configuration loaded"
        );

        Ok(RuntimeConfig::new(
            database,
            table_prefix,
            secrets,
            debug_enabled,
            base_path,
        ))
    }

    fn required<E: EnvSource + ?Sized>(&self, env: &E, name: &str) -> Result<String, ConfigError> {
        match env.var(name) {
            Some(value) => Ok(value),
            None => match self.mode {
                LoadMode::Strict => Err(ConfigError::MissingVariable(name.to_string())),
                LoadMode::Lenient => {
                    warn!(variable = name, "required variable not set, using empty value");
                    Ok(String::new())
                }
            },
        }
    }

    fn secret<E: EnvSource + ?Sized>(&self, env: &E, name: &str) -> Result<Secret, ConfigError> {
        self.required(env, name).map(Secret::from)
    }

    fn check_table_prefix(&self, prefix: &str) -> Result<(), ConfigError> {
        if prefix.is_empty() {
            // Absent was already reported by `required`
            return if self.mode == LoadMode::Strict {
                Err(ConfigError::EmptyVariable(WORDPRESS_TABLE_PREFIX.to_string()))
            } else {
                Ok(())
            };
        }
        // Reported in both modes; the value is still copied verbatim
        if !TABLE_PREFIX.is_match(prefix) {
            warn!(
                error = %ConfigError::InvalidTablePrefix(prefix.to_string()),
                "unusual table prefix"
            );
        }
        Ok(())
    }

    fn check_secrets(&self, secrets: &AuthSecrets) -> Result<(), ConfigError> {
        for entry in secrets.entries() {
            let value = entry.value;
            if value.is_empty() {
                if self.mode == LoadMode::Strict {
                    return Err(ConfigError::EmptyVariable(entry.variable.to_string()));
                }
                continue;
            }
            if value.expose() == PLACEHOLDER_PHRASE {
                self.violation(ConfigError::PlaceholderSecret(entry.variable.to_string()))?;
                continue;
            }
            let actual = value.char_len();
            if actual < self.min_secret_length {
                self.violation(ConfigError::WeakSecret {
                    name: entry.variable.to_string(),
                    min: self.min_secret_length,
                    actual,
                })?;
            }
        }
        Ok(())
    }

    /// Strict mode fails on `err`; lenient mode logs it and carries on.
    fn violation(&self, err: ConfigError) -> Result<(), ConfigError> {
        match self.mode {
            LoadMode::Strict => Err(err),
            LoadMode::Lenient => {
                warn!(error = %err, "configuration problem ignored in lenient mode");
                Ok(())
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(LoadMode::default())
    }
}
