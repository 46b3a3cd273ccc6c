use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How the loader treats absent or suspicious variables
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Absent variables become empty strings and failure is left to the platform
    #[default]
    Lenient,
    /// Absent or malformed variables abort startup with a [`ConfigError`](crate::domain::errors::ConfigError)
    Strict,
}

impl fmt::Display for LoadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => f.write_str("lenient"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Configuration of the bootstrap itself (not of the platform)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BootstrapSettings {
    /// Strict or lenient variable handling
    #[serde(default)]
    pub mode: LoadMode,

    /// Platform root established ahead of the loader; wins over the artifact directory
    #[serde(default)]
    pub base_path: Option<PathBuf>,

    /// Minimum key/salt length in characters, 0 disables the check
    #[serde(default)]
    pub min_secret_length: usize,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Platform process to hand off to
    #[serde(default)]
    pub entrypoint: EntrypointConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for a JSON log file (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation of the log file
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    Daily,
    Hourly,
    #[default]
    Never,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

/// The platform runtime process
///
/// The constant table (`DB_NAME` through `ABSPATH`) reaches the program only
/// through its environment. The target must define the platform constants
/// from those variables before loading the platform, typically a
/// `wp-config.php` that calls `getenv` and then requires `wp-settings.php`.
/// Stock `wp-settings.php` reads no environment and expects `ABSPATH` to be
/// defined already, so with a stock install point `script` at such a config
/// file or pass the full command line with `run -- <program> <args>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EntrypointConfig {
    /// Executable, looked up on `PATH` when not absolute
    #[serde(default = "default_program")]
    pub program: String,

    /// Bootstrap script, resolved against the base path; empty for none
    #[serde(default = "default_script")]
    pub script: String,

    /// Extra arguments appended after the script
    #[serde(default)]
    pub args: Vec<String>,

    /// Replace the current process instead of spawning a child (unix only)
    #[serde(default = "default_exec")]
    pub exec: bool,
}

fn default_program() -> String {
    "php".to_string()
}

fn default_script() -> String {
    "wp-settings.php".to_string()
}

const fn default_exec() -> bool {
    true
}

impl Default for EntrypointConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            script: default_script(),
            args: Vec::new(),
            exec: default_exec(),
        }
    }
}
