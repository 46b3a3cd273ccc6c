//! Domain errors for the bootstrap.

use thiserror::Error;

/// Errors raised while turning the environment into a [`RuntimeConfig`](crate::domain::models::RuntimeConfig).
///
/// Only strict mode produces these; lenient mode logs the same conditions and
/// carries on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVariable(String),

    #[error("Environment variable {0} is set but empty")]
    EmptyVariable(String),

    #[error("Invalid table prefix {0:?}: only ASCII letters, digits and underscores are allowed")]
    InvalidTablePrefix(String),

    #[error("{0} still holds the stock placeholder phrase")]
    PlaceholderSecret(String),

    #[error("{name} is {actual} characters long, at least {min} required")]
    WeakSecret {
        name: String,
        min: usize,
        actual: usize,
    },
}

/// Errors in the bootstrap's own settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Entrypoint program cannot be empty")]
    EmptyEntrypoint,
}

/// Errors while transferring control to the platform
#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to exec {program}: {source}")]
    Exec {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} was terminated by a signal")]
    Signalled(String),
}
