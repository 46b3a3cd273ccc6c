pub mod runtime_config;
pub mod secret;
pub mod settings;

pub use runtime_config::{
    AuthSecrets, DatabaseSettings, PlatformPolicy, RuntimeConfig, SecretEntry, CONSUMED_VARIABLES,
    SECRET_VARIABLES,
};
pub use secret::{Secret, REDACTED};
pub use settings::{
    BootstrapSettings, EntrypointConfig, LoadMode, LogFormat, LoggingConfig, RotationPolicy,
};
