//! Configuration management infrastructure
//!
//! - `ConfigLoader`: environment variables to `RuntimeConfig` (strict or lenient)
//! - `BootContext`: guarded one-time initialisation of the base path
//! - `SettingsLoader`: the bootstrap's own settings via figment (defaults, YAML, env)

pub mod boot_context;
pub mod loader;
pub mod settings;

pub use boot_context::BootContext;
pub use loader::{ConfigLoader, PLACEHOLDER_PHRASE};
pub use settings::SettingsLoader;
