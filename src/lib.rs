//! wp-bootstrap - environment-driven bootstrap for WordPress containers
//!
//! Reads database credentials, keys and salts from the process environment,
//! assembles an immutable [`RuntimeConfig`] once, and hands it to the platform
//! runtime explicitly instead of through process-wide globals.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration records, errors, ports
//! - **Infrastructure Layer** (`infrastructure`): environment sources, loaders,
//!   logging, platform process handoff
//! - **Service Layer** (`services`): the bootstrap driver and secret generation
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use wp_bootstrap::{ConfigLoader, LoadMode};
//!
//! let env: HashMap<String, String> = [
//!     ("MYSQL_DATABASE", "wp"),
//!     ("WORDPRESS_TABLE_PREFIX", "wp_"),
//!     ("WORDPRESS_DEBUG", "true"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let config = ConfigLoader::new(LoadMode::Lenient).load_from(&env).unwrap();
//! assert_eq!(config.table_prefix(), "wp_");
//! assert!(config.debug_enabled());
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{ConfigError, HandoffError, SettingsError};
pub use domain::models::{
    AuthSecrets, BootstrapSettings, DatabaseSettings, LoadMode, PlatformPolicy, RuntimeConfig,
    Secret,
};
pub use domain::ports::{EnvSource, PlatformEntrypoint};
pub use infrastructure::config::{BootContext, ConfigLoader, SettingsLoader};
pub use infrastructure::env::{DotenvFile, ProcessEnv};
pub use infrastructure::platform::ProcessEntrypoint;
pub use services::Bootstrap;
