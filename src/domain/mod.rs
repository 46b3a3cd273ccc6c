//! Domain layer for the bootstrap
//!
//! Configuration records, the error taxonomy, and the ports the loader and
//! driver are written against.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, HandoffError, SettingsError};
