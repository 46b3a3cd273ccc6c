//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvSource: where raw variable values come from
//! - PlatformEntrypoint: who receives the assembled configuration
//!
//! The loader and the driver only see these traits, so both can be exercised
//! against in-memory maps and recording entrypoints.

pub mod entrypoint;
pub mod env_source;

pub use entrypoint::PlatformEntrypoint;
pub use env_source::EnvSource;
