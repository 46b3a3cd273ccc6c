//! Infrastructure layer module
//!
//! This module contains the adapters between the bootstrap and the outside world:
//! - Environment sources (process environment, dotenv files)
//! - Configuration loading and validation
//! - Logging infrastructure
//! - Platform process handoff
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
pub mod platform;
