//! Platform handoff
//!
//! Implementations of the `PlatformEntrypoint` port.

pub mod process;

pub use process::ProcessEntrypoint;
