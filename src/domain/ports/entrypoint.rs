use crate::domain::errors::HandoffError;
use crate::domain::models::RuntimeConfig;

/// The external platform's startup routine.
///
/// Receives the configuration by value: after the handoff the bootstrap keeps
/// no copy of it.
pub trait PlatformEntrypoint {
    /// Transfer control to the platform.
    ///
    /// Implementations that replace the current process only return on
    /// failure. Others return the platform's exit code once it finishes.
    fn hand_off(&self, config: RuntimeConfig) -> Result<i32, HandoffError>;
}
