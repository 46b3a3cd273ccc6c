//! Secret string wrapper.
//!
//! Credentials and cryptographic keys travel through the loader as [`Secret`]
//! so that `Debug`, `Display` and serialized output never carry the raw value.
//! Code that genuinely needs the value (the platform handoff) calls
//! [`Secret::expose`].

use serde::{Serialize, Serializer};
use std::fmt;

/// Placeholder written wherever a secret value would otherwise be shown.
pub const REDACTED: &str = "[REDACTED]";

/// A string value that must not leak into logs or command output.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wrap a raw value without transforming it
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw value
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the underlying value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length of the value in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&REDACTED).finish()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}
