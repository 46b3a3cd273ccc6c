use std::ffi::OsString;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};
use std::sync::OnceLock;
use tracing::debug;

/// One-time process initialisation state shared by the bootstrap stages.
///
/// The platform root may be fixed by an earlier stage (a settings file, a
/// wrapper script); later stages only fill it in when nobody has yet.
#[derive(Debug, Default)]
pub struct BootContext {
    base_path: OnceLock<PathBuf>,
}

impl BootContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose base path was already established by an earlier stage
    pub fn with_base_path(path: impl AsRef<Path>) -> Self {
        let ctx = Self::new();
        ctx.establish_base_path(path);
        ctx
    }

    /// Set the base path unless one is already set, and return the value in effect.
    ///
    /// The stored path always ends in a separator. Calling this again is a no-op.
    pub fn establish_base_path(&self, candidate: impl AsRef<Path>) -> &Path {
        let mut first = false;
        let path = self.base_path.get_or_init(|| {
            first = true;
            with_trailing_separator(candidate.as_ref())
        });
        if first {
            debug!(base_path = %path.display(), "base path established");
        } else {
            debug!(
                base_path = %path.display(),
                ignored = %candidate.as_ref().display(),
                "base path already established"
            );
        }
        path
    }

    /// The base path, if any stage has set it
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.get().map(PathBuf::as_path)
    }

    pub fn is_initialized(&self) -> bool {
        self.base_path.get().is_some()
    }
}

/// Append a path separator unless the path already ends in one
pub fn with_trailing_separator(path: &Path) -> PathBuf {
    let raw = path.as_os_str();
    let ends_with_separator = raw
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator);
    if ends_with_separator {
        return path.to_path_buf();
    }
    let mut owned = OsString::from(raw);
    owned.push(MAIN_SEPARATOR_STR);
    PathBuf::from(owned)
}
