//! Environment sources
//!
//! - `ProcessEnv`: the real process environment
//! - `DotenvFile`: `KEY=value` file layered under the process environment
//! - `scan_assignments`: lossy read of a file dotenvy rejected

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env::{self, VarError};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::ports::EnvSource;

/// Reads variables from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(variable = name, "ignoring non UTF-8 environment value");
                None
            }
        }
    }
}

/// Variables read from a dotenv file, with an optional fallback consulted first.
///
/// Mirrors `env_file` in compose setups: a variable set in the process
/// environment wins over the same variable in the file.
#[derive(Debug, Clone)]
pub struct DotenvFile<E = ProcessEnv> {
    values: HashMap<String, String>,
    overlay: Option<E>,
}

impl DotenvFile<ProcessEnv> {
    /// Load `path` and layer it under the process environment
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::read(path)?.with_overlay(ProcessEnv))
    }
}

impl<E: EnvSource> DotenvFile<E> {
    /// Parse `path` without any overlay
    pub fn read(path: impl AsRef<Path>) -> Result<DotenvFile<E>> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open env file {}", path.display()))?;

        let mut values = HashMap::new();
        for item in iter {
            let (key, value) =
                item.with_context(|| format!("Failed to parse env file {}", path.display()))?;
            values.insert(key, value);
        }
        debug!(path = %path.display(), count = values.len(), "env file loaded");

        Ok(DotenvFile {
            values,
            overlay: None,
        })
    }

    /// Consult `overlay` before the file
    pub fn with_overlay<O: EnvSource>(self, overlay: O) -> DotenvFile<O> {
        DotenvFile {
            values: self.values,
            overlay: Some(overlay),
        }
    }

    /// Number of variables defined by the file itself
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<E: EnvSource> EnvSource for DotenvFile<E> {
    fn var(&self, name: &str) -> Option<String> {
        self.overlay
            .as_ref()
            .and_then(|overlay| overlay.var(name))
            .or_else(|| self.values.get(name).cloned())
    }
}

/// Best-effort `KEY=value` pairs from a file dotenvy could not parse.
///
/// Splits each line at the first `=`, dropping `export` and surrounding
/// quotes. Only used to learn which values must not be echoed back in the
/// parse error; never as a variable source.
pub fn scan_assignments(path: impl AsRef<Path>) -> HashMap<String, String> {
    let Ok(content) = fs::read_to_string(path) else {
        return HashMap::new();
    };
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_env_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_process_env_reads_variables() {
        temp_env::with_vars(
            [("WPB_TEST_PRESENT", Some("value")), ("WPB_TEST_ABSENT", None)],
            || {
                assert_eq!(ProcessEnv.var("WPB_TEST_PRESENT").as_deref(), Some("value"));
                assert_eq!(ProcessEnv.var("WPB_TEST_ABSENT"), None);
            },
        );
    }

    #[test]
    fn test_dotenv_file_values() {
        let file = write_env_file("MYSQL_DATABASE=wp\nWORDPRESS_TABLE_PREFIX=wp_\nEMPTY=\n");
        let source: DotenvFile<ProcessEnv> = DotenvFile::read(file.path()).unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.var("MYSQL_DATABASE").as_deref(), Some("wp"));
        assert_eq!(source.var("EMPTY").as_deref(), Some(""));
        assert_eq!(source.var("MISSING"), None);
    }

    #[test]
    fn test_overlay_wins_over_file() {
        let file = write_env_file("MYSQL_USER=from_file\nMYSQL_DATABASE=wp\n");
        let mut overlay = HashMap::new();
        overlay.insert("MYSQL_USER".to_string(), "from_process".to_string());

        let source = DotenvFile::<ProcessEnv>::read(file.path())
            .unwrap()
            .with_overlay(overlay);

        assert_eq!(source.var("MYSQL_USER").as_deref(), Some("from_process"));
        assert_eq!(source.var("MYSQL_DATABASE").as_deref(), Some("wp"));
    }

    #[test]
    fn test_missing_env_file_is_an_error() {
        let result = DotenvFile::<ProcessEnv>::read("/nonexistent/.env");
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_assignments_tolerates_broken_lines() {
        let file = write_env_file(
            "# comment\nexport MYSQL_USER=wp\nWP_NONCE_SALT=\"unterminated secret value\nnot an assignment\n",
        );
        let pairs = scan_assignments(file.path());

        assert_eq!(pairs.get("MYSQL_USER").map(String::as_str), Some("wp"));
        assert_eq!(
            pairs.get("WP_NONCE_SALT").map(String::as_str),
            Some("unterminated secret value")
        );
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_scan_assignments_missing_file_is_empty() {
        assert!(scan_assignments("/nonexistent/.env").is_empty());
    }
}
