use regex::Regex;
use std::fmt;

use crate::domain::models::runtime_config::MYSQL_PASSWORD;
use crate::domain::models::{REDACTED, SECRET_VARIABLES};
use crate::domain::ports::EnvSource;

/// Removes credentials from text before it reaches a terminal or log file.
///
/// Two passes: exact values known to be secret (the loaded keys, salts and
/// database password), then generic `password=...` / `key: ...` shapes.
#[derive(Clone)]
pub struct SecretScrubber {
    known: Vec<String>,
    assignment_pattern: Regex,
    bearer_pattern: Regex,
}

impl SecretScrubber {
    /// Create a scrubber that only knows the generic patterns
    pub fn new() -> Self {
        Self {
            known: Vec::new(),
            // password=..., "auth_key": "...", WP_NONCE_SALT=...
            assignment_pattern: Regex::new(
                r#"(?i)(["']?[a-z_]*(?:password|secret|token|key|salt)["']?\s*[:=]\s*)(?:"[^"]*"|'[^']*'|[^\s,}]+)"#,
            )
            .expect("assignment pattern is valid"),
            // Match Bearer tokens in Authorization headers
            bearer_pattern: Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.=]+")
                .expect("bearer pattern is valid"),
        }
    }

    /// Scrubber that also knows the password, key and salt values set in `env`
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self::new().with_env(env)
    }

    /// Also redact the password, key and salt values set in `env`
    #[must_use]
    pub fn with_env<E: EnvSource + ?Sized>(self, env: &E) -> Self {
        let names =
            std::iter::once(MYSQL_PASSWORD).chain(SECRET_VARIABLES.iter().map(|(v, _)| *v));
        self.with_known_secrets(names.filter_map(|name| env.var(name)))
    }

    /// Also redact these exact values wherever they appear
    #[must_use]
    pub fn with_known_secrets<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known.extend(
            secrets
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty()),
        );
        // Longest first so a secret containing another is replaced whole
        self.known
            .sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        self.known.dedup();
        self
    }

    /// Scrub a message of sensitive data
    pub fn scrub(&self, message: &str) -> String {
        let mut scrubbed = message.to_string();
        for secret in &self.known {
            scrubbed = scrubbed.replace(secret.as_str(), REDACTED);
        }
        scrubbed = self
            .bearer_pattern
            .replace_all(&scrubbed, "Bearer [REDACTED]")
            .into_owned();
        self.assignment_pattern
            .replace_all(&scrubbed, |caps: &regex::Captures| {
                format!("{}{REDACTED}", &caps[1])
            })
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber")
            .field("known", &self.known.len())
            .finish()
    }
}
