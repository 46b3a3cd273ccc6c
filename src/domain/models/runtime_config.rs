use serde::Serialize;
use std::path::{Path, PathBuf};

use super::secret::Secret;

/// Database name
pub const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
/// Database user
pub const MYSQL_USER: &str = "MYSQL_USER";
/// Database password
pub const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
/// Database host, optionally with `:port` or socket suffix
pub const WORDPRESS_DB_HOST: &str = "WORDPRESS_DB_HOST";
/// Authentication key
pub const WP_AUTH_KEY: &str = "WP_AUTH_KEY";
/// Secure (HTTPS) authentication key
pub const WP_SECURE_AUTH_KEY: &str = "WP_SECURE_AUTH_KEY";
/// Logged-in cookie key
pub const WP_LOGGED_IN_KEY: &str = "WP_LOGGED_IN_KEY";
/// Nonce key
pub const WP_NONCE_KEY: &str = "WP_NONCE_KEY";
/// Authentication salt
pub const WP_AUTH_SALT: &str = "WP_AUTH_SALT";
/// Secure (HTTPS) authentication salt
pub const WP_SECURE_AUTH_SALT: &str = "WP_SECURE_AUTH_SALT";
/// Logged-in cookie salt
pub const WP_LOGGED_IN_SALT: &str = "WP_LOGGED_IN_SALT";
/// Nonce salt
pub const WP_NONCE_SALT: &str = "WP_NONCE_SALT";
/// Table namespace prefix
pub const WORDPRESS_TABLE_PREFIX: &str = "WORDPRESS_TABLE_PREFIX";
/// Debug toggle, enabled only by the exact value `true`
pub const WORDPRESS_DEBUG: &str = "WORDPRESS_DEBUG";

/// Every environment variable the loader consumes, in lookup order.
pub const CONSUMED_VARIABLES: [&str; 14] = [
    MYSQL_DATABASE,
    MYSQL_USER,
    MYSQL_PASSWORD,
    WORDPRESS_DB_HOST,
    WP_AUTH_KEY,
    WP_SECURE_AUTH_KEY,
    WP_LOGGED_IN_KEY,
    WP_NONCE_KEY,
    WP_AUTH_SALT,
    WP_SECURE_AUTH_SALT,
    WP_LOGGED_IN_SALT,
    WP_NONCE_SALT,
    WORDPRESS_TABLE_PREFIX,
    WORDPRESS_DEBUG,
];

/// Key and salt variables paired with the platform constant each one feeds.
pub const SECRET_VARIABLES: [(&str, &str); 8] = [
    (WP_AUTH_KEY, "AUTH_KEY"),
    (WP_SECURE_AUTH_KEY, "SECURE_AUTH_KEY"),
    (WP_LOGGED_IN_KEY, "LOGGED_IN_KEY"),
    (WP_NONCE_KEY, "NONCE_KEY"),
    (WP_AUTH_SALT, "AUTH_SALT"),
    (WP_SECURE_AUTH_SALT, "SECURE_AUTH_SALT"),
    (WP_LOGGED_IN_SALT, "LOGGED_IN_SALT"),
    (WP_NONCE_SALT, "NONCE_SALT"),
];

/// Database character set handed to the platform
pub const DB_CHARSET: &str = "utf8mb4";
/// Database collation; empty lets the server pick the charset default
pub const DB_COLLATE: &str = "";

/// Database connection parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    /// Schema name
    pub name: String,
    /// Login user
    pub user: String,
    /// Login password
    pub password: Secret,
    /// Host, `host:port` or socket path
    pub host: String,
    /// Always [`DB_CHARSET`]
    pub charset: &'static str,
    /// Always [`DB_COLLATE`]
    pub collate: &'static str,
}

/// The four keys and four salts used by the platform for cookie and nonce signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSecrets {
    pub auth_key: Secret,
    pub secure_auth_key: Secret,
    pub logged_in_key: Secret,
    pub nonce_key: Secret,
    pub auth_salt: Secret,
    pub secure_auth_salt: Secret,
    pub logged_in_salt: Secret,
    pub nonce_salt: Secret,
}

/// One key or salt together with where it came from and where it goes.
#[derive(Debug, Clone, Copy)]
pub struct SecretEntry<'a> {
    /// Source environment variable
    pub variable: &'static str,
    /// Platform constant name
    pub constant: &'static str,
    /// The value itself
    pub value: &'a Secret,
}

impl AuthSecrets {
    /// All eight secrets in [`SECRET_VARIABLES`] order
    pub fn entries(&self) -> [SecretEntry<'_>; 8] {
        let values = [
            &self.auth_key,
            &self.secure_auth_key,
            &self.logged_in_key,
            &self.nonce_key,
            &self.auth_salt,
            &self.secure_auth_salt,
            &self.logged_in_salt,
            &self.nonce_salt,
        ];
        let mut index = 0;
        values.map(|value| {
            let (variable, constant) = SECRET_VARIABLES[index];
            index += 1;
            SecretEntry {
                variable,
                constant,
                value,
            }
        })
    }
}

/// Hardening and housekeeping toggles that do not vary between deployments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformPolicy {
    pub disallow_file_edit: bool,
    pub force_ssl_admin: bool,
    pub post_revision_limit: u32,
    pub memory_limit: &'static str,
    pub auto_updater_disabled: bool,
    pub trash_retention_days: u32,
}

impl PlatformPolicy {
    /// The only policy this bootstrap ever produces
    pub const FIXED: Self = Self {
        disallow_file_edit: true,
        force_ssl_admin: true,
        post_revision_limit: 3,
        memory_limit: "256M",
        auto_updater_disabled: true,
        trash_retention_days: 7,
    };
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Startup parameters for the platform, resolved once per process.
///
/// Instances are only produced by
/// [`ConfigLoader`](crate::infrastructure::config::ConfigLoader) and expose
/// read-only accessors, so a loaded configuration cannot be altered before it
/// is handed off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeConfig {
    database: DatabaseSettings,
    table_prefix: String,
    secrets: AuthSecrets,
    debug_enabled: bool,
    policy: PlatformPolicy,
    base_path: PathBuf,
}

impl RuntimeConfig {
    pub(crate) fn new(
        database: DatabaseSettings,
        table_prefix: String,
        secrets: AuthSecrets,
        debug_enabled: bool,
        base_path: PathBuf,
    ) -> Self {
        Self {
            database,
            table_prefix,
            secrets,
            debug_enabled,
            policy: PlatformPolicy::FIXED,
            base_path,
        }
    }

    pub const fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub fn table_prefix(&self) -> &str {
        &self.table_prefix
    }

    pub const fn secrets(&self) -> &AuthSecrets {
        &self.secrets
    }

    pub const fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub const fn policy(&self) -> &PlatformPolicy {
        &self.policy
    }

    /// Platform root, always ending in a path separator
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The constant table handed to the platform, in definition order.
    ///
    /// Values are raw: secrets are exposed and booleans render as
    /// `true`/`false`.
    pub fn constants(&self) -> Vec<(&'static str, String)> {
        let db = &self.database;
        let mut table = vec![
            ("DB_NAME", db.name.clone()),
            ("DB_USER", db.user.clone()),
            ("DB_PASSWORD", db.password.expose().to_string()),
            ("DB_HOST", db.host.clone()),
            ("DB_CHARSET", db.charset.to_string()),
            ("DB_COLLATE", db.collate.to_string()),
        ];
        table.extend(
            self.secrets
                .entries()
                .into_iter()
                .map(|e| (e.constant, e.value.expose().to_string())),
        );

        let policy = &self.policy;
        table.extend([
            ("WP_TABLE_PREFIX", self.table_prefix.clone()),
            ("WP_DEBUG", self.debug_enabled.to_string()),
            ("DISALLOW_FILE_EDIT", policy.disallow_file_edit.to_string()),
            ("FORCE_SSL_ADMIN", policy.force_ssl_admin.to_string()),
            ("WP_POST_REVISIONS", policy.post_revision_limit.to_string()),
            ("WP_MEMORY_LIMIT", policy.memory_limit.to_string()),
            (
                "AUTOMATIC_UPDATER_DISABLED",
                policy.auto_updater_disabled.to_string(),
            ),
            ("EMPTY_TRASH_DAYS", policy.trash_retention_days.to_string()),
            ("ABSPATH", self.base_path.to_string_lossy().into_owned()),
        ]);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuntimeConfig {
        let secret = |v: &str| Secret::new(v);
        RuntimeConfig::new(
            DatabaseSettings {
                name: "wp".to_string(),
                user: "u".to_string(),
                password: secret("p"),
                host: "db:3306".to_string(),
                charset: DB_CHARSET,
                collate: DB_COLLATE,
            },
            "wp_".to_string(),
            AuthSecrets {
                auth_key: secret("k1"),
                secure_auth_key: secret("k2"),
                logged_in_key: secret("k3"),
                nonce_key: secret("k4"),
                auth_salt: secret("s1"),
                secure_auth_salt: secret("s2"),
                logged_in_salt: secret(""),
                nonce_salt: secret("s4"),
            },
            true,
            PathBuf::from("/var/www/html/"),
        )
    }

    #[test]
    fn test_fixed_policy_values() {
        let policy = PlatformPolicy::default();
        assert!(policy.disallow_file_edit);
        assert!(policy.force_ssl_admin);
        assert_eq!(policy.post_revision_limit, 3);
        assert_eq!(policy.memory_limit, "256M");
        assert!(policy.auto_updater_disabled);
        assert_eq!(policy.trash_retention_days, 7);
    }

    #[test]
    fn test_entries_follow_variable_order() {
        let config = sample();
        let entries = config.secrets().entries();
        assert_eq!(entries[0].variable, WP_AUTH_KEY);
        assert_eq!(entries[0].constant, "AUTH_KEY");
        assert_eq!(entries[0].value.expose(), "k1");
        assert_eq!(entries[7].variable, WP_NONCE_SALT);
        assert_eq!(entries[7].value.expose(), "s4");
    }

    #[test]
    fn test_constants_table() {
        let config = sample();
        let table = config.constants();
        assert_eq!(table.len(), 23);
        assert_eq!(table[0], ("DB_NAME", "wp".to_string()));
        assert_eq!(table[2], ("DB_PASSWORD", "p".to_string()));
        assert_eq!(table[4], ("DB_CHARSET", "utf8mb4".to_string()));
        assert_eq!(table[5], ("DB_COLLATE", String::new()));

        let lookup = |name: &str| {
            table
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(lookup("WP_DEBUG"), Some("true"));
        assert_eq!(lookup("WP_POST_REVISIONS"), Some("3"));
        assert_eq!(lookup("EMPTY_TRASH_DAYS"), Some("7"));
        assert_eq!(lookup("ABSPATH"), Some("/var/www/html/"));
        assert_eq!(table.last().map(|(k, _)| *k), Some("ABSPATH"));
    }

    #[test]
    fn test_serialized_config_has_no_raw_secrets() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("\"k1\""));
        assert!(json.contains("[REDACTED]"));
        assert!(json.contains("\"table_prefix\":\"wp_\""));
    }
}
