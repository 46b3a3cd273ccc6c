use proptest::prelude::*;
use std::collections::HashMap;

use wp_bootstrap::domain::models::CONSUMED_VARIABLES;
use wp_bootstrap::infrastructure::config::PLACEHOLDER_PHRASE;
use wp_bootstrap::{BootContext, ConfigError, ConfigLoader, LoadMode, ProcessEnv};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test_end_to_end_scenario() {
    let env = env(&[
        ("MYSQL_DATABASE", "wp"),
        ("MYSQL_USER", "u"),
        ("MYSQL_PASSWORD", "p"),
        ("WORDPRESS_DB_HOST", "db:3306"),
        ("WORDPRESS_TABLE_PREFIX", "wp_"),
        ("WORDPRESS_DEBUG", "true"),
    ]);

    let config = ConfigLoader::new(LoadMode::Lenient).load_from(&env).unwrap();

    assert_eq!(config.database().name, "wp");
    assert_eq!(config.database().user, "u");
    assert_eq!(config.database().password.expose(), "p");
    assert_eq!(config.database().host, "db:3306");
    assert_eq!(config.table_prefix(), "wp_");
    assert!(config.debug_enabled());
    // Keys and salts were not supplied
    assert!(config.secrets().auth_key.is_empty());
}

#[test]
fn test_end_to_end_scenario_strict_needs_secrets() {
    let env = env(&[
        ("MYSQL_DATABASE", "wp"),
        ("MYSQL_USER", "u"),
        ("MYSQL_PASSWORD", "p"),
        ("WORDPRESS_DB_HOST", "db:3306"),
        ("WORDPRESS_TABLE_PREFIX", "wp_"),
    ]);

    let err = ConfigLoader::new(LoadMode::Strict).load_from(&env).unwrap_err();
    assert_eq!(err, ConfigError::MissingVariable("WP_AUTH_KEY".to_string()));
}

#[test]
fn test_missing_table_prefix_in_both_modes() {
    let mut full: HashMap<String, String> = CONSUMED_VARIABLES
        .iter()
        .map(|name| ((*name).to_string(), format!("{name}_value")))
        .collect();
    full.remove("WORDPRESS_TABLE_PREFIX");

    let lenient = ConfigLoader::new(LoadMode::Lenient).load_from(&full).unwrap();
    assert_eq!(lenient.table_prefix(), "");

    let strict = ConfigLoader::new(LoadMode::Strict).load_from(&full);
    assert_eq!(
        strict.unwrap_err(),
        ConfigError::MissingVariable("WORDPRESS_TABLE_PREFIX".to_string())
    );
}

#[test]
fn test_base_path_initialised_once_per_context() {
    let env = env(&[]);
    let ctx = BootContext::new();

    let once = ConfigLoader::default()
        .with_artifact_dir("/var/www/html")
        .load(&env, &ctx)
        .unwrap();
    let twice = ConfigLoader::default()
        .with_artifact_dir("/elsewhere")
        .load(&env, &ctx)
        .unwrap();

    assert_eq!(once.base_path(), twice.base_path());
    assert!(once
        .base_path()
        .to_string_lossy()
        .ends_with(std::path::MAIN_SEPARATOR));
}

#[test]
fn test_loads_from_process_environment() {
    temp_env::with_vars(
        [
            ("MYSQL_DATABASE", Some("procdb")),
            ("WORDPRESS_TABLE_PREFIX", Some("site1_")),
            ("WORDPRESS_DEBUG", Some("TRUE")),
        ],
        || {
            let config = ConfigLoader::default().load_from(&ProcessEnv).unwrap();
            assert_eq!(config.database().name, "procdb");
            assert_eq!(config.table_prefix(), "site1_");
            assert!(!config.debug_enabled());
        },
    );
}

#[test]
fn test_debug_literal_cases() {
    for (raw, expected) in [("true", true), ("TRUE", false), ("1", false), ("", false)] {
        let config = ConfigLoader::default()
            .load_from(&env(&[("WORDPRESS_DEBUG", raw)]))
            .unwrap();
        assert_eq!(config.debug_enabled(), expected, "WORDPRESS_DEBUG={raw:?}");
    }
    let unset = ConfigLoader::default().load_from(&env(&[])).unwrap();
    assert!(!unset.debug_enabled());
}

proptest! {
    /// Property: every supplied value reaches the configuration untouched
    ///
    /// Whitespace, unicode and boolean-looking strings are all copied as-is;
    /// only the debug flag is derived.
    #[test]
    fn prop_values_copied_verbatim(values in proptest::collection::vec(".{1,40}", 14)) {
        let env: HashMap<String, String> = CONSUMED_VARIABLES
            .iter()
            .zip(values.iter())
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();

        let config = ConfigLoader::new(LoadMode::Lenient).load_from(&env).unwrap();

        prop_assert_eq!(&config.database().name, &env["MYSQL_DATABASE"]);
        prop_assert_eq!(&config.database().user, &env["MYSQL_USER"]);
        prop_assert_eq!(config.database().password.expose(), env["MYSQL_PASSWORD"].as_str());
        prop_assert_eq!(&config.database().host, &env["WORDPRESS_DB_HOST"]);
        prop_assert_eq!(config.table_prefix(), env["WORDPRESS_TABLE_PREFIX"].as_str());
        for entry in config.secrets().entries() {
            prop_assert_eq!(entry.value.expose(), env[entry.variable].as_str());
        }
        prop_assert_eq!(config.debug_enabled(), env["WORDPRESS_DEBUG"] == "true");
    }

    /// Property: strict mode accepts any fully populated environment
    ///
    /// Only absence is fatal; unusual but non-empty values, table prefix
    /// included, load exactly as given.
    #[test]
    fn prop_strict_loads_any_populated_environment(
        values in proptest::collection::vec(".{1,40}", 14)
    ) {
        prop_assume!(!values.iter().any(|v| v == PLACEHOLDER_PHRASE));
        let env: HashMap<String, String> = CONSUMED_VARIABLES
            .iter()
            .zip(values.iter())
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();

        let config = ConfigLoader::new(LoadMode::Strict).load_from(&env);
        prop_assert!(config.is_ok(), "strict load failed: {:?}", config.as_ref().err());
        let config = config.unwrap();

        prop_assert_eq!(&config.database().name, &env["MYSQL_DATABASE"]);
        prop_assert_eq!(config.database().password.expose(), env["MYSQL_PASSWORD"].as_str());
        prop_assert_eq!(config.table_prefix(), env["WORDPRESS_TABLE_PREFIX"].as_str());
        for entry in config.secrets().entries() {
            prop_assert_eq!(entry.value.expose(), env[entry.variable].as_str());
        }
    }

    /// Property: debug is enabled by exactly one raw value
    #[test]
    fn prop_debug_only_for_exact_true(raw in proptest::option::of(".{0,8}")) {
        let mut env = HashMap::new();
        if let Some(ref raw) = raw {
            env.insert("WORDPRESS_DEBUG".to_string(), raw.clone());
        }
        let config = ConfigLoader::default().load_from(&env).unwrap();
        prop_assert_eq!(config.debug_enabled(), raw.as_deref() == Some("true"));
    }

    /// Property: the fixed policy never depends on the environment
    #[test]
    fn prop_fixed_constants_invariant(
        values in proptest::collection::vec(".{0,20}", 14),
        strict in any::<bool>()
    ) {
        let env: HashMap<String, String> = CONSUMED_VARIABLES
            .iter()
            .zip(values)
            .map(|(name, value)| ((*name).to_string(), value))
            .collect();
        let mode = if strict { LoadMode::Strict } else { LoadMode::Lenient };

        if let Ok(config) = ConfigLoader::new(mode).load_from(&env) {
            let policy = config.policy();
            prop_assert!(policy.disallow_file_edit);
            prop_assert!(policy.force_ssl_admin);
            prop_assert_eq!(policy.post_revision_limit, 3);
            prop_assert_eq!(policy.memory_limit, "256M");
            prop_assert!(policy.auto_updater_disabled);
            prop_assert_eq!(policy.trash_retention_days, 7);
            prop_assert_eq!(config.database().charset, "utf8mb4");
            prop_assert_eq!(config.database().collate, "");
        }
    }
}

#[test]
fn test_strict_accepts_hyphenated_prefix() {
    let mut env: HashMap<String, String> = CONSUMED_VARIABLES
        .iter()
        .map(|name| ((*name).to_string(), format!("{name}_value")))
        .collect();
    env.insert("WORDPRESS_TABLE_PREFIX".to_string(), "wp-".to_string());

    let config = ConfigLoader::new(LoadMode::Strict).load_from(&env).unwrap();
    assert_eq!(config.table_prefix(), "wp-");
}
