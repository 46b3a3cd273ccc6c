use std::process::Command;
use tracing::{debug, info};

use crate::domain::errors::HandoffError;
use crate::domain::models::{EntrypointConfig, RuntimeConfig};
use crate::domain::ports::PlatformEntrypoint;

/// Hands the configuration to the platform runtime as a child (or replacement) process.
///
/// The constant table is passed in the process environment on top of the
/// inherited one; the bootstrap script, resolved against the base path, is
/// the first argument.
#[derive(Debug, Clone)]
pub struct ProcessEntrypoint {
    config: EntrypointConfig,
}

impl ProcessEntrypoint {
    pub const fn new(config: EntrypointConfig) -> Self {
        Self { config }
    }

    /// Replace program and arguments, e.g. from `run -- <program> <args>`.
    ///
    /// The script is dropped: an explicit command line is taken as complete.
    #[must_use]
    pub fn with_command_line(mut self, program: String, args: Vec<String>) -> Self {
        self.config.program = program;
        self.config.script = String::new();
        self.config.args = args;
        self
    }

    #[must_use]
    pub const fn with_exec(mut self, exec: bool) -> Self {
        self.config.exec = exec;
        self
    }

    pub const fn config(&self) -> &EntrypointConfig {
        &self.config
    }

    /// Build the platform command for `runtime`
    pub fn build_command(&self, runtime: &RuntimeConfig) -> Command {
        let mut cmd = Command::new(&self.config.program);

        if !self.config.script.is_empty() {
            cmd.arg(runtime.base_path().join(&self.config.script));
        }
        cmd.args(&self.config.args);
        cmd.current_dir(runtime.base_path());
        cmd.envs(runtime.constants());

        cmd
    }

    fn spawn_and_wait(&self, mut cmd: Command) -> Result<i32, HandoffError> {
        let status = cmd.status().map_err(|source| HandoffError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;
        debug!(program = %self.config.program, %status, "platform exited");
        status
            .code()
            .ok_or_else(|| HandoffError::Signalled(self.config.program.clone()))
    }

    #[cfg(unix)]
    fn exec(&self, mut cmd: Command) -> Result<i32, HandoffError> {
        use std::os::unix::process::CommandExt;

        // Only returns on failure
        let source = cmd.exec();
        Err(HandoffError::Exec {
            program: self.config.program.clone(),
            source,
        })
    }

    #[cfg(not(unix))]
    fn exec(&self, cmd: Command) -> Result<i32, HandoffError> {
        self.spawn_and_wait(cmd)
    }
}

impl PlatformEntrypoint for ProcessEntrypoint {
    fn hand_off(&self, config: RuntimeConfig) -> Result<i32, HandoffError> {
        let cmd = self.build_command(&config);
        info!(
            program = %self.config.program,
            exec = self.config.exec,
            constants = config.constants().len(),
            "handing off to platform"
        );
        // The child owns the configuration from here on
        drop(config);

        if self.config.exec {
            self.exec(cmd)
        } else {
            self.spawn_and_wait(cmd)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;
    use std::collections::HashMap;
    use std::ffi::OsStr;
    use std::path::Path;

    fn runtime() -> RuntimeConfig {
        let env: HashMap<String, String> = [
            ("MYSQL_DATABASE", "wp"),
            ("MYSQL_PASSWORD", "p@ss"),
            ("WORDPRESS_TABLE_PREFIX", "wp_"),
            ("WORDPRESS_DEBUG", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        ConfigLoader::default()
            .with_artifact_dir(std::env::temp_dir())
            .load_from(&env)
            .unwrap()
    }

    fn env_value<'a>(cmd: &'a Command, name: &str) -> Option<&'a OsStr> {
        cmd.get_envs()
            .find(|(k, _)| *k == OsStr::new(name))
            .and_then(|(_, v)| v)
    }

    #[test]
    fn test_command_carries_constants_and_script() {
        let runtime = runtime();
        let entry = ProcessEntrypoint::new(EntrypointConfig {
            args: vec!["-d".to_string(), "display_errors=0".to_string()],
            ..EntrypointConfig::default()
        });
        let cmd = entry.build_command(&runtime);

        assert_eq!(cmd.get_program(), "php");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.len(), 3);
        assert_eq!(
            Path::new(args[0]),
            runtime.base_path().join("wp-settings.php")
        );
        assert_eq!(args[1], "-d");

        assert_eq!(env_value(&cmd, "DB_NAME"), Some(OsStr::new("wp")));
        assert_eq!(env_value(&cmd, "DB_PASSWORD"), Some(OsStr::new("p@ss")));
        assert_eq!(env_value(&cmd, "WP_DEBUG"), Some(OsStr::new("true")));
        assert_eq!(env_value(&cmd, "WP_POST_REVISIONS"), Some(OsStr::new("3")));
        assert_eq!(cmd.get_current_dir(), Some(runtime.base_path()));
    }

    #[test]
    fn test_command_env_carries_full_constant_table() {
        let runtime = runtime();
        let cmd = ProcessEntrypoint::new(EntrypointConfig::default()).build_command(&runtime);

        for (name, value) in runtime.constants() {
            assert_eq!(env_value(&cmd, name), Some(OsStr::new(&value)), "{name}");
        }
        assert_eq!(
            env_value(&cmd, "ABSPATH").map(Path::new),
            Some(runtime.base_path())
        );
    }

    #[test]
    fn test_empty_script_passes_args_only() {
        let entry = ProcessEntrypoint::new(EntrypointConfig {
            script: String::new(),
            args: vec!["wp-config.php".to_string()],
            ..EntrypointConfig::default()
        });
        let cmd = entry.build_command(&runtime());
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), vec!["wp-config.php"]);
    }

    #[test]
    fn test_command_line_override_drops_script() {
        let entry = ProcessEntrypoint::new(EntrypointConfig::default())
            .with_command_line("php-fpm".to_string(), vec!["-F".to_string()]);
        let cmd = entry.build_command(&runtime());

        assert_eq!(cmd.get_program(), "php-fpm");
        assert_eq!(cmd.get_args().collect::<Vec<_>>(), vec!["-F"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_spawn_returns_exit_code() {
        let entry = ProcessEntrypoint::new(EntrypointConfig::default())
            .with_command_line(
                "sh".to_string(),
                vec![
                    "-c".to_string(),
                    r#"[ "$DB_NAME" = wp ] && [ "$WP_TABLE_PREFIX" = wp_ ] && exit 7"#.to_string(),
                ],
            )
            .with_exec(false);

        let code = entry.hand_off(runtime()).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_spawn_missing_program() {
        let entry = ProcessEntrypoint::new(EntrypointConfig::default())
            .with_command_line("/nonexistent/platform-binary".to_string(), vec![])
            .with_exec(false);

        let err = entry.hand_off(runtime()).unwrap_err();
        assert!(matches!(err, HandoffError::Spawn { .. }));
    }
}
