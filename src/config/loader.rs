//! Layered configuration loading.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

const CONFIG_DIR_ENV: &str = "EVCHARGE_CONFIG_DIR";

const CONFIG_FILE_ENV: &str = "EVCHARGE_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "EVCHARGE";

/// Nested key separator: `EVCHARGE_DATABASE__URL` -> `database.url`
const ENV_SEPARATOR: &str = "__";

/// Loads `Settings` from, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml`
/// 3. `local.toml`
/// 4. `EVCHARGE_*` environment variables
///
/// A single explicit file replaces steps 1-3.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Builds a loader from `EVCHARGE_CONFIG_DIR`, `EVCHARGE_CONFIG_FILE`
    /// and `EVCHARGE_APP_ENV`. The first two are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let dir_var = std::env::var(CONFIG_DIR_ENV).ok();
        let file_var = std::env::var(CONFIG_FILE_ENV).ok();

        if dir_var.is_some() && file_var.is_some() {
            return Err(ConfigError::MutualExclusivityError(format!(
                "{} and {} cannot both be set. Use {} for layered configuration or {} for a single file.",
                CONFIG_DIR_ENV, CONFIG_FILE_ENV, CONFIG_DIR_ENV, CONFIG_FILE_ENV
            )));
        }

        Ok(Self {
            config_dir: dir_var
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file: file_var.map(PathBuf::from),
            environment: AppEnvironment::from_env(),
        })
    }

    /// Layered loading from an explicit directory.
    pub fn from_dir(config_dir: impl Into<PathBuf>, environment: AppEnvironment) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment,
        }
    }

    /// Single-file loading, used by `--config FILE`.
    pub fn from_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(config_file.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Overrides the environment overlay, used by `--env`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load, deserialize and validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = match &self.config_file {
            Some(file) => add_file(Config::builder(), file, true)?,
            None => {
                let builder = add_file(Config::builder(), &self.config_dir.join("default.toml"), true)?;
                let env_file = self
                    .config_dir
                    .join(format!("{}.toml", self.environment.as_str()));
                let builder = add_file(builder, &env_file, false)?;
                add_file(builder, &self.config_dir.join("local.toml"), false)?
            }
        };

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()
            .map_err(ConfigError::from)
    }
}

fn add_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::file_not_found(format!(
            "Required configuration file not found: {}",
            path.display()
        )));
    }

    Ok(builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required)))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Loaders read process-wide env vars; serialize the tests that touch them.
    pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

    const DEFAULT_TOML: &str = r#"
[application]
name = "evcharge"

[server]
host = "127.0.0.1"
port = 5000

[database]
url = "postgres://postgres@localhost/evstation"
"#;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    struct EnvGuard(Vec<(String, Option<String>)>);

    impl EnvGuard {
        fn set(&mut self, key: &str, value: &str) {
            self.0.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::set_var(key, value) };
        }

        fn remove(&mut self, key: &str) {
            self.0.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in self.0.drain(..).rev() {
                unsafe {
                    match value {
                        Some(v) => std::env::set_var(&key, v),
                        None => std::env::remove_var(&key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_default_toml() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = config_dir(&[]);

        let result = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development).load();
        match result {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_environment_overlay_then_local() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("production.toml", "[server]\nhost = \"0.0.0.0\"\nport = 8080\n"),
            ("local.toml", "[server]\nport = 9090\n"),
        ]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Production)
            .load()
            .unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.max_connections, 10);
    }

    #[test]
    fn test_other_environment_overlay_ignored() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = config_dir(&[
            ("default.toml", DEFAULT_TOML),
            ("production.toml", "[server]\nport = 8080\n"),
        ]);

        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Test)
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_env_var_overrides_files() {
        let _lock = ENV_LOCK.lock().unwrap();
        let mut env = EnvGuard(Vec::new());
        env.set("EVCHARGE_DATABASE__URL", "postgres://override@db/ev");
        env.set("EVCHARGE_SERVER__PORT", "7000");

        let dir = config_dir(&[("default.toml", DEFAULT_TOML)]);
        let settings = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development)
            .load()
            .unwrap();

        assert_eq!(settings.database.url, "postgres://override@db/ev");
        assert_eq!(settings.server.port, 7000);
    }

    #[test]
    fn test_single_file_mode_skips_layers() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = config_dir(&[("custom.toml", DEFAULT_TOML), ("local.toml", "[server]\nport = 1\n")]);

        let settings = ConfigLoader::from_file(dir.path().join("custom.toml"))
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 5000);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _lock = ENV_LOCK.lock().unwrap();
        let dir = config_dir(&[(
            "default.toml",
            "[database]\nurl = \"sqlite://ev.db\"\n",
        )]);

        let result = ConfigLoader::from_dir(dir.path(), AppEnvironment::Development).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn test_dir_and_file_vars_are_exclusive() {
        let _lock = ENV_LOCK.lock().unwrap();
        let mut env = EnvGuard(Vec::new());
        env.set("EVCHARGE_CONFIG_DIR", "/etc/evcharge");
        env.set("EVCHARGE_CONFIG_FILE", "/etc/evcharge/app.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("EVCHARGE_CONFIG_DIR"));
                assert!(msg.contains("EVCHARGE_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_reads_app_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let mut env = EnvGuard(Vec::new());
        env.remove("EVCHARGE_CONFIG_DIR");
        env.remove("EVCHARGE_CONFIG_FILE");
        env.set("EVCHARGE_APP_ENV", "staging");

        let loader = ConfigLoader::new().unwrap();
        assert_eq!(loader.environment(), AppEnvironment::Staging);
    }
}
