use crate::{
    BootstrapConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, DirectoryConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub directory: DirectoryConfig,
    pub bootstrap: BootstrapConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. USYNC_CONFIG_DIR env var, else ./.usync/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply USYNC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: USYNC_CONFIG_DIR env var > ./.usync/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.directory.validate()?;
        self.bootstrap.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (never logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  directory: {} (api key: {}, timeout: {})",
            self.directory.base_url,
            if self.directory.api_key.is_some() {
                "set"
            } else {
                "none"
            },
            if self.directory.timeout_secs == 0 {
                String::from("default")
            } else {
                format!("{}s", self.directory.timeout_secs)
            }
        );
        if self.bootstrap.enabled {
            info!(
                "  bootstrap: mirror {:?}, delete {:?}",
                self.bootstrap.mirror_ids, self.bootstrap.delete_ids
            );
        } else {
            info!("  bootstrap: disabled");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("USYNC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("USYNC_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("USYNC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "USYNC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("USYNC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("USYNC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("USYNC_LOG_FILE", &mut self.logging.file);

        // Directory
        Self::apply_env_string("USYNC_DIRECTORY_BASE_URL", &mut self.directory.base_url);
        Self::apply_env_option_string("USYNC_DIRECTORY_API_KEY", &mut self.directory.api_key);
        Self::apply_env_parse(
            "USYNC_DIRECTORY_TIMEOUT_SECS",
            &mut self.directory.timeout_secs,
        );

        // Bootstrap
        Self::apply_env_bool("USYNC_BOOTSTRAP_ENABLED", &mut self.bootstrap.enabled);
        Self::apply_env_list(
            "USYNC_BOOTSTRAP_MIRROR_IDS",
            &mut self.bootstrap.mirror_ids,
        );
        Self::apply_env_list(
            "USYNC_BOOTSTRAP_DELETE_IDS",
            &mut self.bootstrap.delete_ids,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply comma-separated list override; ignored if any item fails to parse
    fn apply_env_list<T: std::str::FromStr>(var_name: &str, target: &mut Vec<T>) {
        if let Ok(val) = std::env::var(var_name) {
            let parsed: Result<Vec<T>, _> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect();
            if let Ok(items) = parsed {
                *target = items;
            }
        }
    }
}
