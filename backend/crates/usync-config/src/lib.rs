mod bootstrap_config;
mod config;
mod database_config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use bootstrap_config::BootstrapConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "USYNC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".usync";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const MIN_DB_MAX_CONNECTIONS: u32 = 1;
const MAX_DB_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_DIRECTORY_BASE_URL: &str = "https://reqres.in/api";
const MAX_DIRECTORY_TIMEOUT_SECS: u64 = 300;

const DEFAULT_BOOTSTRAP_ENABLED: bool = true;
const DEFAULT_BOOTSTRAP_MIRROR_IDS: [i64; 3] = [1, 2, 3];
const DEFAULT_BOOTSTRAP_DELETE_IDS: [i64; 1] = [2];

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
