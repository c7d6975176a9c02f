use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_BASE_URL, MAX_DIRECTORY_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Remote user directory settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub base_url: String,
    /// Sent as `x-api-key` when present
    pub api_key: Option<String>,
    /// Request timeout (0 = transport default)
    pub timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_DIRECTORY_BASE_URL),
            api_key: None,
            timeout_secs: 0,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| {
                ConfigError::directory(format!(
                    "directory.base_url must start with http:// or https://, got '{}'",
                    self.base_url
                ))
            })?;

        if rest.trim_matches('/').is_empty() {
            return Err(ConfigError::directory("directory.base_url has no host"));
        }

        if self.timeout_secs > MAX_DIRECTORY_TIMEOUT_SECS {
            return Err(ConfigError::directory(format!(
                "directory.timeout_secs must be 0-{}, got {}",
                MAX_DIRECTORY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
