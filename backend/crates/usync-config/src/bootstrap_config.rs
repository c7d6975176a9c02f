use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BOOTSTRAP_DELETE_IDS, DEFAULT_BOOTSTRAP_ENABLED,
    DEFAULT_BOOTSTRAP_MIRROR_IDS,
};

use serde::Deserialize;

/// Startup population of the local store from the remote directory.
///
/// Every id in `mirror_ids` is fetched and mirrored locally, then every id in
/// `delete_ids` goes through the regular delete path (local and remote).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub enabled: bool,
    pub mirror_ids: Vec<i64>,
    pub delete_ids: Vec<i64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_BOOTSTRAP_ENABLED,
            mirror_ids: DEFAULT_BOOTSTRAP_MIRROR_IDS.to_vec(),
            delete_ids: DEFAULT_BOOTSTRAP_DELETE_IDS.to_vec(),
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(id) = self
            .mirror_ids
            .iter()
            .chain(self.delete_ids.iter())
            .find(|id| **id <= 0)
        {
            return Err(ConfigError::bootstrap(format!(
                "bootstrap ids must be positive, got {}",
                id
            )));
        }

        Ok(())
    }
}
