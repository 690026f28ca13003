//! Configuration file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::models::Configuration;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Loader for scaffolding configuration documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Read and deserialize a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Configuration> {
        let path = path.as_ref();
        debug!("Reading config from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Configuration =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            "Loaded {} subscriptions, {} environments, {} regions",
            config.subscriptions.len(),
            config.environments.len(),
            config.regions.len()
        );
        Ok(config)
    }

    /// Deserialize a configuration from an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Configuration> {
        Ok(serde_yaml::from_str(content)?)
    }
}
