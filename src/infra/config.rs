//! Infrastructure implementation of the `ConfigStore` port.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::DeployConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "docship.yaml";

/// Production `ConfigStore` that reads a YAML file on disk.
///
/// A missing file is not an error — every field has a default.
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    /// Create a store for an explicit path (from `--config` or
    /// `DOCSHIP_CONFIG`), or the default `docship.yaml`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Path this store reads from.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<DeployConfig> {
        if !self.path.exists() {
            return Ok(DeployConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("cannot read {}", self.path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("cannot parse {}", self.path.display()))
    }
}
