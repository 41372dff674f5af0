//! Infrastructure implementations of configuration loading.
//!
//! Topology comes from a YAML file (`ConfigStore` port); connection settings
//! come from environment variables via `envy`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConnectionSettings, Topology};

/// Environment variable overriding the topology file location.
pub const CONFIG_ENV: &str = "MEESEEKS_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
#[derive(Debug, Default)]
pub struct YamlConfigStore {
    path: Option<PathBuf>,
}

impl YamlConfigStore {
    /// Store reading from `$MEESEEKS_CONFIG` or `~/.meeseeks/config.yaml`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pinned to an explicit path (used in tests).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Topology> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(Topology::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".meeseeks").join("config.yaml"))
    }
}

/// Read `ARGOCD_URL`, `ARGOCD_TOKEN`, `DEV_MODE`, and `ARGOCD_TIMEOUT_SECS`.
///
/// # Errors
///
/// Returns an error if a variable is present but cannot be parsed
/// (e.g. `DEV_MODE=maybe`).
pub fn load_connection() -> Result<ConnectionSettings> {
    envy::from_env::<ConnectionSettings>().context(
        "failed to load connection settings from ARGOCD_URL / ARGOCD_TOKEN / \
         DEV_MODE / ARGOCD_TIMEOUT_SECS",
    )
}
