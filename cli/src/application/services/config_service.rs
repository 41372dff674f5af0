//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConnectionSettings, Topology};

/// Effective configuration as shown by `meeseeks config show`.
#[derive(Debug, serde::Serialize)]
pub struct EffectiveConfig {
    pub config_path: String,
    pub topology: Topology,
    pub argocd_url: String,
    /// Credential with everything past the first characters masked.
    pub argocd_token: String,
    pub timeout_secs: u64,
    /// `"stand-in"` or `"argocd"`.
    pub gateway: &'static str,
}

/// Load the topology.
///
/// # Errors
///
/// Returns an error if the stored topology cannot be read or parsed.
pub fn load_topology(store: &impl ConfigStore) -> Result<Topology> {
    store.load()
}

/// Combine the stored topology with the connection settings for display.
///
/// # Errors
///
/// Returns an error if the topology location or contents cannot be resolved.
pub fn effective_config(
    store: &impl ConfigStore,
    connection: &ConnectionSettings,
) -> Result<EffectiveConfig> {
    Ok(EffectiveConfig {
        config_path: store.path()?.display().to_string(),
        topology: store.load()?,
        argocd_url: connection.argocd_url.clone(),
        argocd_token: connection.masked_token(),
        timeout_secs: connection.argocd_timeout_secs,
        gateway: if connection.use_stand_in() {
            "stand-in"
        } else {
            "argocd"
        },
    })
}
