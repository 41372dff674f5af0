//! Domain types for meeseeks configuration.
//!
//! Pure data only: no I/O, no async, no filesystem access. Loading lives in
//! `crate::infra::config`.

use serde::{Deserialize, Serialize};

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_REPO_URL: &str = "https://github.com/mateothegreat/k8-byexamples-nginx";
pub const DEFAULT_TARGET_REVISION: &str = "master";
pub const DEFAULT_MANIFEST_PATH: &str = "manifests";
pub const DEFAULT_PROJECT: &str = "default";
pub const DEFAULT_CONTROL_NAMESPACE: &str = "argocd";
pub const DEFAULT_DESTINATION_SERVER: &str = "https://kubernetes.default.svc";
pub const DEFAULT_APP_DOMAIN: &str = "dev.example.com";

pub const DEFAULT_ARGOCD_URL: &str = "http://localhost:30080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential value that always selects the development stand-in.
pub const MOCK_TOKEN: &str = "mock-token";

// ── Topology ─────────────────────────────────────────────────────────────────

/// Fixed deployment topology every environment is bound to.
///
/// Stored in `~/.meeseeks/config.yaml`; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Topology {
    /// Git repository holding the base manifests.
    pub repo_url: String,
    pub target_revision: String,
    /// Manifest directory inside the repository.
    pub path: String,
    /// Argo CD project.
    pub project: String,
    /// Namespace Argo CD watches for `Application` objects.
    pub control_namespace: String,
    /// Cluster API endpoint the apps deploy to.
    pub destination_server: String,
    /// Environments are served at `https://<name>.<app_domain>`.
    pub app_domain: String,
    /// When set, pins `app=<app_image>:<branch>` in the kustomize block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_image: Option<String>,
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            target_revision: DEFAULT_TARGET_REVISION.to_string(),
            path: DEFAULT_MANIFEST_PATH.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            control_namespace: DEFAULT_CONTROL_NAMESPACE.to_string(),
            destination_server: DEFAULT_DESTINATION_SERVER.to_string(),
            app_domain: DEFAULT_APP_DOMAIN.to_string(),
            app_image: None,
        }
    }
}

impl Topology {
    /// Public URL of an environment.
    #[must_use]
    pub fn environment_url(&self, name: &str) -> String {
        format!("https://{name}.{}", self.app_domain)
    }
}

// ── Connection ───────────────────────────────────────────────────────────────

/// How to reach the remote controller. Read from `ARGOCD_*` / `DEV_MODE`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionSettings {
    #[serde(default = "default_argocd_url")]
    pub argocd_url: String,
    #[serde(default)]
    pub argocd_token: String,
    #[serde(default)]
    pub dev_mode: bool,
    #[serde(default = "default_timeout_secs")]
    pub argocd_timeout_secs: u64,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            argocd_url: default_argocd_url(),
            argocd_token: String::new(),
            dev_mode: false,
            argocd_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_argocd_url() -> String {
    DEFAULT_ARGOCD_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ConnectionSettings {
    /// `true` when the in-memory stand-in should replace the real controller:
    /// no credential, the mock credential, or dev mode switched on.
    #[must_use]
    pub fn use_stand_in(&self) -> bool {
        self.dev_mode || self.argocd_token.is_empty() || self.argocd_token == MOCK_TOKEN
    }

    /// Credential with all but the first four characters hidden.
    #[must_use]
    pub fn masked_token(&self) -> String {
        if self.argocd_token.is_empty() {
            return "(unset)".to_string();
        }
        let visible: String = self.argocd_token.chars().take(4).collect();
        format!("{visible}****")
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
