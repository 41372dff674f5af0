//! Descriptor builder: assembles the Argo CD `Application` for a request.
//!
//! Pure structure assembly: no I/O, no async. Maps are `BTreeMap` so repeated
//! builds serialize byte-identically.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::config::Topology;
use crate::domain::error::CompilerDefect;
use crate::domain::patch::{self, PatchFragment};
use crate::domain::validate::ValidatedRequest;

pub const API_VERSION: &str = "argoproj.io/v1alpha1";
pub const KIND: &str = "Application";

/// Label key/value marking applications this tool manages.
pub const OWNERSHIP_LABEL: &str = "managed-by";
pub const OWNERSHIP_VALUE: &str = "meeseeks";
pub const ENV_TYPE_LABEL: &str = "env-type";

pub const CREATE_NAMESPACE_OPTION: &str = "CreateNamespace=true";

// ── Descriptor shape ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: ApplicationSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    pub project: String,
    pub source: Source,
    pub destination: Destination,
    pub sync_policy: SyncPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    pub target_revision: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kustomize: Option<Kustomize>,
}

/// Customization block carrying the compiled patches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kustomize {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patches: Vec<PatchFragment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub server: String,
    pub namespace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPolicy {
    pub automated: AutomatedSync,
    pub sync_options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatedSync {
    pub self_heal: bool,
    pub prune: bool,
}

impl ApplicationDescriptor {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Compiled patches, empty when the customization block is absent.
    #[must_use]
    pub fn patches(&self) -> &[PatchFragment] {
        self.spec
            .source
            .kustomize
            .as_ref()
            .map(|k| k.patches.as_slice())
            .unwrap_or_default()
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Namespace an environment deploys into.
#[must_use]
pub fn destination_namespace(name: &str) -> String {
    format!("env-{name}")
}

/// Build the full descriptor for a validated request.
///
/// # Errors
///
/// Propagates [`CompilerDefect`] from the patch compiler; never fails for a
/// request produced by `validate`.
pub fn build(
    request: &ValidatedRequest,
    topology: &Topology,
) -> Result<ApplicationDescriptor, CompilerDefect> {
    let req = request.get();
    let patches = patch::compile(request)?;

    let images = topology
        .app_image
        .as_ref()
        .map(|image| vec![format!("app={image}:{}", req.branch)])
        .unwrap_or_default();
    let kustomize = (!patches.is_empty() || !images.is_empty())
        .then_some(Kustomize { images, patches });

    let labels = BTreeMap::from([
        (OWNERSHIP_LABEL.to_string(), OWNERSHIP_VALUE.to_string()),
        (ENV_TYPE_LABEL.to_string(), req.env_type.clone()),
    ]);

    Ok(ApplicationDescriptor {
        api_version: API_VERSION.to_string(),
        kind: KIND.to_string(),
        metadata: Metadata {
            name: req.name.clone(),
            namespace: topology.control_namespace.clone(),
            labels,
        },
        spec: ApplicationSpec {
            project: topology.project.clone(),
            source: Source {
                repo_url: topology.repo_url.clone(),
                target_revision: topology.target_revision.clone(),
                path: topology.path.clone(),
                kustomize,
            },
            destination: Destination {
                server: topology.destination_server.clone(),
                namespace: destination_namespace(&req.name),
            },
            sync_policy: SyncPolicy {
                automated: AutomatedSync {
                    self_heal: true,
                    prune: true,
                },
                sync_options: vec![CREATE_NAMESPACE_OPTION.to_string()],
            },
        },
    })
}
