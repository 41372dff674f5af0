//! Patch compiler: turns a validated request into Kustomize patch fragments.
//!
//! Fragments stay structured values until serialization; the YAML text that
//! Argo CD expects in `patches[].patch` is produced only by the `Serialize`
//! impl at the wire boundary.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.

use std::collections::BTreeMap;

use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::domain::dependencies;
use crate::domain::error::CompilerDefect;
use crate::domain::manifest::{Deployment, EnvVar, ResourceList, ResourceRequirements};
use crate::domain::validate::ValidatedRequest;

/// Name of the primary workload in the base template.
pub const APP_DEPLOYMENT: &str = "app";

pub const RESOURCES_PATH: &str = "/spec/template/spec/containers/0/resources";
pub const REPLICAS_PATH: &str = "/spec/replicas";
pub const ENV_PATH: &str = "/spec/template/spec/containers/0/env";

// ── Fragment model ────────────────────────────────────────────────────────────

/// Resource a fragment applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchTarget {
    pub kind: String,
    pub name: String,
}

impl PatchTarget {
    pub fn deployment(name: impl Into<String>) -> Self {
        Self {
            kind: "Deployment".to_string(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchAction {
    Add,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PatchValue {
    Resources(ResourceRequirements),
    Replicas(u32),
    Env(Vec<EnvVar>),
}

/// One JSON6902-style edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOp {
    pub op: PatchAction,
    pub path: String,
    pub value: PatchValue,
}

/// A composable customization of the base template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchFragment {
    /// Resource quantities and/or replica count for the primary workload.
    Resources { target: PatchTarget, ops: Vec<PatchOp> },
    /// A complete auxiliary Deployment.
    Dependency {
        target: PatchTarget,
        manifest: Box<Deployment>,
    },
    /// Extra variables on the primary container.
    EnvVars { target: PatchTarget, ops: Vec<PatchOp> },
}

impl PatchFragment {
    #[must_use]
    pub fn target(&self) -> &PatchTarget {
        match self {
            Self::Resources { target, .. }
            | Self::Dependency { target, .. }
            | Self::EnvVars { target, .. } => target,
        }
    }

    #[cfg(test)]
    fn kind_label(&self) -> &'static str {
        match self {
            Self::Resources { .. } => "resources",
            Self::Dependency { .. } => "dependency",
            Self::EnvVars { .. } => "env",
        }
    }

    /// Operations carried by the fragment; empty for embedded manifests.
    #[must_use]
    pub fn ops(&self) -> &[PatchOp] {
        match self {
            Self::Resources { ops, .. } | Self::EnvVars { ops, .. } => ops,
            Self::Dependency { .. } => &[],
        }
    }

    /// Render the patch body as the YAML text Kustomize consumes.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn render(&self) -> Result<String, serde_yaml::Error> {
        match self {
            Self::Resources { ops, .. } | Self::EnvVars { ops, .. } => serde_yaml::to_string(ops),
            Self::Dependency { manifest, .. } => serde_yaml::to_string(manifest),
        }
    }
}

impl Serialize for PatchFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let patch = self.render().map_err(S::Error::custom)?;
        let mut s = serializer.serialize_struct("KustomizePatch", 2)?;
        s.serialize_field("patch", &patch)?;
        s.serialize_field("target", self.target())?;
        s.end()
    }
}

// ── Compiler ──────────────────────────────────────────────────────────────────

/// Compile the ordered fragment list for a request.
///
/// Order: resources (if any), one fragment per dependency in input order,
/// then environment variables (if any).
///
/// # Errors
///
/// Returns [`CompilerDefect`] if a dependency has no template, which means
/// the request bypassed validation.
pub fn compile(request: &ValidatedRequest) -> Result<Vec<PatchFragment>, CompilerDefect> {
    let req = request.get();
    let mut fragments = Vec::new();

    if let Some(fragment) = resource_fragment(&req.cpu, &req.memory, request.replicas()) {
        fragments.push(fragment);
    }
    for dep in &req.dependencies {
        fragments.push(dependency_fragment(dep)?);
    }
    if let Some(fragment) = env_fragment(&req.env_vars) {
        fragments.push(fragment);
    }

    Ok(fragments)
}

/// Resources/replicas fragment for the primary workload.
///
/// The resources op appears only when `cpu` or `memory` is set and carries
/// exactly those quantities; the replicas op appears only when `replicas > 0`.
#[must_use]
pub fn resource_fragment(cpu: &str, memory: &str, replicas: u32) -> Option<PatchFragment> {
    let mut ops = Vec::new();

    if !cpu.is_empty() || !memory.is_empty() {
        let quantities = ResourceList {
            cpu: non_empty(cpu),
            memory: non_empty(memory),
        };
        ops.push(PatchOp {
            op: PatchAction::Replace,
            path: RESOURCES_PATH.to_string(),
            value: PatchValue::Resources(ResourceRequirements {
                requests: quantities.clone(),
                limits: quantities,
            }),
        });
    }
    if replicas > 0 {
        ops.push(PatchOp {
            op: PatchAction::Replace,
            path: REPLICAS_PATH.to_string(),
            value: PatchValue::Replicas(replicas),
        });
    }

    if ops.is_empty() {
        return None;
    }
    Some(PatchFragment::Resources {
        target: PatchTarget::deployment(APP_DEPLOYMENT),
        ops,
    })
}

/// Embedded Deployment for one auxiliary service.
///
/// # Errors
///
/// Returns [`CompilerDefect::UnknownDependency`] for a name with no template.
pub fn dependency_fragment(name: &str) -> Result<PatchFragment, CompilerDefect> {
    let template = dependencies::lookup(name)
        .ok_or_else(|| CompilerDefect::UnknownDependency(name.to_string()))?;
    Ok(PatchFragment::Dependency {
        target: PatchTarget::deployment(template.name),
        manifest: Box::new(template.deployment()),
    })
}

/// Env-var fragment; entries follow the map's key order (lexicographic).
#[must_use]
pub fn env_fragment(env_vars: &BTreeMap<String, String>) -> Option<PatchFragment> {
    if env_vars.is_empty() {
        return None;
    }
    let env = env_vars
        .iter()
        .map(|(name, value)| EnvVar::new(name.as_str(), value.as_str()))
        .collect();
    Some(PatchFragment::EnvVars {
        target: PatchTarget::deployment(APP_DEPLOYMENT),
        ops: vec![PatchOp {
            op: PatchAction::Add,
            path: ENV_PATH.to_string(),
            value: PatchValue::Env(env),
        }],
    })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
