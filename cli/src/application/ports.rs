//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;

use anyhow::Result;
use meeseeks_common::EnvironmentSummary;

use crate::domain::{ApplicationDescriptor, RemoteError, Topology};

// ── Remote Controller Port ────────────────────────────────────────────────────

/// Lifecycle operations against the GitOps controller.
///
/// One remote call per operation, no retries. Implementations must be safe to
/// share across concurrent requests.
#[allow(async_fn_in_trait)]
pub trait EnvironmentGateway {
    /// Submit a descriptor. Returns the environment id (the descriptor name).
    async fn create(&self, descriptor: ApplicationDescriptor) -> Result<String, RemoteError>;
    /// Summaries of every environment this tool manages.
    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError>;
    /// Remove the named environment.
    async fn delete(&self, name: &str) -> Result<(), RemoteError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the deployment topology.
pub trait ConfigStore {
    /// Load the topology, falling back to defaults when nothing is stored.
    fn load(&self) -> Result<Topology>;
    /// Location the topology is read from.
    fn path(&self) -> Result<PathBuf>;
}
