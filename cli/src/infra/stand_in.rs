//! In-memory `EnvironmentGateway` used in development mode.
//!
//! Never touches the network. Listings come from a fixed sample set and pass
//! through the same `summarize` path as the Argo CD gateway.

use meeseeks_common::EnvironmentSummary;

use crate::application::ports::EnvironmentGateway;
use crate::domain::config::Topology;
use crate::domain::{ApplicationDescriptor, ApplicationList, RemoteApplication, RemoteError, summarize};

/// Sample environments reported by `list`, as `(name, health)`.
pub const SAMPLE_ENVIRONMENTS: [(&str, &str); 3] = [
    ("test-env-1", "Healthy"),
    ("staging-app", "Progressing"),
    ("demo-service", "Healthy"),
];

#[derive(Debug, Clone, Default)]
pub struct StandInGateway {
    topology: Topology,
}

impl StandInGateway {
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self { topology }
    }

    fn sample_listing() -> ApplicationList {
        ApplicationList {
            items: SAMPLE_ENVIRONMENTS
                .iter()
                .map(|(name, health)| RemoteApplication::managed(name, health))
                .collect(),
        }
    }
}

impl EnvironmentGateway for StandInGateway {
    async fn create(&self, descriptor: ApplicationDescriptor) -> Result<String, RemoteError> {
        let name = descriptor.name().to_string();
        tracing::info!(operation = "create", %name, "dev mode: application not submitted");
        Ok(name)
    }

    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError> {
        tracing::info!(operation = "list", "dev mode: returning sample environments");
        Ok(summarize(Self::sample_listing(), &self.topology))
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteError> {
        tracing::info!(operation = "delete", %name, "dev mode: nothing deleted");
        Ok(())
    }
}
