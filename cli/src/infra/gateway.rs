//! Runtime selection between the Argo CD gateway and the dev stand-in.

use anyhow::Result;
use meeseeks_common::EnvironmentSummary;

use crate::application::ports::EnvironmentGateway;
use crate::domain::config::{ConnectionSettings, Topology};
use crate::domain::{ApplicationDescriptor, RemoteError};
use crate::infra::argocd::ArgoCdGateway;
use crate::infra::stand_in::StandInGateway;

/// The gateway chosen from connection settings.
#[derive(Clone)]
pub enum Gateway {
    ArgoCd(ArgoCdGateway),
    StandIn(StandInGateway),
}

impl Gateway {
    /// Pick the stand-in when the credential is empty, equals the mock
    /// credential, or dev mode is on; otherwise talk to Argo CD.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_settings(settings: &ConnectionSettings, topology: Topology) -> Result<Self> {
        if settings.use_stand_in() {
            tracing::debug!("using development stand-in gateway");
            return Ok(Self::StandIn(StandInGateway::new(topology)));
        }
        tracing::debug!(url = %settings.argocd_url, "using Argo CD gateway");
        Ok(Self::ArgoCd(ArgoCdGateway::from_settings(settings, topology)?))
    }

    #[must_use]
    pub fn is_stand_in(&self) -> bool {
        matches!(self, Self::StandIn(_))
    }
}

impl EnvironmentGateway for Gateway {
    async fn create(&self, descriptor: ApplicationDescriptor) -> Result<String, RemoteError> {
        match self {
            Self::ArgoCd(gw) => gw.create(descriptor).await,
            Self::StandIn(gw) => gw.create(descriptor).await,
        }
    }

    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError> {
        match self {
            Self::ArgoCd(gw) => gw.list().await,
            Self::StandIn(gw) => gw.list().await,
        }
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteError> {
        match self {
            Self::ArgoCd(gw) => gw.delete(name).await,
            Self::StandIn(gw) => gw.delete(name).await,
        }
    }
}
