//! Argo CD implementation of the `EnvironmentGateway` port.
//!
//! One HTTP call per operation against the Argo CD REST API. No retries; every
//! call is bounded by the client timeout.

use std::time::Duration;

use anyhow::{Context, Result};
use meeseeks_common::EnvironmentSummary;
use reqwest::StatusCode;

use crate::application::ports::EnvironmentGateway;
use crate::domain::config::{ConnectionSettings, Topology};
use crate::domain::{ApplicationDescriptor, ApplicationList, RemoteError, summarize};

/// Status codes accepted as a successful deletion.
const DELETE_OK: [StatusCode; 3] = [StatusCode::OK, StatusCode::ACCEPTED, StatusCode::NO_CONTENT];

/// Gateway talking to a live Argo CD server with a bearer token.
#[derive(Clone)]
pub struct ArgoCdGateway {
    client: reqwest::Client,
    base_url: String,
    token: String,
    topology: Topology,
}

impl ArgoCdGateway {
    /// Build a gateway for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend
    /// initialisation failure).
    pub fn new(
        base_url: &str,
        token: &str,
        timeout: Duration,
        topology: Topology,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("meeseeks/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            topology,
        })
    }

    /// Build a gateway from `ARGOCD_*` connection settings.
    ///
    /// # Errors
    ///
    /// See [`ArgoCdGateway::new`].
    pub fn from_settings(settings: &ConnectionSettings, topology: Topology) -> Result<Self> {
        Self::new(
            &settings.argocd_url,
            &settings.argocd_token,
            Duration::from_secs(settings.argocd_timeout_secs),
            topology,
        )
    }

    fn applications_url(&self) -> String {
        format!("{}/api/v1/applications", self.base_url)
    }

    fn application_url(&self, name: &str) -> String {
        format!("{}/{name}", self.applications_url())
    }
}

fn send_error(err: &reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout
    } else if err.is_decode() {
        RemoteError::Decode(err.to_string())
    } else {
        RemoteError::Transport(err.to_string())
    }
}

fn status_error(operation: &str, status: StatusCode) -> RemoteError {
    tracing::warn!(operation, status = status.as_u16(), "Argo CD rejected request");
    RemoteError::Status(status.as_u16())
}

impl EnvironmentGateway for ArgoCdGateway {
    async fn create(&self, descriptor: ApplicationDescriptor) -> Result<String, RemoteError> {
        let name = descriptor.name().to_string();
        tracing::info!(operation = "create", %name, "submitting application");

        let response = self
            .client
            .post(self.applications_url())
            .bearer_auth(&self.token)
            .json(&descriptor)
            .send()
            .await
            .map_err(|e| send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error("create", status));
        }
        Ok(name)
    }

    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError> {
        tracing::info!(operation = "list", "listing applications");

        let response = self
            .client
            .get(self.applications_url())
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error("list", status));
        }

        let body = response.bytes().await.map_err(|e| send_error(&e))?;
        let list: ApplicationList =
            serde_json::from_slice(&body).map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(summarize(list, &self.topology))
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteError> {
        tracing::info!(operation = "delete", %name, "deleting application");

        let response = self
            .client
            .delete(self.application_url(name))
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| send_error(&e))?;

        let status = response.status();
        if !DELETE_OK.contains(&status) {
            return Err(status_error("delete", status));
        }
        Ok(())
    }
}
