//! Application service: environment create/render/list/delete use-cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All remote I/O is routed through the injected [`EnvironmentGateway`].

use meeseeks_common::{CreatedEnvironment, EnvironmentRequest, EnvironmentSummary};

use crate::application::ports::{EnvironmentGateway, ProgressReporter};
use crate::domain::descriptor::{self, ApplicationDescriptor};
use crate::domain::error::ProvisionError;
use crate::domain::{Topology, validate, validate_name};

/// Status reported for a freshly submitted environment.
pub const CREATING_STATUS: &str = "creating";

/// Validate, build, and submit an environment.
///
/// Steps:
/// 1. Validate the request (no descriptor is built on failure)
/// 2. Build the descriptor and its patch set
/// 3. Submit it through the gateway
///
/// # Errors
///
/// Returns [`ProvisionError::Validation`] for bad input, [`ProvisionError::Remote`]
/// if the controller rejects or does not answer the submission.
pub async fn create_environment(
    gateway: &impl EnvironmentGateway,
    topology: &Topology,
    reporter: &impl ProgressReporter,
    request: EnvironmentRequest,
) -> Result<CreatedEnvironment, ProvisionError> {
    let descriptor = render_environment(topology, request)?;
    let name = descriptor.name().to_string();

    reporter.step(&format!(
        "submitting '{name}' with {} patch(es)...",
        descriptor.patches().len()
    ));
    let id = gateway.create(descriptor).await?;

    reporter.success(&format!("environment '{id}' submitted"));
    Ok(CreatedEnvironment {
        url: topology.environment_url(&id),
        id,
        status: CREATING_STATUS.to_string(),
    })
}

/// Validate and build a descriptor without contacting the controller.
///
/// # Errors
///
/// Returns [`ProvisionError::Validation`] for bad input.
pub fn render_environment(
    topology: &Topology,
    request: EnvironmentRequest,
) -> Result<ApplicationDescriptor, ProvisionError> {
    let validated = validate(request).inspect_err(|e| {
        tracing::debug!(field = e.field, reason = %e.reason, "request rejected");
    })?;
    Ok(descriptor::build(&validated, topology)?)
}

/// List managed environments.
///
/// # Errors
///
/// Returns [`ProvisionError::Remote`] if the listing call fails.
pub async fn list_environments(
    gateway: &impl EnvironmentGateway,
) -> Result<Vec<EnvironmentSummary>, ProvisionError> {
    Ok(gateway.list().await?)
}

/// Delete an environment by name.
///
/// The name is checked before any remote call so it can be embedded in the
/// request path safely.
///
/// # Errors
///
/// Returns [`ProvisionError::Validation`] for a malformed name,
/// [`ProvisionError::Remote`] if the controller refuses the deletion.
pub async fn delete_environment(
    gateway: &impl EnvironmentGateway,
    reporter: &impl ProgressReporter,
    name: &str,
) -> Result<(), ProvisionError> {
    validate_name(name)?;

    reporter.step(&format!("deleting '{name}'..."));
    gateway.delete(name).await?;

    reporter.success(&format!("environment '{name}' deleted"));
    Ok(())
}
