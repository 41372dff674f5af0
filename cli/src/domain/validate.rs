//! Pure request validation: no I/O, no async.
//!
//! All functions in this module are synchronous and take data in, returning
//! data out. Zero imports from `tokio`, `std::fs`, `crate::infra`,
//! `crate::commands`, or `crate::application`.

use std::sync::LazyLock;

use meeseeks_common::EnvironmentRequest;
use regex::Regex;

use crate::domain::dependencies;
use crate::domain::error::ValidationError;

/// Kubernetes DNS label: lowercase alphanumeric and hyphens, alphanumeric at
/// both ends. Environment names become namespace suffixes, so the same rule
/// applies here.
pub static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("valid regex")
});

/// Bare or milli-suffixed decimal quantity: `100m`, `0.5`, `2`. ASCII digits
/// only.
pub static CPU_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]+(\.[0-9]+)?m?$").expect("valid regex")
});

/// Decimal quantity with a binary or decimal unit: `256Mi`, `1G`. ASCII
/// digits only.
pub static MEMORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]+(\.[0-9]+)?[KMGT]i?$").expect("valid regex")
});

pub const MAX_NAME_LEN: usize = 63;
pub const MAX_BRANCH_LEN: usize = 255;
pub const MAX_REPLICAS: i64 = 10;

/// Characters git refuses in ref names (plus whitespace).
pub const FORBIDDEN_BRANCH_CHARS: &[char] =
    &[' ', '\t', '\n', '\r', '~', '^', ':', '?', '*', '[', '\\'];

/// Recognized environment types. An empty type means "unspecified".
pub const ENV_TYPES: &[&str] = &["dev", "staging", "prod"];

/// A request that passed every validation rule.
///
/// Only [`validate`] constructs this type, so the patch compiler and the
/// descriptor builder can rely on every field being well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest(EnvironmentRequest);

impl ValidatedRequest {
    #[must_use]
    pub fn get(&self) -> &EnvironmentRequest {
        &self.0
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Replica count; validation guarantees it is within `0..=MAX_REPLICAS`.
    #[must_use]
    pub fn replicas(&self) -> u32 {
        u32::try_from(self.0.replicas).unwrap_or(0)
    }
}

/// Validate a request field by field, surfacing the first failing rule.
///
/// Field order: name, branch, cpu, memory, replicas, dependencies, env type.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first rule that fails.
pub fn validate(request: EnvironmentRequest) -> Result<ValidatedRequest, ValidationError> {
    validate_name(&request.name)?;
    validate_branch(&request.branch)?;
    if !request.cpu.is_empty() {
        validate_cpu(&request.cpu)?;
    }
    if !request.memory.is_empty() {
        validate_memory(&request.memory)?;
    }
    validate_replicas(request.replicas)?;
    validate_dependencies(&request.dependencies)?;
    validate_env_type(&request.env_type)?;
    Ok(ValidatedRequest(request))
}

/// Check an environment name on its own.
///
/// # Errors
///
/// Returns an error if the name is empty, too long, or not a DNS label.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("name", "name cannot be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::new(
            "name",
            format!("name cannot be longer than {MAX_NAME_LEN} characters"),
        ));
    }
    if !NAME_RE.is_match(name) {
        return Err(ValidationError::new(
            "name",
            "name must contain only lowercase alphanumeric characters and hyphens, \
             and must start and end with an alphanumeric character",
        ));
    }
    Ok(())
}

fn validate_branch(branch: &str) -> Result<(), ValidationError> {
    if branch.is_empty() {
        return Err(ValidationError::new("branch", "branch cannot be empty"));
    }
    if branch.len() > MAX_BRANCH_LEN {
        return Err(ValidationError::new(
            "branch",
            format!("branch name cannot be longer than {MAX_BRANCH_LEN} characters"),
        ));
    }
    if let Some(c) = FORBIDDEN_BRANCH_CHARS.iter().find(|c| branch.contains(**c)) {
        return Err(ValidationError::new(
            "branch",
            format!("branch name contains invalid character: {c}"),
        ));
    }
    Ok(())
}

fn validate_cpu(cpu: &str) -> Result<(), ValidationError> {
    if CPU_RE.is_match(cpu) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "cpu",
            "CPU must be in format like '100m', '0.5', '1', '2'",
        ))
    }
}

fn validate_memory(memory: &str) -> Result<(), ValidationError> {
    if MEMORY_RE.is_match(memory) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "memory",
            "memory must be in format like '128Mi', '1Gi', '512M', '1G'",
        ))
    }
}

fn validate_replicas(replicas: i64) -> Result<(), ValidationError> {
    if (0..=MAX_REPLICAS).contains(&replicas) {
        Ok(())
    } else {
        Err(ValidationError::new(
            "replicas",
            format!("replicas must be between 0 and {MAX_REPLICAS}"),
        ))
    }
}

fn validate_dependencies(deps: &[String]) -> Result<(), ValidationError> {
    for dep in deps {
        if dependencies::lookup(dep).is_none() {
            return Err(ValidationError::new(
                "dependencies",
                format!(
                    "unsupported dependency: {dep}. Supported: {}",
                    dependencies::supported_names().join(", ")
                ),
            ));
        }
    }
    Ok(())
}

fn validate_env_type(env_type: &str) -> Result<(), ValidationError> {
    if env_type.is_empty() || ENV_TYPES.contains(&env_type) {
        return Ok(());
    }
    Err(ValidationError::new(
        "env_type",
        format!(
            "unsupported environment type: {env_type}. Supported: {}",
            ENV_TYPES.join(", ")
        ),
    ))
}
