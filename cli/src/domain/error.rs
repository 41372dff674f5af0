//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// A request field failed validation. Recoverable: the caller fixes the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Request field that failed, e.g. `name` or `memory`.
    pub field: &'static str,
    /// Human-readable explanation.
    pub reason: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

// ── Remote controller errors ──────────────────────────────────────────────────

/// A call to the remote controller failed. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Argo CD API returned status {0}")]
    Status(u16),

    #[error("Argo CD API call timed out")]
    Timeout,

    #[error("Argo CD API unreachable: {0}")]
    Transport(String),

    #[error("cannot decode Argo CD response: {0}")]
    Decode(String),
}

// ── Compiler defects ──────────────────────────────────────────────────────────

/// Internal invariant violation in the patch compiler.
///
/// Only reachable when a request bypasses validation; never a user error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilerDefect {
    #[error("no deployment template for dependency '{0}'")]
    UnknownDependency(String),
}

// ── Use-case errors ───────────────────────────────────────────────────────────

/// Every way a provisioning use-case can fail, scoped to one request.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("provisioning failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("internal error: {0}")]
    Defect(#[from] CompilerDefect),
}

impl ProvisionError {
    /// Stable machine-readable code used by `--json` error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Remote(_) => "remote_error",
            Self::Defect(_) => "internal_error",
        }
    }
}
