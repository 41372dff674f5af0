//! JSON output helpers.
//!
//! Every `--json` code path writes exactly one pretty-printed document to
//! stdout: either the command's result or the error object below.

use anyhow::{Context, Result};
use meeseeks_common::{CreatedEnvironment, EnvironmentList, EnvironmentSummary};
use serde::Serialize;

use crate::application::services::config_service::EffectiveConfig;
use crate::domain::{ApplicationDescriptor, ProvisionError, ValidationError};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Machine-readable code for a failed command.
///
/// `validation_failed` and `remote_error` come from typed use-case errors;
/// everything else (unreadable files, bad settings) is `internal_error`.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<ProvisionError>() {
        e.code()
    } else if err.downcast_ref::<ValidationError>().is_some() {
        "validation_failed"
    } else {
        "internal_error"
    }
}

fn print_pretty(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Machine-readable renderer for `--json`.
pub struct JsonRenderer;

impl JsonRenderer {
    /// `{"items": [{id, name, status, url}, ...]}`
    pub(crate) fn render_environments(items: &[EnvironmentSummary]) -> Result<()> {
        print_pretty(&EnvironmentList {
            items: items.to_vec(),
        })
    }

    pub(crate) fn render_created(created: &CreatedEnvironment) -> Result<()> {
        print_pretty(created)
    }

    pub(crate) fn render_descriptor(descriptor: &ApplicationDescriptor) -> Result<()> {
        print_pretty(descriptor)
    }

    pub(crate) fn render_deleted(name: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "id": name, "status": "deleted" }))
    }

    pub(crate) fn render_config(config: &EffectiveConfig) -> Result<()> {
        print_pretty(config)
    }

    pub(crate) fn render_version(version: &str) -> Result<()> {
        print_pretty(&serde_json::json!({ "version": version }))
    }
}
