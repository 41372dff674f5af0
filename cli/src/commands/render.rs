//! `meeseeks render`: print the descriptor `create` would submit.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::environments;
use crate::commands::EnvironmentArgs;

/// Run `meeseeks render`. Never contacts the controller.
///
/// # Errors
///
/// Returns an error if the request is invalid.
pub fn run(app: &AppContext, args: EnvironmentArgs) -> Result<ExitCode> {
    let request = args.into_request()?;
    let descriptor = environments::render_environment(&app.topology, request)?;
    app.renderer().render_descriptor(&descriptor)?;
    Ok(ExitCode::SUCCESS)
}
