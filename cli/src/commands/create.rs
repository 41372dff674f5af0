//! `meeseeks create`: validate, build, and submit an environment.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::ProgressReporter;
use crate::application::services::environments;
use crate::commands::EnvironmentArgs;
use crate::output::TerminalReporter;

/// Run `meeseeks create`.
///
/// # Errors
///
/// Returns an error if the request is invalid or the controller rejects it.
pub async fn run(app: &AppContext, args: EnvironmentArgs) -> Result<ExitCode> {
    let request = args.into_request()?;
    let reporter = TerminalReporter::new(&app.output);

    if app.gateway.is_stand_in() {
        reporter.warn("dev mode: nothing is sent to Argo CD");
    }

    let created =
        environments::create_environment(&app.gateway, &app.topology, &reporter, request).await?;
    app.renderer().render_created(&created)?;
    Ok(ExitCode::SUCCESS)
}
