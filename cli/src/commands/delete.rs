//! `meeseeks delete <name>`: remove an environment.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::environments;
use crate::domain::validate_name;
use crate::output::TerminalReporter;

/// Arguments for the delete command.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Environment name
    pub name: String,
}

/// Run `meeseeks delete <name>`.
///
/// Asks for confirmation unless running non-interactively (`--yes`, `CI`,
/// or `MEESEEKS_YES`).
///
/// # Errors
///
/// Returns an error if the name is malformed, the prompt fails, or the
/// controller refuses the deletion.
pub async fn run(app: &AppContext, args: &DeleteArgs) -> Result<ExitCode> {
    validate_name(&args.name)?;

    if !app.non_interactive
        && !app.confirm(&format!("Delete environment '{}'?", args.name), false)?
    {
        app.output.info("Cancelled.");
        return Ok(ExitCode::SUCCESS);
    }

    let reporter = TerminalReporter::new(&app.output);
    environments::delete_environment(&app.gateway, &reporter, &args.name).await?;
    app.renderer().render_deleted(&args.name)?;
    Ok(ExitCode::SUCCESS)
}
