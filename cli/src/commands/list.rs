//! `meeseeks list`: show managed environments.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::environments;

/// Run `meeseeks list`.
///
/// # Errors
///
/// Returns an error if the controller cannot be queried.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let items = environments::list_environments(&app.gateway).await?;
    app.renderer().render_environments(&items)?;
    Ok(ExitCode::SUCCESS)
}
