//! Meeseeks CLI - ephemeral application environments on Argo CD

use std::process::ExitCode;

use clap::Parser;
use meeseeks_cli::cli::Cli;
use meeseeks_cli::output::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let as_json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            report(&e, as_json);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error, as_json: bool) {
    let formatted = as_json
        .then(|| json::format_error(&format!("{err:#}"), json::error_code(err)).ok())
        .flatten();
    match formatted {
        Some(out) => println!("{out}"),
        None => eprintln!("Error: {err:#}"),
    }
}
