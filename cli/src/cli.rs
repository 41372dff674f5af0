//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Ephemeral application environments on Argo CD
#[derive(Parser, Debug)]
#[command(
    name = "meeseeks",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Skip confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Use the in-memory stand-in instead of Argo CD
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an environment
    Create(commands::EnvironmentArgs),

    /// Print the descriptor `create` would submit, without submitting it
    Render(commands::EnvironmentArgs),

    /// List managed environments
    List,

    /// Delete an environment
    Delete(commands::delete::DeleteArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            dev,
            command,
        } = self;

        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags { yes, dev },
        };

        match command {
            Command::Version => {
                let output = OutputContext::new(no_color, quiet);
                let renderer = if json {
                    Renderer::Json(JsonRenderer)
                } else {
                    Renderer::Human(HumanRenderer::new(&output))
                };
                commands::version::run(&renderer)
            }
            Command::Create(args) => commands::create::run(&AppContext::new(&flags)?, args).await,
            Command::Render(args) => commands::render::run(&AppContext::new(&flags)?, args),
            Command::List => commands::list::run(&AppContext::new(&flags)?).await,
            Command::Delete(args) => commands::delete::run(&AppContext::new(&flags)?, &args).await,
            Command::Config(cmd) => commands::config::run(&AppContext::new(&flags)?, &cmd),
        }
    }
}
