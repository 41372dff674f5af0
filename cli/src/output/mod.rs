//! Output formatting module

pub mod human;
pub mod json;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use meeseeks_common::{CreatedEnvironment, EnvironmentSummary};
use owo_colors::{OwoColorize as _, Style};

use crate::application::services::config_service::EffectiveConfig;
use crate::domain::ApplicationDescriptor;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

pub(crate) const SUCCESS_MARK: &str = "✓";
pub(crate) const WARN_MARK: &str = "⚠";
pub(crate) const INFO_MARK: &str = "ℹ";

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// One indented message line led by a styled mark.
    pub(crate) fn marked(mark: &str, style: Style, msg: &str) -> String {
        format!("  {} {msg}", mark.style(style))
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", Self::marked(SUCCESS_MARK, self.styles.success, msg));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("{}", Self::marked(WARN_MARK, self.styles.warning, msg));
        }
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", Self::marked(INFO_MARK, self.styles.info, msg));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<14} {value}", key.style(self.styles.dim));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the environment listing.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_environments(&self, items: &[EnvironmentSummary]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_environments(items);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_environments(items),
        }
    }

    /// Render the acknowledgement of a submitted environment.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_created(&self, created: &CreatedEnvironment) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_created(created);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_created(created),
        }
    }

    /// Render a descriptor produced by a dry run.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_descriptor(&self, descriptor: &ApplicationDescriptor) -> Result<()> {
        match self {
            Self::Human(r) => r.render_descriptor(descriptor),
            Self::Json(_) => JsonRenderer::render_descriptor(descriptor),
        }
    }

    /// Render the outcome of a deletion.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_deleted(&self, name: &str) -> Result<()> {
        match self {
            Self::Human(_) => Ok(()),
            Self::Json(_) => JsonRenderer::render_deleted(name),
        }
    }

    /// Render the effective configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &EffectiveConfig) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_config(config),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_version(version),
        }
    }
}
