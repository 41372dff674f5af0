//! Human-readable terminal renderer.

use anyhow::{Context, Result};
use meeseeks_common::{CreatedEnvironment, EnvironmentSummary};
use owo_colors::OwoColorize as _;

use crate::application::services::config_service::EffectiveConfig;
use crate::domain::ApplicationDescriptor;
use crate::output::{INFO_MARK, OutputContext};

const NAME_HEADER: &str = "NAME";
const STATUS_HEADER: &str = "STATUS";
const URL_HEADER: &str = "URL";

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("meeseeks {version}");
    }

    /// Render managed environments as an aligned table.
    pub fn render_environments(&self, items: &[EnvironmentSummary]) {
        if items.is_empty() {
            if !self.ctx.quiet {
                println!("No environments found. Create one: meeseeks create --name <name> --branch <ref>");
            }
            return;
        }

        let widths = column_widths(items);
        println!(
            "{}",
            format_row(NAME_HEADER, STATUS_HEADER, URL_HEADER, widths).style(self.ctx.styles.bold)
        );
        for item in items {
            // Pad before styling so escape codes don't skew alignment.
            let status = format!("{:<width$}", item.status, width = widths.1);
            println!(
                "{:<name$}  {}  {}",
                item.name,
                status.style(self.ctx.styles.health(&item.status)),
                item.url,
                name = widths.0,
            );
        }
    }

    /// Render the acknowledgement for a submitted environment.
    pub fn render_created(&self, created: &CreatedEnvironment) {
        if self.ctx.quiet {
            println!("{}", created.id);
            return;
        }
        println!();
        self.ctx.kv("id:", &created.id);
        self.ctx.kv("status:", &created.status);
        self.ctx.kv("url:", &created.url);
        println!();
        self.ctx.info("Track progress: meeseeks list");
    }

    /// Render a dry-run descriptor as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if YAML serialization fails.
    pub fn render_descriptor(&self, descriptor: &ApplicationDescriptor) -> Result<()> {
        let yaml = serde_yaml::to_string(descriptor).context("YAML serialization failed")?;
        print!("{yaml}");
        if !self.ctx.quiet {
            let note = format!("{} patch(es), not submitted", descriptor.patches().len());
            eprintln!("{}", OutputContext::marked(INFO_MARK, self.ctx.styles.info, &note));
        }
        Ok(())
    }

    /// Render the effective configuration.
    pub fn render_config(&self, config: &EffectiveConfig) {
        let t = &config.topology;
        println!();
        self.ctx.header(&format!("Configuration ({})", config.config_path));
        println!();
        println!("  {}", "Topology:".style(self.ctx.styles.bold));
        println!("    {:<20} {}", "repo_url:", t.repo_url);
        println!("    {:<20} {}", "target_revision:", t.target_revision);
        println!("    {:<20} {}", "path:", t.path);
        println!("    {:<20} {}", "project:", t.project);
        println!("    {:<20} {}", "control_namespace:", t.control_namespace);
        println!("    {:<20} {}", "destination_server:", t.destination_server);
        println!("    {:<20} {}", "app_domain:", t.app_domain);
        println!(
            "    {:<20} {}",
            "app_image:",
            t.app_image.as_deref().unwrap_or("(not set)")
        );
        println!();
        println!("  {}", "Connection:".style(self.ctx.styles.bold));
        println!("    {:<20} {}", "ARGOCD_URL:", config.argocd_url);
        println!("    {:<20} {}", "ARGOCD_TOKEN:", config.argocd_token);
        println!("    {:<20} {}s", "ARGOCD_TIMEOUT_SECS:", config.timeout_secs);
        println!("    {:<20} {}", "gateway:", config.gateway);
        println!();
    }
}

/// Widths of the name and status columns, at least as wide as their headers.
#[must_use]
pub fn column_widths(items: &[EnvironmentSummary]) -> (usize, usize) {
    items.iter().fold(
        (NAME_HEADER.len(), STATUS_HEADER.len()),
        |(name, status), item| (name.max(item.name.len()), status.max(item.status.len())),
    )
}

/// One table row with the first two columns padded to `widths`.
#[must_use]
pub fn format_row(name: &str, status: &str, url: &str, widths: (usize, usize)) -> String {
    format!(
        "{name:<nw$}  {status:<sw$}  {url}",
        nw = widths.0,
        sw = widths.1
    )
}
