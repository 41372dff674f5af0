//! Command implementations

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod render;
pub mod version;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use meeseeks_common::EnvironmentRequest;

/// Request fields shared by `create` and `render`.
///
/// A `--file` document is read first; flags given on the command line
/// override its scalar fields and extend its lists.
#[derive(Args, Debug, Default)]
pub struct EnvironmentArgs {
    /// Read the request from a JSON or YAML file (`-` for stdin)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Environment name (lowercase DNS label)
    #[arg(long)]
    pub name: Option<String>,

    /// Git ref to deploy
    #[arg(short, long)]
    pub branch: Option<String>,

    /// CPU quantity, e.g. 250m or 0.5
    #[arg(long)]
    pub cpu: Option<String>,

    /// Memory quantity, e.g. 512Mi or 1G
    #[arg(long)]
    pub memory: Option<String>,

    /// Replica count (0-10; 0 keeps the base template value)
    #[arg(short, long)]
    pub replicas: Option<i64>,

    /// Auxiliary service to deploy: postgresql, redis, mongodb (repeatable)
    #[arg(short = 'd', long = "dependency", value_name = "NAME")]
    pub dependencies: Vec<String>,

    /// Environment type: dev, staging, prod
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub env_type: Option<String>,

    /// Variable injected into the app container (repeatable)
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_env_var)]
    pub env_vars: Vec<(String, String)>,
}

impl EnvironmentArgs {
    /// Merge the optional request file with command-line flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the request file cannot be read or parsed.
    pub fn into_request(self) -> Result<EnvironmentRequest> {
        let mut request = match &self.file {
            Some(path) => read_request(path)?,
            None => EnvironmentRequest::default(),
        };

        if let Some(name) = self.name {
            request.name = name;
        }
        if let Some(branch) = self.branch {
            request.branch = branch;
        }
        if let Some(cpu) = self.cpu {
            request.cpu = cpu;
        }
        if let Some(memory) = self.memory {
            request.memory = memory;
        }
        if let Some(replicas) = self.replicas {
            request.replicas = replicas;
        }
        if let Some(env_type) = self.env_type {
            request.env_type = env_type;
        }
        request.dependencies.extend(self.dependencies);
        request.env_vars.extend(self.env_vars);
        Ok(request)
    }
}

/// Parse a request document. JSON is valid YAML, so one parser covers both.
fn read_request(path: &std::path::Path) -> Result<EnvironmentRequest> {
    let content = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("cannot read request from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("cannot read request file {}", path.display()))?
    };
    if content.trim().is_empty() {
        return Ok(EnvironmentRequest::default());
    }
    serde_yaml::from_str(&content)
        .with_context(|| format!("cannot parse request file {}", path.display()))
}

fn parse_env_var(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
