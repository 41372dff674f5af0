//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the Argo CD HTTP client, the
//! development stand-in, and configuration loading from disk and environment.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod argocd;
pub mod config;
pub mod gateway;
pub mod stand_in;

pub use argocd::ArgoCdGateway;
pub use config::{YamlConfigStore, load_connection};
pub use gateway::Gateway;
pub use stand_in::StandInGateway;
