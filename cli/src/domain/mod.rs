//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod dependencies;
pub mod descriptor;
pub mod error;
pub mod listing;
pub mod manifest;
pub mod patch;
pub mod validate;

pub use config::{ConnectionSettings, Topology};
pub use descriptor::{ApplicationDescriptor, build};
pub use error::{CompilerDefect, ProvisionError, RemoteError, ValidationError};
pub use listing::{ApplicationList, RemoteApplication, summarize};
pub use patch::{PatchFragment, compile};
pub use validate::{ValidatedRequest, validate, validate_name};
