//! Shared mock infrastructure for unit tests.
//!
//! Provides hand-written [`EnvironmentGateway`], [`ProgressReporter`], and
//! [`ConfigStore`] implementations so each test file doesn't have to re-define
//! the same boilerplate.

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use meeseeks_cli::application::ports::{ConfigStore, EnvironmentGateway, ProgressReporter};
use meeseeks_cli::domain::{ApplicationDescriptor, RemoteError, Topology};
use meeseeks_common::EnvironmentSummary;

// ── Gateway: records every call ───────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingGateway {
    pub created: Mutex<Vec<ApplicationDescriptor>>,
    pub deleted: Mutex<Vec<String>>,
    pub listing: Vec<EnvironmentSummary>,
}

impl RecordingGateway {
    pub fn with_listing(listing: Vec<EnvironmentSummary>) -> Self {
        Self {
            listing,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<ApplicationDescriptor> {
        self.created.lock().expect("lock").clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().expect("lock").clone()
    }
}

impl EnvironmentGateway for RecordingGateway {
    async fn create(&self, descriptor: ApplicationDescriptor) -> Result<String, RemoteError> {
        let name = descriptor.name().to_string();
        self.created.lock().expect("lock").push(descriptor);
        Ok(name)
    }

    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError> {
        Ok(self.listing.clone())
    }

    async fn delete(&self, name: &str) -> Result<(), RemoteError> {
        self.deleted.lock().expect("lock").push(name.to_string());
        Ok(())
    }
}

// ── Gateway: every call fails ─────────────────────────────────────────────────

pub struct FailingGateway(pub RemoteError);

impl EnvironmentGateway for FailingGateway {
    async fn create(&self, _: ApplicationDescriptor) -> Result<String, RemoteError> {
        Err(self.0.clone())
    }

    async fn list(&self) -> Result<Vec<EnvironmentSummary>, RemoteError> {
        Err(self.0.clone())
    }

    async fn delete(&self, _: &str) -> Result<(), RemoteError> {
        Err(self.0.clone())
    }
}

// ── Reporters ─────────────────────────────────────────────────────────────────

pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

/// Collects messages prefixed with their kind (`step:`, `success:`, `warn:`).
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.messages.borrow_mut().push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {message}"));
    }
}

// ── Config store ──────────────────────────────────────────────────────────────

pub struct InMemoryConfigStore(pub Topology);

impl ConfigStore for InMemoryConfigStore {
    fn load(&self) -> Result<Topology> {
        Ok(self.0.clone())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/tmp/meeseeks-test/config.yaml"))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

pub fn summary(name: &str, status: &str) -> EnvironmentSummary {
    EnvironmentSummary {
        id: name.to_string(),
        name: name.to_string(),
        status: status.to_string(),
        url: format!("https://{name}.dev.example.com"),
    }
}
