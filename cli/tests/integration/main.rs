//! Integration tests for meeseeks CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior against
//! the development stand-in; none of them reach a real Argo CD server.

mod environment_commands;
