//! go-subtest
//!
//! Finds the Go table-driven subtest under a cursor, derives its
//! `Parent/subtest` name, and keeps a matching debug launch configuration
//! in the workspace's `.vscode/launch.json`.
pub mod cli;
pub mod commands;
pub mod document;
pub mod error;
pub mod launch;
pub mod logging;
pub mod query;
pub mod subtest;
pub mod symbols;
pub mod utils;
pub mod workspace;

pub use commands::{add_subtest, goto_subtest, AddOutcome, ConfigLocation, Request};
pub use error::{Error, Result};
