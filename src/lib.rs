//! Story Spoiler API suite - end-to-end tests for the Story Spoiler REST API
//!
//! This library authenticates against the API, then runs a fixed, ordered
//! sequence of create/edit/list/delete scenarios and reports each outcome.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use common::config::Settings;
pub use common::{Error, Result};
pub use testing::{run_suite, RunOptions, SuiteReport};
