//! Story Spoiler suite
//!
//! An explicit ordered list of scenarios executed by a single loop. The
//! story id created by one scenario is threaded to later ones through
//! [`SharedState`] rather than global state.

mod report;
mod runner;
mod scenario;
mod state;

pub use report::{ScenarioOutcome, Status, SuiteReport};
pub use runner::{execute_scenario, run_suite, RunOptions};
pub use scenario::*;
pub use state::SharedState;
