//! Run results and their rendering

use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

/// Final state of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
}

/// Result of a single scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub order: u32,
    pub name: String,
    pub status: Status,
    pub error: Option<String>,
    pub elapsed_ms: u128,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.status == Status::Passed
    }
}

/// Result of a whole run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub base_url: String,
    pub outcomes: Vec<ScenarioOutcome>,
    pub elapsed_ms: u128,
}

impl SuiteReport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            outcomes: Vec::new(),
            elapsed_ms: 0,
        }
    }

    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis();
    }

    pub fn passed(&self) -> usize {
        self.count(Status::Passed)
    }

    pub fn failed(&self) -> usize {
        self.count(Status::Failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Status::Skipped)
    }

    fn count(&self, status: Status) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    /// Look up an outcome by scenario name
    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Print the closing summary line
    pub fn print_summary(&self) {
        let summary = format!(
            "{} passed, {} failed, {} skipped ({} ms)",
            self.passed(),
            self.failed(),
            self.skipped(),
            self.elapsed_ms
        );
        if self.all_passed() {
            println!("\n{} {}\n", "✓".green().bold(), summary.green().bold());
        } else {
            println!("\n{} {}\n", "✗".red().bold(), summary.red().bold());
        }
    }
}

/// Print one outcome as a report line
pub fn print_outcome(outcome: &ScenarioOutcome) {
    let label = format!("{}. {}", outcome.order, outcome.name);
    match outcome.status {
        Status::Passed => println!(
            "  {} {} {}",
            "✓".green(),
            label,
            format!("({} ms)", outcome.elapsed_ms).dimmed()
        ),
        Status::Failed => {
            println!("  {} {}", "✗".red(), label);
            if let Some(err) = &outcome.error {
                println!("      {}", err.red());
            }
        }
        Status::Skipped => println!("  {} {} {}", "-".yellow(), label, "(skipped)".dimmed()),
    }
}
