//! Suite runner
//!
//! Authenticates once, then executes the ordered scenarios one at a time
//! against the same session. A failing scenario is recorded and the run
//! moves on; only authentication (or bad configuration) aborts the run.

use std::time::Instant;

use colored::Colorize;
use reqwest::StatusCode;

use crate::api::{authenticate, ApiReply, StoryClient, StoryInput};
use crate::common::config::Settings;
use crate::common::{Error, Result};

use super::report::{print_outcome, ScenarioOutcome, Status, SuiteReport};
use super::scenario::{
    edited_story, new_story, scenarios, select, Scenario, ScenarioKind, CREATED_MESSAGE,
    DELETED_MESSAGE, DELETE_FAILED_MESSAGE, EDITED_MESSAGE, EDIT_NOT_FOUND_MESSAGE,
    MISSING_DELETE_ID, MISSING_EDIT_ID,
};
use super::state::SharedState;

/// Options controlling a run
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Scenario names to run; empty runs all
    pub only: Vec<String>,
    /// Stop after the first failure and mark the rest skipped
    pub fail_fast: bool,
    /// Print response details for every scenario
    pub verbose: bool,
    /// Suppress the coloured per-scenario output (e.g. for JSON reports)
    pub quiet: bool,
}

/// Run the suite against the configured API
pub async fn run_suite(settings: &Settings, options: &RunOptions) -> Result<SuiteReport> {
    let plan = select(scenarios(), &options.only).map_err(|unknown| {
        Error::Config(format!(
            "Unknown scenario(s): {}. Use 'spoiler list' to see available scenarios",
            unknown.join(", ")
        ))
    })?;

    if !options.quiet {
        println!(
            "\n{} {}",
            "Running Story Spoiler suite against".blue().bold(),
            settings.base_url.white().bold()
        );
    }

    let started = Instant::now();
    let session = authenticate(settings).await?;
    if !options.quiet {
        println!("  {} Authenticated as {}", "✓".green(), settings.username.dimmed());
        println!("\n{}", "Scenarios:".cyan());
    }

    let client = StoryClient::new(session, settings.request_timeout)?;
    let mut state = SharedState::new();
    let mut report = SuiteReport::new(&settings.base_url);
    let mut halted = false;

    for scenario in &plan {
        let outcome = if halted {
            skipped(scenario)
        } else {
            run_one(&client, &mut state, scenario, options.verbose).await
        };

        match outcome.status {
            Status::Passed => tracing::info!(scenario = scenario.name, "passed"),
            Status::Failed => tracing::warn!(
                scenario = scenario.name,
                error = outcome.error.as_deref().unwrap_or(""),
                "failed"
            ),
            Status::Skipped => tracing::info!(scenario = scenario.name, "skipped"),
        }

        if outcome.status == Status::Failed && options.fail_fast {
            halted = true;
        }
        if !options.quiet {
            print_outcome(&outcome);
        }
        report.record(outcome);
    }

    report.finish(started.elapsed());
    if !options.quiet {
        report.print_summary();
    }
    Ok(report)
}

async fn run_one(
    client: &StoryClient,
    state: &mut SharedState,
    scenario: &Scenario,
    verbose: bool,
) -> ScenarioOutcome {
    let started = Instant::now();
    let result = execute_scenario(client, state, scenario.kind, verbose).await;
    let elapsed_ms = started.elapsed().as_millis();

    let (status, error) = match result {
        Ok(()) => (Status::Passed, None),
        Err(e) => (Status::Failed, Some(e.to_string())),
    };
    ScenarioOutcome {
        order: scenario.order,
        name: scenario.name.to_string(),
        status,
        error,
        elapsed_ms,
    }
}

fn skipped(scenario: &Scenario) -> ScenarioOutcome {
    ScenarioOutcome {
        order: scenario.order,
        name: scenario.name.to_string(),
        status: Status::Skipped,
        error: Some(Error::Skipped.to_string()),
        elapsed_ms: 0,
    }
}

/// Execute a single scenario
pub async fn execute_scenario(
    client: &StoryClient,
    state: &mut SharedState,
    kind: ScenarioKind,
    verbose: bool,
) -> Result<()> {
    match kind {
        ScenarioKind::CreateStory => {
            let reply = send(client.create(&new_story()), verbose).await?;
            expect_status(&reply, StatusCode::CREATED)?;

            if !reply.body.contains("storyId") {
                return Err(Error::TestAssertion(
                    "Expected response body to contain 'storyId'".to_string(),
                ));
            }
            let response = reply.message()?;
            state.set_story_id(response.story_id.as_deref().unwrap_or(""))?;
            expect_message(&response.message, CREATED_MESSAGE)
        }
        ScenarioKind::EditCreatedStory => {
            let id = state.story_id()?;
            let reply = send(client.edit(id, &edited_story()), verbose).await?;
            expect_status(&reply, StatusCode::OK)?;
            expect_message(&reply.message()?.message, EDITED_MESSAGE)
        }
        ScenarioKind::ListStories => {
            let reply = send(client.list(), verbose).await?;
            expect_status(&reply, StatusCode::OK)?;
            if reply.items()?.is_empty() {
                return Err(Error::TestAssertion(
                    "Expected a non-empty story list".to_string(),
                ));
            }
            Ok(())
        }
        ScenarioKind::DeleteCreatedStory => {
            let id = state.story_id()?;
            let reply = send(client.delete(id), verbose).await?;
            expect_status(&reply, StatusCode::OK)?;
            expect_message(&reply.message()?.message, DELETED_MESSAGE)
        }
        ScenarioKind::CreateBlankStory => {
            let reply = send(client.create(&StoryInput::blank()), verbose).await?;
            expect_status(&reply, StatusCode::BAD_REQUEST)
        }
        ScenarioKind::EditMissingStory => {
            let reply = send(client.edit(MISSING_EDIT_ID, &edited_story()), verbose).await?;
            expect_status(&reply, StatusCode::NOT_FOUND)?;
            expect_message(&reply.message()?.message, EDIT_NOT_FOUND_MESSAGE)
        }
        ScenarioKind::DeleteMissingStory => {
            let reply = send(client.delete(MISSING_DELETE_ID), verbose).await?;
            expect_status(&reply, StatusCode::BAD_REQUEST)?;
            expect_message(&reply.message()?.message, DELETE_FAILED_MESSAGE)
        }
    }
}

async fn send(
    request: impl std::future::Future<Output = Result<ApiReply>>,
    verbose: bool,
) -> Result<ApiReply> {
    let reply = request.await?;
    if verbose {
        println!("      {} {}", reply.status.to_string().dimmed(), reply.body.dimmed());
    }
    Ok(reply)
}

fn expect_status(reply: &ApiReply, expected: StatusCode) -> Result<()> {
    if reply.status != expected {
        return Err(Error::TestAssertion(format!(
            "Expected status {}, got {} with body {}",
            expected, reply.status, reply.body
        )));
    }
    Ok(())
}

fn expect_message(actual: &str, expected: &str) -> Result<()> {
    if actual != expected {
        return Err(Error::mismatch("message", format!("'{}'", expected), format!("'{}'", actual)));
    }
    Ok(())
}
