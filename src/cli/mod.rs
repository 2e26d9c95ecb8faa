//! CLI command dispatch
//!
//! Resolves settings, runs the requested command and maps the outcome to a
//! process exit code.

use colored::Colorize;

use crate::commands::{Commands, ConnectionArgs};
use crate::common::config::{Config, Settings};
use crate::common::{logging, paths, Result};
use crate::testing::{run_suite, scenarios, RunOptions};

/// Dispatch a command; returns the exit code on success
pub async fn dispatch(command: Commands) -> Result<i32> {
    match command {
        Commands::Run {
            connection,
            only,
            fail_fast,
            json,
            verbose,
            log_file,
        } => {
            if log_file {
                if let Some(path) = logging::init_with_file(verbose) {
                    tracing::info!(path = %path.display(), "logging to file");
                }
            } else {
                logging::init_cli(verbose);
            }

            let settings = resolve(connection)?;
            let options = RunOptions {
                only,
                fail_fast,
                verbose: verbose && !json,
                quiet: json,
            };
            let report = run_suite(&settings, &options).await?;
            if json {
                println!("{}", report.to_json()?);
            }
            Ok(if report.all_passed() { 0 } else { 1 })
        }

        Commands::List => {
            for scenario in scenarios() {
                println!("{:>2}. {}", scenario.order, scenario.name);
            }
            Ok(0)
        }

        Commands::Config { connection } => {
            match paths::config_path() {
                Some(path) if path.exists() => println!("Config file: {}", path.display()),
                Some(path) => println!("Config file: {} {}", path.display(), "(not found)".dimmed()),
                None => println!("Config file: {}", "(no config directory)".dimmed()),
            }
            let settings = resolve(connection)?;
            print_settings(&settings);
            Ok(0)
        }
    }
}

fn resolve(connection: ConnectionArgs) -> Result<Settings> {
    Config::load()?.resolve(connection.into())
}

fn print_settings(settings: &Settings) {
    println!("  base_url:     {}", settings.base_url);
    println!("  username:     {}", settings.username);
    println!("  password:     {}", "*".repeat(settings.password.chars().count().min(8)));
    println!("  request_secs: {}", settings.request_timeout.as_secs());
}
