//! Story Spoiler API suite CLI
//!
//! Runs the ordered end-to-end scenarios against a Story Spoiler deployment
//! and exits non-zero if any of them fail.

use clap::Parser;
use spoiler::commands::Commands;
use spoiler::cli;

#[derive(Parser)]
#[command(name = "spoiler", about = "End-to-end tests for the Story Spoiler API")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli::dispatch(cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
