//! CLI command definitions
//!
//! Defines the clap commands for the suite CLI.

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Run the suite against the Story Spoiler API
    Run {
        #[command(flatten)]
        connection: ConnectionArgs,

        /// Run only the named scenario (repeatable; declared order is kept)
        #[arg(long = "only", value_name = "SCENARIO")]
        only: Vec<String>,

        /// Stop after the first failed scenario
        #[arg(long)]
        fail_fast: bool,

        /// Print the report as JSON instead of coloured text
        #[arg(long)]
        json: bool,

        /// Print response status and body for every request
        #[arg(long, short)]
        verbose: bool,

        /// Also write logs to the suite log file
        #[arg(long)]
        log_file: bool,
    },

    /// List scenarios in execution order
    List,

    /// Show the config file location and resolved settings
    Config {
        #[command(flatten)]
        connection: ConnectionArgs,
    },
}

/// Connection settings that override the config file
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// API base URL
    #[arg(long, env = "SPOILER_BASE_URL")]
    pub base_url: Option<String>,

    /// Username to authenticate with
    #[arg(long, env = "SPOILER_USERNAME")]
    pub username: Option<String>,

    /// Password to authenticate with
    #[arg(long, env = "SPOILER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl From<ConnectionArgs> for crate::common::config::Overrides {
    fn from(args: ConnectionArgs) -> Self {
        Self {
            base_url: args.base_url,
            username: args.username,
            password: args.password,
        }
    }
}
