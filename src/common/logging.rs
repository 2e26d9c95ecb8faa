//! Logging and tracing configuration
//!
//! Logs go to stderr so they never interleave with the report on stdout.
//! An optional log file captures the full request trace of a run.

use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::paths;

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("spoiler=debug,warn")
        } else {
            EnvFilter::new("spoiler=info,warn")
        }
    })
}

/// Initialize tracing for the CLI (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is INFO for this crate (DEBUG with `verbose`), WARN for dependencies.
pub fn init_cli(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Initialize tracing with an additional log file at `<data dir>/logs/suite.log`
///
/// Returns the log file path, or `None` if the file could not be opened,
/// in which case only stderr logging is installed.
pub fn init_with_file(verbose: bool) -> Option<PathBuf> {
    let log_file = suite_log_path()?;
    let opened = log_file
        .parent()
        .map(std::fs::create_dir_all)
        .transpose()
        .and_then(|_| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
        });

    match opened {
        Ok(file) => {
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .compact();

            tracing_subscriber::registry()
                .with(default_filter(verbose))
                .with(file_layer)
                .with(stderr_layer)
                .init();

            Some(log_file)
        }
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_cli(verbose);
            None
        }
    }
}

/// Get the path to the suite log file
pub fn suite_log_path() -> Option<PathBuf> {
    paths::log_dir().map(|d| d.join("suite.log"))
}
