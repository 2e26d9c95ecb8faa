//! Error types for the Story Spoiler suite
//!
//! Error messages are meant to be actionable: configuration problems name
//! the flag or environment variable that fixes them.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the suite
#[derive(Error, Debug)]
pub enum Error {
    // === Authentication Errors ===
    #[error("Authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    #[error("Authentication succeeded but the access token is missing or blank")]
    MissingToken,

    // === Transport Errors ===
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // === Scenario Errors ===
    #[error("Test assertion failed: {0}")]
    TestAssertion(String),

    #[error("No story id has been captured yet. The create scenario must pass before this one")]
    MissingStoryId,

    #[error("Skipped after an earlier failure (fail-fast)")]
    Skipped,

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an authentication failure from a status code and raw body
    pub fn authentication(status: u16, body: &str) -> Self {
        Self::Authentication {
            status,
            body: body.to_string(),
        }
    }

    /// Create an assertion failure comparing an expected and actual value
    pub fn mismatch<E: std::fmt::Display, A: std::fmt::Display>(
        what: &str,
        expected: E,
        actual: A,
    ) -> Self {
        Self::TestAssertion(format!("Expected {} {}, got {}", what, expected, actual))
    }

    /// Create a configuration error for a missing required setting
    pub fn missing_setting(name: &str, flag: &str, env: &str) -> Self {
        Self::Config(format!(
            "Missing {}. Pass {} or set {} (or add it to the config file)",
            name, flag, env
        ))
    }
}
