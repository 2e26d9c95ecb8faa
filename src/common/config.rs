//! Configuration file handling
//!
//! Settings are resolved as: command line / environment > config file > default.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::{Error, Result};

/// Base URL of the public Story Spoiler deployment
pub const DEFAULT_BASE_URL: &str = "https://d3s5nxhwblsjbi.cloudfront.net";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// API endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Login credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Timeout settings
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// API endpoint settings
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base URL all API paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Login credentials; neither has a default
#[derive(Debug, Deserialize, Default)]
pub struct CredentialsConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Timeout settings in seconds
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Per-request timeout applied to every HTTP call
    #[serde(default = "default_request")]
    pub request_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: default_request(),
        }
    }
}

fn default_request() -> u64 {
    30
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Fully resolved connection settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub request_timeout: Duration,
}

impl Settings {
    /// Create settings directly, using the default request timeout
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            request_timeout: Duration::from_secs(default_request()),
        }
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Merge overrides on top of the file values and validate the result
    pub fn resolve(self, overrides: Overrides) -> Result<Settings> {
        let base_url = non_blank(overrides.base_url)
            .unwrap_or(self.api.base_url)
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(Error::missing_setting("base URL", "--base-url", "SPOILER_BASE_URL"));
        }

        let username = non_blank(overrides.username)
            .or_else(|| non_blank(self.credentials.username))
            .ok_or_else(|| Error::missing_setting("username", "--username", "SPOILER_USERNAME"))?;
        let password = non_blank(overrides.password)
            .or_else(|| non_blank(self.credentials.password))
            .ok_or_else(|| Error::missing_setting("password", "--password", "SPOILER_PASSWORD"))?;

        if self.timeouts.request_secs == 0 {
            return Err(Error::Config(
                "timeouts.request_secs must be greater than zero".to_string(),
            ));
        }

        Ok(Settings {
            base_url,
            username,
            password,
            request_timeout: Duration::from_secs(self.timeouts.request_secs),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.credentials.username.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:8080/"

            [credentials]
            username = "reader"
            password = "secret"

            [timeouts]
            request_secs = 5
            "#,
        )
        .unwrap();

        let settings = config.resolve(Overrides::default()).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.username, "reader");
        assert_eq!(settings.password, "secret");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = Config::from_toml_str(
            r#"
            [credentials]
            username = "file-user"
            password = "file-pass"
            "#,
        )
        .unwrap();

        let settings = config
            .resolve(Overrides {
                base_url: Some("http://127.0.0.1:9000".into()),
                username: Some("cli-user".into()),
                password: None,
            })
            .unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.username, "cli-user");
        assert_eq!(settings.password, "file-pass");
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        let err = Config::default().resolve(Overrides::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("--username"));
    }

    #[test]
    fn test_blank_override_falls_back_to_file() {
        let config = Config::from_toml_str(
            r#"
            [credentials]
            username = "file-user"
            password = "file-pass"
            "#,
        )
        .unwrap();
        let settings = config
            .resolve(Overrides {
                username: Some("   ".into()),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(settings.username, "file-user");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config::from_toml_str(
            r#"
            [credentials]
            username = "u"
            password = "p"
            [timeouts]
            request_secs = 0
            "#,
        )
        .unwrap();
        assert!(config.resolve(Overrides::default()).is_err());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://from-file\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://from-file");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
