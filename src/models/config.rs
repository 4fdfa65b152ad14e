//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote data service settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        self.remote.base_url()?;
        if self.remote.format.trim().is_empty() {
            return Err(AppError::validation("remote.format is empty"));
        }
        if self.remote.user_agent.trim().is_empty() {
            return Err(AppError::validation("remote.user_agent is empty"));
        }
        if self.remote.timeout_secs == 0 {
            return Err(AppError::validation("remote.timeout_secs must be > 0"));
        }
        if self.server.port == 0 {
            return Err(AppError::validation("server.port must be > 0"));
        }
        if self.server.template_path.trim().is_empty() {
            return Err(AppError::validation("server.template_path is empty"));
        }
        Ok(())
    }
}

/// Remote parliamentary data service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base address every resource path is appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Value of the `format` query parameter sent with every request
    #[serde(default = "defaults::format")]
    pub format: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl RemoteConfig {
    /// Parse the configured base address.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(AppError::config(format!(
                "remote.base_url cannot be used as a base: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            format: defaults::format(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Listening port
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Search page template, read on every request
    #[serde(default = "defaults::template_path")]
    pub template_path: String,
}

impl ServerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            template_path: defaults::template_path(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    #[serde(default = "defaults::level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
        }
    }
}

mod defaults {
    // Remote defaults
    pub fn base_url() -> String {
        "http://ws.parlament.ch".into()
    }
    pub fn format() -> String {
        "json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; committees/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Server defaults
    pub fn host() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        8080
    }
    pub fn template_path() -> String {
        "www/index.html".into()
    }

    // Logging defaults
    pub fn level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.remote.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.remote.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = Config::default();
        config.remote.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));

        config.remote.base_url = "mailto:someone@example.com".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9090\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.remote.base_url, "http://ws.parlament.ch");
        assert_eq!(config.remote.format, "json");
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(AppError::Toml(_))));
    }
}
