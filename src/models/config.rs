//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetch behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Batch processing behavior
    #[serde(default)]
    pub batch: BatchConfig,

    /// HTML-to-text conversion settings
    #[serde(default)]
    pub text: TextConfig,
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
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.fetch.max_concurrent == 0 {
            return Err(AppError::validation("fetch.max_concurrent must be > 0"));
        }
        if self.text.wrap_width == 0 {
            return Err(AppError::validation("text.wrap_width must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Maximum concurrent requests
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Batch processing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Stop processing the batch after the first URL with no registered
    /// handler. When false the error entry is emitted and the batch
    /// continues with the next URL.
    #[serde(default = "defaults::stop_on_unresolved")]
    pub stop_on_unresolved: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            stop_on_unresolved: defaults::stop_on_unresolved(),
        }
    }
}

/// HTML-to-text conversion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Render link elements as bare text instead of footnoted references
    #[serde(default = "defaults::ignore_links")]
    pub ignore_links: bool,

    /// Line width passed to the text renderer. Kept wide so verse lines
    /// are not re-wrapped.
    #[serde(default = "defaults::wrap_width")]
    pub wrap_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            ignore_links: defaults::ignore_links(),
            wrap_width: defaults::wrap_width(),
        }
    }
}

mod defaults {
    // Fetch defaults. The browser-like User-Agent avoids the basic
    // bot-blocking some of the registered sites apply.
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) \
         AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/39.0.2171.95 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn request_delay() -> u64 {
        100
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // Batch defaults
    pub fn stop_on_unresolved() -> bool {
        true
    }

    // Text defaults
    pub fn ignore_links() -> bool {
        true
    }
    pub fn wrap_width() -> usize {
        1000
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.fetch.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[batch]\nstop_on_unresolved = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(!config.batch.stop_on_unresolved);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.text.ignore_links);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/versegrab.toml");
        assert!(config.batch.stop_on_unresolved);
    }
}
