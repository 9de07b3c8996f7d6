// src/error.rs

//! Unified error handling for the grab application.

use std::fmt;

use thiserror::Error;

/// Result type alias for grab operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// No site handler is registered for the URL
    #[error("No handler registered for URL: {url}")]
    UnresolvedSite { url: String },

    /// A required structural query matched no element
    #[error("Required field '{field}' missing during extraction ({site})")]
    MissingField {
        site: &'static str,
        field: &'static str,
    },

    /// HTML-to-text conversion failed
    #[error("Text render error: {0}")]
    TextRender(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create an unresolved-site error for a URL.
    pub fn unresolved(url: impl Into<String>) -> Self {
        Self::UnresolvedSite { url: url.into() }
    }

    /// Create a missing-field extraction error.
    pub fn missing_field(site: &'static str, field: &'static str) -> Self {
        Self::MissingField { site, field }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
