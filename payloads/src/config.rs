//! Client configuration.
//!
//! The base URL is resolved once by whoever assembles the process (the ui's
//! entry point, the dev server, the tests) and handed to
//! [`APIClient::new`](crate::APIClient::new). A missing or malformed value is
//! reported here, before any request can be built.

use reqwest::Url;

/// Variable holding the api base URL, e.g.
/// `https://jsonplaceholder.typicode.com`.
pub const API_URL_VAR: &str = "API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not defined")]
    MissingBaseUrl { var: &'static str },
    #[error("{var} is not a valid http(s) url: {value:?} ({reason})")]
    InvalidBaseUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl ClientConfig {
    /// Validate a base URL. Trailing slashes are dropped so that endpoints
    /// written as `/posts` join cleanly.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl { var: API_URL_VAR });
        }
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            var: API_URL_VAR,
            value: trimmed.to_string(),
            reason,
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", url.scheme())));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query or fragment not allowed".into()));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Build from an optional value, treating absence as a missing base URL.
    ///
    /// The browser build passes `option_env!("API_URL")` here.
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(ConfigError::MissingBaseUrl { var: API_URL_VAR }),
        }
    }

    /// Read [`API_URL_VAR`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(API_URL_VAR).ok().as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
