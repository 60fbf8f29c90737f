//! Client configuration
//!
//! Recognized options and their resolution rules. In development mode both
//! endpoints default to a localhost backend; in production the event-server
//! URL may be derived from the API base URL by stripping its `/api` path
//! segment.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::DEFAULT_DEV_URL;
use crate::errors::{ApiError, ApiResult};

/// Build mode of the hosting application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

/// Client endpoint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute URL of the HTTP API
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Absolute URL of the event server; derived from `api_base_url` when
    /// unset
    #[serde(default)]
    pub event_server_url: Option<String>,
    #[serde(default)]
    pub mode: Mode,
}

impl ClientConfig {
    /// Development configuration: everything against a localhost backend
    pub fn development() -> Self {
        Self::default()
    }

    /// Production configuration with an explicit API base URL
    pub fn production(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: Some(api_base_url.into()),
            event_server_url: None,
            mode: Mode::Production,
        }
    }

    /// Resolve the HTTP API base URL
    ///
    /// # Errors
    /// Returns `ApiError::Config` if no URL is configured in production or
    /// the configured value is not an absolute URL.
    pub fn api_url(&self) -> ApiResult<String> {
        match &self.api_base_url {
            Some(raw) => validate_url(raw),
            None if self.mode == Mode::Development => Ok(DEFAULT_DEV_URL.to_string()),
            None => Err(ApiError::Config(
                "api_base_url is required in production mode".to_string(),
            )),
        }
    }

    /// Resolve the event server URL
    ///
    /// Falls back to `api_base_url` with a trailing `/api` segment removed,
    /// or the localhost default in development.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if neither URL resolves.
    pub fn event_url(&self) -> ApiResult<String> {
        if let Some(raw) = &self.event_server_url {
            return validate_url(raw);
        }
        if self.mode == Mode::Development && self.api_base_url.is_none() {
            return Ok(DEFAULT_DEV_URL.to_string());
        }
        let api = self.api_url()?;
        Ok(api.strip_suffix("/api").unwrap_or(&api).to_string())
    }
}

/// Validate and normalize an absolute URL, trimming a trailing slash
fn validate_url(raw: &str) -> ApiResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    Url::parse(trimmed)
        .map_err(|e| ApiError::Config(format!("invalid URL {trimmed:?}: {e}")))?;
    Ok(trimmed.to_string())
}
