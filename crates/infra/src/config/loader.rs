//! Configuration loader
//!
//! Loads the client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from a file
//! 3. Probes multiple paths for config files
//! 4. Without either source, defaults to the development configuration
//!
//! ## Environment Variables
//! - `ECOTRACK_API_BASE_URL`: Absolute URL of the HTTP API
//! - `ECOTRACK_EVENT_SERVER_URL`: Absolute URL of the event server
//!   (optional; derived from the API URL when unset)
//! - `ECOTRACK_MODE`: `development` or `production` (default: development)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./ecotrack.json` or `./ecotrack.toml` (current working directory)
//! 3. Up to two parent directories of the above
//! 4. Relative to the executable location

use std::path::{Path, PathBuf};

use ecotrack_domain::{ApiError, ApiResult, ClientConfig, Mode};

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ApiError::Config` if a source was found but is invalid.
pub fn load() -> ApiResult<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying config file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("no configuration found, using development defaults");
                    Ok(ClientConfig::development())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `ECOTRACK_API_BASE_URL` must be present; the other variables are
/// optional.
///
/// # Errors
/// Returns `ApiError::Config` if the required variable is missing or a
/// value is invalid.
pub fn load_from_env() -> ApiResult<ClientConfig> {
    let api_base_url = std::env::var("ECOTRACK_API_BASE_URL").map_err(|_| {
        ApiError::Config("missing required environment variable: ECOTRACK_API_BASE_URL".into())
    })?;
    let event_server_url = std::env::var("ECOTRACK_EVENT_SERVER_URL").ok();
    let mode = match std::env::var("ECOTRACK_MODE") {
        Ok(raw) => parse_mode(&raw)?,
        Err(_) => Mode::Development,
    };

    Ok(ClientConfig {
        api_base_url: Some(api_base_url),
        event_server_url,
        mode,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ApiError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> ApiResult<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ApiError::Config(format!("config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ApiError::Config("no config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ApiError::Config(format!("failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format by
/// extension
fn parse_config(contents: &str, path: &Path) -> ApiResult<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ApiError::Config(format!("invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ApiError::Config(format!("invalid JSON format: {e}"))),
        _ => Err(ApiError::Config(format!("unsupported config format: {extension}"))),
    }
}

/// Probe standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        for base in [&cwd, &cwd.join(".."), &cwd.join("../..")] {
            for name in ["config.json", "config.toml", "ecotrack.json", "ecotrack.toml"] {
                candidates.push(base.join(name));
            }
        }
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            for name in ["config.json", "config.toml", "ecotrack.json", "ecotrack.toml"] {
                candidates.push(exe_dir.join(name));
            }
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn parse_mode(raw: &str) -> ApiResult<Mode> {
    match raw.to_ascii_lowercase().as_str() {
        "development" => Ok(Mode::Development),
        "production" => Ok(Mode::Production),
        other => Err(ApiError::Config(format!("invalid mode: {other}"))),
    }
}
