//! Error types used throughout the client

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors, used by callers to decide how to surface them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Credential rejected (401) - handled centrally, never retried here
    Auth,
    /// Transport/timeout failure with no HTTP status - retriable
    Network,
    /// Client error (4xx other than 401) - non-retriable, shown to the user
    Client,
    /// Server error (5xx) - surfaced as transient
    Server,
    /// Configuration or decoding problem - non-retriable
    Config,
}

/// Errors produced by the HTTP transport and the API facade
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication expired: {0}")]
    AuthExpired(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Request rejected ({status}): {message}")]
    Client {
        status: u16,
        message: String,
        /// Decoded error body, when the server sent one
        body: Option<serde_json::Value>,
    },

    #[error("Server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::AuthExpired(_) => ApiErrorCategory::Auth,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Decode(_) | Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Whether the caller may reasonably retry the operation
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.category(),
            ApiErrorCategory::Network | ApiErrorCategory::Server
        )
    }

    /// The HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthExpired(_) => Some(401),
            Self::Client { status, .. } | Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors produced by the event channel
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Connect was requested without a stored credential; state is unchanged
    #[error("no credential available for event channel connection")]
    MissingCredential,

    /// The event server rejected the credential during the handshake
    #[error("event server rejected authentication")]
    AuthRejected,

    #[error("connection failed: {0}")]
    Connect(String),

    /// The reconnect cap was exhausted; only force-reconnect resumes
    #[error("reconnect attempts exhausted after {attempts} tries")]
    ReconnectExhausted { attempts: u32 },

    /// The channel latched terminal (shutdown, auth rejection or exhausted cap)
    #[error("channel is terminal; force-reconnect required")]
    Terminal,

    #[error("invalid event server URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;
