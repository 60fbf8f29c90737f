//! HTTP client with a fixed total timeout
//!
//! A thin wrapper over reqwest that applies one total timeout per request
//! and normalizes transport failures into the domain error taxonomy. There
//! is no retry at this layer; callers decide what is worth repeating.

use std::time::Duration;

use ecotrack_domain::constants::HTTP_TIMEOUT_MS;
use ecotrack_domain::{ApiError, ApiResult};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

/// HTTP client with built-in timeout support
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    timeout: Duration,
}

impl HttpClient {
    /// Start building a new HTTP client
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration
    pub fn new() -> ApiResult<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder
    ///
    /// Any response, success or not, is returned as-is; only transport
    /// failures become errors.
    ///
    /// # Errors
    /// `ApiError::Timeout` when the total timeout elapses, otherwise
    /// `ApiError::Network`.
    pub async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let request = builder
            .build()
            .map_err(|err| ApiError::Network(format!("failed to build request: {err}")))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) if err.is_timeout() => {
                debug!(%method, %url, "HTTP request timed out");
                Err(ApiError::Timeout(self.timeout))
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(ApiError::Network(err.to_string()))
            }
        }
    }

    /// The total timeout applied to every request
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for [`HttpClient`]
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<reqwest::header::HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(HTTP_TIMEOUT_MS),
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: reqwest::header::HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> ApiResult<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client, timeout: self.timeout })
    }
}
