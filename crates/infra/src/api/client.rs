//! Authenticated transport adapter
//!
//! Owns the credential read path: every outbound request carries the
//! stored credential as a bearer header when one exists. A 401 response
//! clears the credential and notifies the session handler exactly once per
//! interception, then still fails the original call. No retry here.

use std::sync::Arc;
use std::time::Duration;

use ecotrack_core::{CredentialStore, SessionEvents};
use ecotrack_domain::{ApiError, ApiResult, ClientConfig};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::http::HttpClient;

/// Query string pairs assembled by the façade
pub type Query = Vec<(&'static str, String)>;

/// Authenticated HTTP client for the EcoTrack API
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    session: Arc<dyn SessionEvents>,
}

impl ApiClient {
    /// Build a client from the resolved configuration
    ///
    /// # Errors
    /// Returns `ApiError::Config` when the base URL does not resolve or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        session: Arc<dyn SessionEvents>,
    ) -> ApiResult<Self> {
        let base_url = config.api_url()?;
        let http = HttpClient::builder().build()?;
        Ok(Self { http, base_url, credentials, session })
    }

    /// Override the request timeout (tests use a short one)
    pub fn with_timeout(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        session: Arc<dyn SessionEvents>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let base_url = config.api_url()?;
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url, credentials, session })
    }

    /// Execute a GET request
    pub async fn get<R: DeserializeOwned>(&self, path: &str, query: &Query) -> ApiResult<R> {
        self.request::<(), R>(Method::GET, path, query, None).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        self.request(Method::POST, path, &Vec::new(), Some(body)).await
    }

    /// Execute a PUT request with a JSON body
    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        self.request(Method::PUT, path, &Vec::new(), Some(body)).await
    }

    /// Execute a DELETE request
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request::<(), R>(Method::DELETE, path, &Vec::new(), None).await
    }

    async fn request<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&T>,
    ) -> ApiResult<R> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "API request");

        let mut builder = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.credentials.get() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            self.intercept_auth_expired();
            return Err(ApiError::AuthExpired(error_message(&body, status)));
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let decoded: Option<serde_json::Value> = serde_json::from_str(&text).ok();
            let message = error_message(&text, status);
            return Err(if status.is_server_error() {
                ApiError::Server { status: status.as_u16(), message, body: decoded }
            } else {
                ApiError::Client { status: status.as_u16(), message, body: decoded }
            });
        }

        if status == StatusCode::NO_CONTENT {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|e| ApiError::Decode(format!("empty body for {path}: {e}")));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("response for {path}: {e}")))
    }

    /// 401 interceptor: clear the credential, then navigate to sign-in via
    /// the session handler, exactly once per interception
    fn intercept_auth_expired(&self) {
        warn!("credential rejected (401), clearing stored credential");
        self.credentials.clear();
        info!("redirecting to sign-in");
        self.session.auth_expired();
    }
}

/// Extract a display message from an error body, preferring the backend's
/// `message`/`error` fields
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body.trim().to_string()
    }
}
