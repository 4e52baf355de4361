//! sdk::client
//!
//! Shared HTTP client configuration for the SaaS API.
//!
//! # Design
//!
//! A [`ClientConfig`] is assembled once per invocation from the resolved
//! context and handed to the service clients. It carries:
//! - a cookie store seeded with the profile's session cookie
//! - TLS verification per `--insecure-skip-tls-verify`
//! - the request tracing mode selected by `--debug`
//!
//! Errors are mapped from HTTP status the same way for every service.

use std::sync::Arc;
use std::time::Instant;

use reqwest::cookie::Jar;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::trace::HttpTrace;

/// User agent sent on every request.
pub const USER_AGENT: &str = "up-cli";

/// Cookie carrying the session token.
pub const COOKIE_NAME: &str = "SID";

/// Errors from the SaaS API.
#[derive(Debug, Clone, Error)]
pub enum SdkError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication failed (missing or expired session, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl SdkError {
    /// Whether the error is a 404 from the API.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::NotFound(_))
    }
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// HTTP client configuration shared by all service clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    http: Client,
    base_url: Url,
    trace: Option<HttpTrace>,
}

impl ClientConfig {
    /// Build a client configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API endpoint every request is relative to
    /// * `session` - Session token, seeded as the `SID` cookie for `base_url`
    /// * `insecure_skip_tls_verify` - Accept invalid server certificates
    /// * `trace` - Request tracing mode
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Client` if the HTTP client cannot be constructed.
    pub fn new(
        base_url: Url,
        session: Option<&str>,
        insecure_skip_tls_verify: bool,
        trace: Option<HttpTrace>,
    ) -> Result<Self, SdkError> {
        let jar = Jar::default();
        if let Some(session) = session.filter(|s| !s.is_empty()) {
            jar.add_cookie_str(&format!("{}={}", COOKIE_NAME, session), &base_url);
        }

        let http = Client::builder()
            .cookie_provider(Arc::new(jar))
            .danger_accept_invalid_certs(insecure_skip_tls_verify)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SdkError::Client(e.to_string()))?;

        debug!(
            base_url = %base_url,
            has_session = session.is_some_and(|s| !s.is_empty()),
            insecure_skip_tls_verify,
            "built API client"
        );

        Ok(Self {
            http,
            base_url,
            trace,
        })
    }

    /// API endpoint requests are relative to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Tracing mode applied to requests.
    pub fn trace(&self) -> Option<HttpTrace> {
        self.trace
    }

    /// Underlying HTTP client.
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Build a URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, SdkError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SdkError::Client(format!("cannot use '{}' as a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, tracing it and mapping error statuses.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, SdkError> {
        let request = builder
            .build()
            .map_err(|e| SdkError::Client(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().clone();

        if let Some(trace) = &self.trace {
            trace.request(&request);
        }

        let started = Instant::now();
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| SdkError::Network(e.to_string()))?;

        if let Some(trace) = &self.trace {
            trace.response(&method, &url, &response, started.elapsed());
        }

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }
}

/// Map an error response to an `SdkError`.
async fn error_from_response(response: Response) -> SdkError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) if !body.message.is_empty() => body.message,
        _ if !text.trim().is_empty() => text.trim().to_string(),
        _ => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SdkError::AuthFailed(message),
        StatusCode::NOT_FOUND => SdkError::NotFound(message),
        _ => SdkError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
