//! sdk::trace
//!
//! Request/response tracing selected by the debug level.
//!
//! Levels:
//! - `0`: no tracing
//! - `1`: URL with timing
//! - `2`: URL, request headers, response status and headers
//! - `3+`: curl command, URL with timing, detailed timing, response headers
//!
//! Events are emitted through `tracing` at debug level under the
//! `up_cli::http` target.

use std::time::Duration;

use reqwest::header::{HeaderMap, AUTHORIZATION, COOKIE};
use reqwest::{Method, Request, Response};
use tracing::debug;
use url::Url;

const MASKED: &str = "<masked>";

/// Which parts of an HTTP exchange get traced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HttpTrace {
    pub just_url: bool,
    pub url_timing: bool,
    pub curl_command: bool,
    pub request_headers: bool,
    pub response_status: bool,
    pub response_headers: bool,
    pub detailed_timing: bool,
}

impl HttpTrace {
    /// Select the tracing detail for a debug level.
    ///
    /// Returns `None` for level 0.
    pub fn for_level(level: u8) -> Option<Self> {
        match level {
            0 => None,
            1 => Some(Self {
                url_timing: true,
                ..Default::default()
            }),
            2 => Some(Self {
                just_url: true,
                request_headers: true,
                response_status: true,
                response_headers: true,
                ..Default::default()
            }),
            _ => Some(Self {
                curl_command: true,
                url_timing: true,
                detailed_timing: true,
                response_headers: true,
                ..Default::default()
            }),
        }
    }

    /// Trace an outgoing request.
    pub fn request(&self, request: &Request) {
        if self.curl_command {
            debug!(target: "up_cli::http", "{}", curl_command(request));
        }
        if self.just_url {
            debug!(target: "up_cli::http", "{} {}", request.method(), request.url());
        }
        if self.request_headers {
            debug!(target: "up_cli::http", "Request Headers:\n{}", format_headers(request.headers()));
        }
    }

    /// Trace a received response.
    pub fn response(&self, method: &Method, url: &Url, response: &Response, elapsed: Duration) {
        if self.url_timing {
            debug!(
                target: "up_cli::http",
                "{} {} {} in {} milliseconds",
                method,
                url,
                response.status(),
                elapsed.as_millis()
            );
        }
        if self.detailed_timing {
            debug!(target: "up_cli::http", "HTTP Trace: total {} ms", elapsed.as_millis());
        }
        if self.response_status {
            debug!(target: "up_cli::http", "Response Status: {}", response.status());
        }
        if self.response_headers {
            debug!(target: "up_cli::http", "Response Headers:\n{}", format_headers(response.headers()));
        }
    }
}

/// Render a request as an equivalent curl command, masking credentials.
pub fn curl_command(request: &Request) -> String {
    let mut cmd = format!("curl -v -X{}", request.method());
    for (name, value) in request.headers() {
        let value = if is_sensitive(name.as_str()) {
            MASKED
        } else {
            value.to_str().unwrap_or(MASKED)
        };
        cmd.push_str(&format!(" -H \"{}: {}\"", name, value));
    }
    cmd.push_str(&format!(" '{}'", request.url()));
    cmd
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if is_sensitive(name.as_str()) {
                MASKED
            } else {
                value.to_str().unwrap_or(MASKED)
            };
            format!("    {}: {}", name, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_sensitive(name: &str) -> bool {
    name.eq_ignore_ascii_case(AUTHORIZATION.as_str()) || name.eq_ignore_ascii_case(COOKIE.as_str())
}
