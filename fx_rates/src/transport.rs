//! Blocking HTTP seam used by the live resolver.
//!
//! `HttpTransport` keeps the resolver independent from the HTTP stack so it can be
//! driven by a scripted transport in tests. `ReqwestTransport` is the production
//! implementation on top of `reqwest::blocking`.

use std::time::Duration;

use fx_common::{ConverterError, Result};
use reqwest::header::ACCEPT;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl HttpResponse {
    /// 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// `true` for any 2xx status.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issues a GET request and returns the response, or an error if nothing came back.
pub trait HttpTransport: Send + Sync {
    /// Fetch `url` with an `Accept: application/json` header.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// `reqwest` blocking client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Client with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("fx_rates/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ConverterError::Transport(format!("failed to build client: {e}")))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ConverterError::Transport(format!("request timeout: {e}"))
                } else if e.is_connect() {
                    ConverterError::Transport(format!("connection failed: {e}"))
                } else {
                    ConverterError::Transport(format!("request failed: {e}"))
                }
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ConverterError::Transport(format!("failed to read response body: {e}")))?;
        Ok(HttpResponse { status, body })
    }
}
