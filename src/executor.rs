//! Request executors — the pluggable strategy that turns an accumulated
//! path plus call arguments into a network call.
//!
//! The engine ships two: [`HttpExecutor`], which hands back the raw
//! [`reqwest::Response`], and [`JsonExecutor`], which raises on non-2xx
//! statuses and parses the body as JSON. Implementing [`Executor`] yourself
//! is the primary customization seam of the whole engine.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::args::CallArgs;
use crate::error::{Error, TransportError};
use crate::Result;

/// The suspending request strategy. The call suspends at the network
/// boundary and resumes when the response arrives.
#[async_trait]
pub trait Executor: Send + Sync {
    /// What an invocation yields to the caller.
    type Output;

    /// Turn the resolved `url` and the invocation's `args` into a result.
    ///
    /// `url` is the node's fully accumulated path; executors honor
    /// [`CallArgs::url_override`] when present.
    async fn execute(&self, url: &str, args: CallArgs) -> Result<Self::Output>;
}

/// Executor returning the raw transport response.
///
/// A fresh transport session is acquired immediately before each call and
/// dropped immediately after it, success or failure; no session is held
/// across suspension points or reused between invocations. Configuration
/// captured at construction (default headers, timeout) is applied to every
/// call.
#[derive(Debug, Clone, Default)]
pub struct HttpExecutor {
    default_headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header sent with every request issued through this executor.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn session(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

#[async_trait]
impl Executor for HttpExecutor {
    type Output = reqwest::Response;

    async fn execute(&self, url: &str, args: CallArgs) -> Result<reqwest::Response> {
        let target = args.url_override().unwrap_or(url).to_string();
        debug!(method = %args.method(), url = %target, "issuing request");

        // Session lives for exactly this call.
        let session = self.session()?;
        let mut request = session.request(args.method().clone(), target.as_str());
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }
        for (key, value) in args.header_pairs() {
            request = request.header(key, value);
        }
        if !args.query_pairs().is_empty() {
            request = request.query(args.query_pairs());
        }
        if let Some(body) = args.json_body() {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

/// Executor reducing responses to JSON.
///
/// Canonical reducing contract: non-2xx statuses become [`Error::Status`],
/// 2xx bodies are parsed as JSON. Callers wanting different behavior wrap
/// [`HttpExecutor`] themselves.
#[derive(Debug, Clone, Default)]
pub struct JsonExecutor {
    inner: HttpExecutor,
}

impl JsonExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduce responses from an already configured [`HttpExecutor`].
    pub fn from_http(inner: HttpExecutor) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Executor for JsonExecutor {
    type Output = serde_json::Value;

    async fn execute(&self, url: &str, args: CallArgs) -> Result<serde_json::Value> {
        let response = self.inner.execute(url, args).await?;
        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %final_url, "non-success status");
            return Err(Error::Status {
                status: status.as_u16(),
                url: final_url,
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}
