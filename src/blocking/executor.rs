//! Blocking request executors.

use std::time::Duration;

use tracing::{debug, warn};

use crate::args::CallArgs;
use crate::error::{Error, TransportError};
use crate::Result;

/// The blocking request strategy: the HTTP call runs on the caller's
/// thread and returns synchronously.
pub trait Executor: Send + Sync {
    type Output;

    fn execute(&self, url: &str, args: CallArgs) -> Result<Self::Output>;
}

/// Blocking executor returning the raw transport response. A fresh session
/// is built for each call and dropped when it returns.
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

    fn session(&self) -> Result<reqwest::blocking::Client> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

impl Executor for HttpExecutor {
    type Output = reqwest::blocking::Response;

    fn execute(&self, url: &str, args: CallArgs) -> Result<reqwest::blocking::Response> {
        let target = args.url_override().unwrap_or(url).to_string();
        debug!(method = %args.method(), url = %target, "issuing blocking request");

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
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}

/// Blocking executor reducing responses to JSON: [`Error::Status`] on
/// non-2xx, parsed body otherwise.
#[derive(Debug, Clone, Default)]
pub struct JsonExecutor {
    inner: HttpExecutor,
}

impl JsonExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_http(inner: HttpExecutor) -> Self {
        Self { inner }
    }
}

impl Executor for JsonExecutor {
    type Output = serde_json::Value;

    fn execute(&self, url: &str, args: CallArgs) -> Result<serde_json::Value> {
        let response = self.inner.execute(url, args)?;
        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!(status = status.as_u16(), url = %final_url, "non-success status");
            return Err(Error::Status {
                status: status.as_u16(),
                url: final_url,
                body,
            });
        }
        response
            .json()
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}
