//! Per-invocation call arguments.
//!
//! [`CallArgs`] is the typed counterpart of a loose keyword-argument bag:
//! an HTTP method, query pairs, header pairs, an optional JSON body and an
//! optional full-URL override. Executors read the whole bag; handlers
//! usually pick out the arguments they require and forward the rest.

use reqwest::Method;
use serde_json::Value;

use crate::error::Error;
use crate::Result;

/// Arguments carried by a single invocation on a path node.
#[derive(Debug, Clone)]
pub struct CallArgs {
    method: Method,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    url: Option<String>,
}

impl CallArgs {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            url: None,
        }
    }

    /// GET with no arguments, the default shape of a call.
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Append a query pair.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a request header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Replace the accumulated path with a full URL for this call only.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn header_pairs(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn url_override(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Look up a query argument a handler cannot do without. Absence is an
    /// argument mismatch; the dispatch invoker fills in the segment name
    /// before the error reaches the caller.
    pub fn require_query(&self, name: &str) -> Result<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| Error::mismatch(format!("missing query parameter `{name}`")))
    }

    /// The JSON body a handler cannot do without.
    pub fn require_json(&self) -> Result<&Value> {
        self.body
            .as_ref()
            .ok_or_else(|| Error::mismatch("missing JSON body"))
    }
}

impl Default for CallArgs {
    fn default() -> Self {
        Self::get()
    }
}
