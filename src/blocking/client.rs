//! Blocking root client.

use std::sync::Arc;

use super::executor::Executor;
use super::path::{Handler, PathNode};
use crate::args::CallArgs;
use crate::error::Error;
use crate::registry::OverrideRegistry;
use crate::segment;
use crate::Result;

pub(crate) struct ClientInner<E> {
    pub(crate) base: String,
    pub(crate) executor: E,
}

/// Root of all blocking call chains for one API target.
pub struct Client<E: Executor> {
    root: PathNode<E>,
}

impl<E: Executor> Client<E> {
    /// A client with no registered handlers.
    pub fn new(base: impl Into<String>, executor: E) -> Result<Self> {
        ClientBuilder::new(base, executor).build()
    }

    pub fn builder(base: impl Into<String>, executor: E) -> ClientBuilder<E> {
        ClientBuilder::new(base, executor)
    }

    /// Start a fresh chain from the base path.
    pub fn seg(&self, name: &str) -> Result<PathNode<E>> {
        self.root.seg(name)
    }

    /// Indexed-style access, identical to [`seg`](Self::seg).
    pub fn at(&self, name: &str) -> Result<PathNode<E>> {
        self.root.at(name)
    }

    /// Invoke the bare base path.
    pub fn call(&self, args: CallArgs) -> Result<E::Output> {
        self.root.call(args)
    }

    pub fn base(&self) -> &str {
        self.root.path()
    }
}

impl<E: Executor> std::fmt::Debug for Client<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").field("base", &self.base()).finish()
    }
}

/// Builder for the blocking [`Client`].
pub struct ClientBuilder<E: Executor> {
    base: String,
    executor: E,
    registry: Arc<OverrideRegistry<Handler<E>>>,
}

impl<E: Executor> ClientBuilder<E> {
    pub fn new(base: impl Into<String>, executor: E) -> Self {
        Self {
            base: base.into(),
            executor,
            registry: OverrideRegistry::empty(),
        }
    }

    /// Attach the root override registry.
    pub fn registry(mut self, registry: Arc<OverrideRegistry<Handler<E>>>) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Result<Client<E>> {
        if !self.base.is_empty() {
            url::Url::parse(&self.base).map_err(|e| Error::Configuration {
                message: format!("invalid base URL `{}`: {e}", self.base),
            })?;
        }
        let base = segment::normalize_base(&self.base);
        let inner = Arc::new(ClientInner {
            base: base.clone(),
            executor: self.executor,
        });
        Ok(Client {
            root: PathNode::new(base, inner, self.registry),
        })
    }
}
