//! Blocking path nodes and dispatch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::client::ClientInner;
use super::executor::Executor;
use crate::args::CallArgs;
use crate::error::{Error, ResolutionReason};
use crate::registry::OverrideRegistry;
use crate::segment;
use crate::Result;

/// A handler bound to a path segment name, blocking flavor.
pub type Handler<E> =
    Arc<dyn Fn(&PathNode<E>, CallArgs) -> Result<<E as Executor>::Output> + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler<E, F>(f: F) -> Handler<E>
where
    E: Executor,
    F: Fn(&PathNode<E>, CallArgs) -> Result<E::Output> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// One link of a blocking call chain.
pub struct PathNode<E: Executor> {
    path: String,
    client: Arc<ClientInner<E>>,
    registry: Arc<OverrideRegistry<Handler<E>>>,
    locked: AtomicBool,
}

impl<E: Executor> PathNode<E> {
    pub(crate) fn new(
        path: String,
        client: Arc<ClientInner<E>>,
        registry: Arc<OverrideRegistry<Handler<E>>>,
    ) -> Self {
        Self {
            path,
            client,
            registry,
            locked: AtomicBool::new(false),
        }
    }

    /// Resolve `name` into a child node; same rules as the async variant.
    pub fn seg(&self, name: &str) -> Result<PathNode<E>> {
        if self.locked.load(Ordering::SeqCst) {
            return Err(Error::Resolution {
                segment: name.to_string(),
                reason: ResolutionReason::Locked,
            });
        }
        segment::validate(name)?;
        let registry = self
            .registry
            .child(name)
            .unwrap_or_else(|| Arc::clone(&self.registry));
        Ok(PathNode::new(
            segment::join(&self.path, name),
            Arc::clone(&self.client),
            registry,
        ))
    }

    /// Indexed-style resolution; behaves exactly like [`seg`](Self::seg).
    pub fn at(&self, name: &str) -> Result<PathNode<E>> {
        self.seg(name)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Invoke this node. Handler wins over executor, argument mismatches
    /// are rewritten to the terminal segment, the lock is released on every
    /// exit path.
    pub fn call(&self, args: CallArgs) -> Result<E::Output> {
        let _guard = LockGuard::engage(&self.locked);
        match segment::terminal(&self.path, &self.client.base) {
            Some(name) => {
                let name = name.to_string();
                if let Some(handler) = self.registry.get(&name) {
                    debug!(segment = %name, "dispatching to handler");
                    handler(self, args).map_err(|e| e.named(&name))
                } else {
                    debug!(segment = %name, url = %self.path, "dispatching to executor");
                    self.client
                        .executor
                        .execute(&self.path, args)
                        .map_err(|e| e.named(&name))
                }
            }
            None => {
                debug!(url = %self.path, "dispatching bare root to executor");
                self.client.executor.execute(&self.path, args)
            }
        }
    }

    /// Go straight to the bound executor with this node's path.
    pub fn request(&self, args: CallArgs) -> Result<E::Output> {
        self.client.executor.execute(&self.path, args)
    }
}

impl<E: Executor> std::fmt::Debug for PathNode<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathNode")
            .field("path", &self.path)
            .field("locked", &self.is_locked())
            .finish()
    }
}

struct LockGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LockGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
