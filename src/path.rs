//! Path nodes and the dispatch invoker.
//!
//! A [`PathNode`] is a disposable view over its owning client: one node per
//! segment access, each carrying an independent copy of the accumulated
//! path. Invoking a node runs the dispatch invoker, which either hands the
//! call to the handler registered for the node's terminal segment or falls
//! through to the client's bound executor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::debug;

use crate::args::CallArgs;
use crate::client::ClientInner;
use crate::error::{Error, ResolutionReason};
use crate::executor::Executor;
use crate::registry::OverrideRegistry;
use crate::segment;
use crate::Result;

/// A handler bound to a path segment name. Invoked with the node the call
/// landed on plus the invocation's arguments; once a handler is chosen the
/// executor is never called behind its back — any further dispatch is the
/// handler's responsibility, typically via [`PathNode::request`].
pub type Handler<E> = Arc<
    dyn for<'a> Fn(&'a PathNode<E>, CallArgs) -> BoxFuture<'a, Result<<E as Executor>::Output>>
        + Send
        + Sync,
>;

/// Wrap a boxed-future closure as a [`Handler`].
pub fn handler<E, F>(f: F) -> Handler<E>
where
    E: Executor,
    F: for<'a> Fn(&'a PathNode<E>, CallArgs) -> BoxFuture<'a, Result<E::Output>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// One link of a call chain: an accumulated path, a shared reference to the
/// owning client, and the override registry in effect at this depth.
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

    /// Resolve `name` into a child node with path `self.path + name + "/"`.
    ///
    /// Fails immediately when `name` is reserved (leading underscore),
    /// empty, contains a separator, or when this node is locked by an
    /// in-flight invocation. The child consults the registry declared for
    /// `name` if there is one, and inherits this node's registry otherwise.
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

    /// The fully accumulated path, always separator-terminated.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether an invocation on this node is in flight.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Invoke this node: the dispatch invoker.
    ///
    /// The node is locked for the duration of the call and unlocked on
    /// every exit path. A handler registered for the terminal segment wins
    /// over the executor; an argument mismatch surfacing from either is
    /// rewritten to name the terminal segment before it reaches the caller.
    /// A node with no accumulated segment (the bare root) dispatches
    /// straight to the executor with the base path.
    pub async fn call(&self, args: CallArgs) -> Result<E::Output> {
        let _guard = LockGuard::engage(&self.locked);
        match segment::terminal(&self.path, &self.client.base) {
            Some(name) => {
                let name = name.to_string();
                if let Some(handler) = self.registry.get(&name) {
                    debug!(segment = %name, "dispatching to handler");
                    handler(self, args).await.map_err(|e| e.named(&name))
                } else {
                    debug!(segment = %name, url = %self.path, "dispatching to executor");
                    self.client
                        .executor
                        .execute(&self.path, args)
                        .await
                        .map_err(|e| e.named(&name))
                }
            }
            None => {
                debug!(url = %self.path, "dispatching bare root to executor");
                self.client.executor.execute(&self.path, args).await
            }
        }
    }

    /// Go straight to the bound executor with this node's path. This is the
    /// escape hatch handlers use to perform the actual request once they
    /// have massaged the arguments.
    pub async fn request(&self, args: CallArgs) -> Result<E::Output> {
        self.client.executor.execute(&self.path, args).await
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

/// Sets the lock flag for the dynamic extent of an invocation and clears it
/// on drop, so the flag is false again on success, handler error, executor
/// error, and panic alike.
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
