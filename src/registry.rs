//! Override registry — the per-type table of segment name → handler.
//!
//! A registry is built once, before any node that consults it exists, and
//! is immutable afterward. Besides handlers it carries declared child
//! registries: resolving a segment with a declared child yields a node
//! bound to that child registry, while undeclared segments inherit the
//! current registry, so handlers registered upstream stay reachable along
//! the chain.
//!
//! Dispatchability is structural. A function that was never registered is
//! simply not part of the dispatch surface; there is nothing to tag.

use std::collections::HashMap;
use std::sync::Arc;

/// Immutable mapping from segment name to handler, plus declared child
/// registries for typed sub-paths.
pub struct OverrideRegistry<H> {
    handlers: HashMap<String, H>,
    children: HashMap<String, Arc<OverrideRegistry<H>>>,
}

impl<H> OverrideRegistry<H> {
    pub fn builder() -> RegistryBuilder<H> {
        RegistryBuilder {
            handlers: HashMap::new(),
            children: HashMap::new(),
        }
    }

    /// A registry with no handlers and no declared children.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            handlers: HashMap::new(),
            children: HashMap::new(),
        })
    }

    /// Handler registered for `segment`, if any.
    pub fn get(&self, segment: &str) -> Option<&H> {
        self.handlers.get(segment)
    }

    /// Declared child registry for `segment`, if any.
    pub fn child(&self, segment: &str) -> Option<Arc<Self>> {
        self.children.get(segment).cloned()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> std::fmt::Debug for OverrideRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideRegistry")
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`OverrideRegistry`]. Consumed by [`build`], after which the
/// registry cannot change.
///
/// [`build`]: RegistryBuilder::build
pub struct RegistryBuilder<H> {
    handlers: HashMap<String, H>,
    children: HashMap<String, Arc<OverrideRegistry<H>>>,
}

impl<H> RegistryBuilder<H> {
    /// Register `handler` for calls whose terminal segment is `segment`.
    pub fn handler(mut self, segment: impl Into<String>, handler: H) -> Self {
        self.handlers.insert(segment.into(), handler);
        self
    }

    /// Declare a typed child registry for `segment`. Nodes resolved through
    /// that segment consult the child instead of inheriting this registry.
    pub fn child(mut self, segment: impl Into<String>, child: Arc<OverrideRegistry<H>>) -> Self {
        self.children.insert(segment.into(), child);
        self
    }

    pub fn build(self) -> Arc<OverrideRegistry<H>> {
        Arc::new(OverrideRegistry {
            handlers: self.handlers,
            children: self.children,
        })
    }
}
