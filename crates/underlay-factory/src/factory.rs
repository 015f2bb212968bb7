//! The cooperating element-factory chain.
//!
//! Other construction hooks in the host register here so this library can
//! defer to them before constructing elements itself. Chaining is an
//! explicit ordered list with a two-step retry, not polymorphic dispatch.

use underlay_appearance::attrs::AttrGroup;

use crate::element::{Element, HostContext};

// ── ElementResolver ───────────────────────────────────────────────────────

/// One upstream factory in the chain.
///
/// `resolve` is the name-only call; richer factories may also answer the
/// parent-hinted retry. Returning `None` means "no opinion" and the chain
/// moves on.
pub trait ElementResolver {
    fn resolve(&self, name: &str, ctx: &HostContext, attrs: &dyn AttrGroup) -> Option<Element>;

    /// Retry with an explicit parent-name hint. Default: no opinion.
    fn resolve_with_parent(
        &self,
        _parent: &str,
        _name: &str,
        _ctx: &HostContext,
        _attrs: &dyn AttrGroup,
    ) -> Option<Element> {
        None
    }
}

// ── FactoryChain ──────────────────────────────────────────────────────────

/// Ordered list of resolvers; the first non-"no opinion" result wins.
#[derive(Default)]
pub struct FactoryChain {
    resolvers: Vec<Box<dyn ElementResolver>>,
}

impl FactoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resolver: impl ElementResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, resolver: impl ElementResolver + 'static) -> Self {
        self.push(resolver);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Runs the chain: per resolver, the name-only call first, then the
    /// parent-hinted retry when a hint is available.
    pub fn create(
        &self,
        name: &str,
        parent: Option<&str>,
        ctx: &HostContext,
        attrs: &dyn AttrGroup,
    ) -> Option<Element> {
        for resolver in &self.resolvers {
            if let Some(element) = resolver.resolve(name, ctx, attrs) {
                return Some(element);
            }
            if let Some(parent) = parent {
                if let Some(element) = resolver.resolve_with_parent(parent, name, ctx, attrs) {
                    return Some(element);
                }
            }
        }
        None
    }
}
