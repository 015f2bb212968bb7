use underlay_appearance::resolve::Appearance;
use underlay_appearance::ripple::RippleHost;

// ── Styleable ─────────────────────────────────────────────────────────────

/// What the pipeline pokes on a constructed host element.
///
/// Hosts implement this on their element/widget type; the pipeline only
/// ever sets the resolved appearance and the interactive flag.
pub trait Styleable {
    fn set_appearance(&mut self, appearance: Appearance);

    /// Marks the element as accepting pointer/focus interaction.
    fn set_interactive(&mut self, interactive: bool);
}

/// A type-erased host element — the universal currency of the factory
/// chain and constructor registry.
pub type Element = Box<dyn Styleable>;

// ── HostContext ───────────────────────────────────────────────────────────

/// Per-tree host configuration handed to factories and constructors.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// Whether the host composites ripple overlays natively or needs the
    /// emulated two-row rebuild.
    pub ripple_host: RippleHost,
    /// Namespace prefixes tried, in order, when constructing a bare
    /// (unqualified) element name.
    pub namespaces: Vec<String>,
}

impl HostContext {
    pub fn new(ripple_host: RippleHost) -> Self {
        Self { ripple_host, namespaces: Vec::new() }
    }

    /// Builder-style namespace registration.
    pub fn with_namespace(mut self, prefix: impl Into<String>) -> Self {
        self.namespaces.push(prefix.into());
        self
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new(RippleHost::Native)
    }
}
