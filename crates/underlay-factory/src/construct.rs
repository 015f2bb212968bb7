//! By-name element construction with a process-scoped lookup cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use underlay_appearance::attrs::AttrGroup;
use underlay_appearance::error::AppearanceError;

use crate::element::{Element, HostContext};

/// A registered element constructor.
///
/// Constructors may fail; any failure is reported uniformly as
/// [`AppearanceError::ConstructionFailed`] by the registry.
pub type Constructor =
    Arc<dyn Fn(&HostContext, &dyn AttrGroup) -> Result<Element, AppearanceError> + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── ConstructorRegistry ───────────────────────────────────────────────────

/// Maps qualified element names to constructors.
///
/// Bare names are resolved against the context's namespace prefixes and
/// the winning qualified name is memoized. Both maps are explicit
/// process-scoped state with a documented lifecycle: populated lazily,
/// never evicted, lock-guarded because multiple UI trees may be
/// constructed concurrently on different threads.
#[derive(Default)]
pub struct ConstructorRegistry {
    constructors: Mutex<HashMap<String, Constructor>>,
    resolved_names: Mutex<HashMap<String, String>>,
}

impl ConstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-wide registry.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<ConstructorRegistry>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Registers a constructor under a (usually qualified) name.
    pub fn register<F>(&self, name: impl Into<String>, constructor: F)
    where
        F: Fn(&HostContext, &dyn AttrGroup) -> Result<Element, AppearanceError>
            + Send
            + Sync
            + 'static,
    {
        lock(&self.constructors).insert(name.into(), Arc::new(constructor));
    }

    /// Constructs an element by qualified or bare name.
    ///
    /// Failures are local to this element: callers log them as warnings
    /// and continue without a custom appearance.
    pub fn construct(
        &self,
        name: &str,
        ctx: &HostContext,
        attrs: &dyn AttrGroup,
    ) -> Result<Element, AppearanceError> {
        let qualified = self
            .resolve_name(name, ctx)
            .ok_or_else(|| AppearanceError::ElementNotFound { name: name.to_string() })?;
        let constructor = lock(&self.constructors)
            .get(&qualified)
            .cloned()
            .ok_or_else(|| AppearanceError::ElementNotFound { name: name.to_string() })?;
        constructor(ctx, attrs)
            .map_err(|_| AppearanceError::ConstructionFailed { name: qualified })
    }

    /// Resolves `name` to a registered qualified name.
    ///
    /// Qualified names (containing a `.`) are looked up directly. Bare
    /// names try each context namespace in order, then the bare name
    /// itself; the first hit is memoized for subsequent lookups.
    fn resolve_name(&self, name: &str, ctx: &HostContext) -> Option<String> {
        if name.contains('.') {
            return self.is_registered(name).then(|| name.to_string());
        }
        if let Some(qualified) = lock(&self.resolved_names).get(name) {
            return Some(qualified.clone());
        }
        let candidates = ctx
            .namespaces
            .iter()
            .map(|ns| format!("{ns}.{name}"))
            .chain(std::iter::once(name.to_string()));
        for candidate in candidates {
            if self.is_registered(&candidate) {
                lock(&self.resolved_names).insert(name.to_string(), candidate.clone());
                return Some(candidate);
            }
        }
        None
    }

    fn is_registered(&self, name: &str) -> bool {
        lock(&self.constructors).contains_key(name)
    }
}
