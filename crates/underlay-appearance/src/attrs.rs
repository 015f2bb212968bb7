use std::fmt;

use crate::color::Color;

// ── AttrKey ───────────────────────────────────────────────────────────────

/// The fixed vocabulary of recognized attribute keys.
///
/// Three groups share this enum: the base/shape group, the two-entry press
/// group, and the four-entry selector group. An accessor reports unknown
/// keys as `None` from [`AttrGroup::key_at`], and the compiler skips them
/// so newer markup keeps working against older builds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AttrKey {
    // base/shape group
    Shape,
    SolidColor,
    CornersRadius,
    CornersTopLeftRadius,
    CornersTopRightRadius,
    CornersBottomRightRadius,
    CornersBottomLeftRadius,
    GradientAngle,
    GradientCenterX,
    GradientCenterY,
    GradientCenterColor,
    GradientStartColor,
    GradientEndColor,
    GradientRadius,
    GradientType,
    GradientUseLevel,
    PaddingLeft,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    SizeWidth,
    SizeHeight,
    StrokeWidth,
    StrokeColor,
    StrokeDashWidth,
    StrokeDashGap,
    RippleEnable,
    RippleColor,
    // press group
    PressPressedColor,
    PressUnpressedColor,
    // selector group
    SelectorCheckable,
    SelectorUncheckable,
    SelectorPressed,
    SelectorUnpressed,
}

// ── ResourceRef ───────────────────────────────────────────────────────────

/// An opaque reference to an externally-supplied appearance resource.
///
/// The compiler never dereferences these; they pass through to the
/// renderer verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── AttrValue ─────────────────────────────────────────────────────────────

/// A raw attribute value as parsed out of a markup tag.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Numeric literal. Dimensions, floats, and integers all arrive here.
    Number(f32),
    Color(Color),
    Bool(bool),
    /// Unquoted identifier: enum tokens like `rectangle` or `sweep`.
    Ident(String),
    /// External resource reference.
    Resource(ResourceRef),
}

// ── AttrGroup ─────────────────────────────────────────────────────────────

/// Read-only, ordered, sparse key→value access to one attribute group.
///
/// This is the boundary to the host's attribute storage: the compiler only
/// ever walks declared indices in order and reads values through the typed
/// getters, each of which falls back to a caller-supplied default when the
/// value is absent or has the wrong type.
///
/// Handles are scoped resources: the host may pool backing storage, so
/// [`release`](AttrGroup::release) must run on every exit path. Wrap groups
/// in an [`AttrScope`] to get that guarantee.
pub trait AttrGroup {
    /// Number of declared attribute indices in this group.
    fn index_count(&self) -> usize;

    /// Key declared at `index`, or `None` for unrecognized entries.
    fn key_at(&self, index: usize) -> Option<AttrKey>;

    /// Raw value declared at `index`.
    fn value_at(&self, index: usize) -> Option<&AttrValue>;

    /// Returns backing storage to the host. Idempotent.
    fn release(&mut self) {}

    fn is_empty(&self) -> bool {
        self.index_count() == 0
    }

    /// True if `key` is declared anywhere in this group.
    fn has(&self, key: AttrKey) -> bool {
        (0..self.index_count()).any(|i| self.key_at(i) == Some(key))
    }

    // ── typed getters ─────────────────────────────────────────────────────

    fn color(&self, index: usize, default: Color) -> Color {
        match self.value_at(index) {
            Some(AttrValue::Color(c)) => *c,
            _ => default,
        }
    }

    /// Dimension in logical pixels.
    fn dimension(&self, index: usize, default: f32) -> f32 {
        self.float(index, default)
    }

    fn float(&self, index: usize, default: f32) -> f32 {
        match self.value_at(index) {
            Some(AttrValue::Number(v)) => *v,
            _ => default,
        }
    }

    fn integer(&self, index: usize, default: i32) -> i32 {
        match self.value_at(index) {
            Some(AttrValue::Number(v)) => *v as i32,
            _ => default,
        }
    }

    fn boolean(&self, index: usize, default: bool) -> bool {
        match self.value_at(index) {
            Some(AttrValue::Bool(v)) => *v,
            _ => default,
        }
    }

    fn ident(&self, index: usize) -> Option<&str> {
        match self.value_at(index) {
            Some(AttrValue::Ident(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    fn resource(&self, index: usize) -> Option<&ResourceRef> {
        match self.value_at(index) {
            Some(AttrValue::Resource(r)) => Some(r),
            _ => None,
        }
    }
}

// ── DeclaredAttrs ─────────────────────────────────────────────────────────

/// An in-memory [`AttrGroup`] holding declarations in source order.
///
/// Redeclaring a key overwrites its value in place, keeping the original
/// declaration position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclaredAttrs {
    entries: Vec<(AttrKey, AttrValue)>,
}

impl DeclaredAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, key: AttrKey, value: AttrValue) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style [`declare`](Self::declare).
    pub fn with(mut self, key: AttrKey, value: AttrValue) -> Self {
        self.declare(key, value);
        self
    }
}

impl AttrGroup for DeclaredAttrs {
    fn index_count(&self) -> usize {
        self.entries.len()
    }

    fn key_at(&self, index: usize) -> Option<AttrKey> {
        self.entries.get(index).map(|(k, _)| *k)
    }

    fn value_at(&self, index: usize) -> Option<&AttrValue> {
        self.entries.get(index).map(|(_, v)| v)
    }

    fn release(&mut self) {
        self.entries.clear();
    }
}

// ── AttrScope ─────────────────────────────────────────────────────────────

/// RAII guard that releases an attribute group on drop.
///
/// Acquired once per group per element-construction event; dropping the
/// scope releases the handle on success, early-return, and error paths
/// alike.
pub struct AttrScope<'a> {
    group: &'a mut dyn AttrGroup,
}

impl<'a> AttrScope<'a> {
    pub fn new(group: &'a mut dyn AttrGroup) -> Self {
        Self { group }
    }

    pub fn get(&self) -> &dyn AttrGroup {
        self.group
    }
}

impl Drop for AttrScope<'_> {
    fn drop(&mut self) {
        self.group.release();
    }
}
