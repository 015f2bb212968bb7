use crate::attrs::ResourceRef;
use crate::shape::ShapeDescriptor;

// ── Predicates ────────────────────────────────────────────────────────────

/// Interaction state flags a predicate can test.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StateFlag {
    Pressed,
    Checkable,
}

/// A single-state predicate: one flag, asserted or negated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StatePredicate {
    pub flag: StateFlag,
    pub asserted: bool,
}

impl StatePredicate {
    #[inline]
    pub const fn pressed() -> Self {
        Self { flag: StateFlag::Pressed, asserted: true }
    }

    #[inline]
    pub const fn not_pressed() -> Self {
        Self { flag: StateFlag::Pressed, asserted: false }
    }

    #[inline]
    pub const fn checkable() -> Self {
        Self { flag: StateFlag::Checkable, asserted: true }
    }

    #[inline]
    pub const fn not_checkable() -> Self {
        Self { flag: StateFlag::Checkable, asserted: false }
    }

    /// True when the element state satisfies this predicate.
    #[inline]
    pub fn matches(&self, state: ElementState) -> bool {
        let flag = match self.flag {
            StateFlag::Pressed => state.pressed,
            StateFlag::Checkable => state.checkable,
        };
        flag == self.asserted
    }
}

/// A snapshot of the interaction state the renderer matches against.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub pressed: bool,
    pub checkable: bool,
}

// ── Rows ──────────────────────────────────────────────────────────────────

/// The appearance a row resolves to.
///
/// Resource rows carry the external reference verbatim; none of the base
/// shape attributes apply to them.
#[derive(Debug, Clone, PartialEq)]
pub enum StateAppearance {
    Shape(ShapeDescriptor),
    Resource(ResourceRef),
}

/// One predicate→appearance row.
#[derive(Debug, Clone, PartialEq)]
pub struct StateEntry {
    pub predicate: StatePredicate,
    pub appearance: StateAppearance,
}

// ── StateTable ────────────────────────────────────────────────────────────

/// Ordered predicate→appearance rows for interaction-dependent rendering.
///
/// Consumers match top-down; the first satisfied predicate wins. A state
/// with no matching row resolves to no appearance at all — deliberately
/// not the plain base descriptor (see DESIGN.md).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateTable {
    entries: Vec<StateEntry>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StateEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }

    /// Top-down first-match lookup for the given state.
    pub fn select(&self, state: ElementState) -> Option<&StateAppearance> {
        self.entries
            .iter()
            .find(|e| e.predicate.matches(state))
            .map(|e| &e.appearance)
    }
}
