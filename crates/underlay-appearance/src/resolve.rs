//! Precedence resolution between plain, press, and selector results.

use crate::ripple::RippleOverlay;
use crate::shape::ShapeDescriptor;
use crate::state::StateTable;

// ── Appearance ────────────────────────────────────────────────────────────

/// The resolved appearance handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    Shape(ShapeDescriptor),
    Table(StateTable),
    Ripple(RippleOverlay),
}

/// A resolved appearance plus whether the element must now accept
/// pointer/focus interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub appearance: Appearance,
    pub interactive: bool,
}

// ── Resolver ──────────────────────────────────────────────────────────────

/// Picks exactly one appearance: selector table over press table over
/// plain shape.
///
/// Tables count only when they have rows; a populated selector table
/// always masks a populated press table. Choosing either table marks the
/// element interactive — the plain-shape path does not.
pub fn resolve(
    plain: Option<ShapeDescriptor>,
    press: Option<StateTable>,
    selector: Option<StateTable>,
) -> Option<Resolved> {
    if let Some(table) = selector.filter(|t| !t.is_empty()) {
        return Some(Resolved { appearance: Appearance::Table(table), interactive: true });
    }
    if let Some(table) = press.filter(|t| !t.is_empty()) {
        return Some(Resolved { appearance: Appearance::Table(table), interactive: true });
    }
    plain.map(|shape| Resolved { appearance: Appearance::Shape(shape), interactive: false })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::state::{StateAppearance, StateEntry, StatePredicate};

    fn shape(color: Color) -> ShapeDescriptor {
        let mut s = ShapeDescriptor::default();
        s.set_fill_color(color);
        s
    }

    fn table(color: Color) -> StateTable {
        let mut t = StateTable::new();
        t.push(StateEntry {
            predicate: StatePredicate::pressed(),
            appearance: StateAppearance::Shape(shape(color)),
        });
        t
    }

    const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };
    const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };

    #[test]
    fn selector_masks_press_and_plain() {
        let got = resolve(Some(shape(RED)), Some(table(BLUE)), Some(table(GREEN))).unwrap();
        assert!(got.interactive);
        assert_eq!(got.appearance, Appearance::Table(table(GREEN)));
    }

    #[test]
    fn press_masks_plain() {
        let got = resolve(Some(shape(RED)), Some(table(BLUE)), None).unwrap();
        assert!(got.interactive);
        assert_eq!(got.appearance, Appearance::Table(table(BLUE)));
    }

    #[test]
    fn plain_shape_is_not_interactive() {
        let got = resolve(Some(shape(RED)), None, None).unwrap();
        assert!(!got.interactive);
        assert_eq!(got.appearance, Appearance::Shape(shape(RED)));
    }

    #[test]
    fn empty_tables_do_not_count() {
        let got = resolve(Some(shape(RED)), Some(StateTable::new()), Some(StateTable::new()))
            .unwrap();
        assert_eq!(got.appearance, Appearance::Shape(shape(RED)));
        assert!(!got.interactive);
    }

    #[test]
    fn empty_selector_falls_back_to_press() {
        let got = resolve(None, Some(table(BLUE)), Some(StateTable::new())).unwrap();
        assert_eq!(got.appearance, Appearance::Table(table(BLUE)));
    }

    #[test]
    fn nothing_resolves_to_nothing() {
        assert!(resolve(None, None, None).is_none());
    }
}
