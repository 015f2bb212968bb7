//! Interaction-feedback overlay, with two strategies by host capability.

use crate::attrs::{AttrGroup, AttrKey};
use crate::color::Color;
use crate::compile::build_shape;
use crate::error::AppearanceError;
use crate::resolve::{Appearance, Resolved};
use crate::state::{StateAppearance, StateEntry, StatePredicate, StateTable};

// ── RippleOverlay ─────────────────────────────────────────────────────────

/// A ripple layer painted atop a resolved appearance.
///
/// The content serves as both the painted background and the ripple mask.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleOverlay {
    pub color: Color,
    pub content: Box<Appearance>,
}

/// Whether the host can composite ripple overlays natively.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RippleHost {
    #[default]
    Native,
    Emulated,
}

// ── Activation ────────────────────────────────────────────────────────────

/// The ripple color, if the base group enables the ripple stage.
///
/// Activation requires the enable flag to be true *and* a color to be
/// declared; either alone does nothing.
pub fn ripple_color(attrs: &dyn AttrGroup) -> Option<Color> {
    let mut enabled = false;
    let mut color = None;
    for i in 0..attrs.index_count() {
        match attrs.key_at(i) {
            Some(AttrKey::RippleEnable) => enabled = attrs.boolean(i, false),
            Some(AttrKey::RippleColor) => color = Some(attrs.color(i, Color::TRANSPARENT)),
            _ => {}
        }
    }
    if enabled { color } else { None }
}

// ── Builder ───────────────────────────────────────────────────────────────

/// Wraps or rebuilds a resolved appearance with ripple feedback.
///
/// On a [`RippleHost::Native`] host the content is wrapped as-is. On an
/// emulated host the prior resolution — including any selector table with
/// per-row resources — is discarded, and a synthetic two-row press table
/// is rebuilt from the base group: the not-pressed row is a fresh clone
/// recolored with the ripple color, the pressed row a fresh untouched
/// clone. The divergence from the selector-resolved rows is deliberate
/// and preserved, not fixed.
///
/// Either path marks the element interactive.
pub fn apply_ripple(
    resolved: Resolved,
    color: Color,
    host: RippleHost,
    base: &dyn AttrGroup,
) -> Result<Resolved, AppearanceError> {
    match host {
        RippleHost::Native => Ok(Resolved {
            appearance: Appearance::Ripple(RippleOverlay {
                color,
                content: Box::new(resolved.appearance),
            }),
            interactive: true,
        }),
        RippleHost::Emulated => {
            let pressed_shape = build_shape(base)?;
            let mut unpressed_shape = build_shape(base)?;
            unpressed_shape.set_fill_color(color);

            let mut table = StateTable::new();
            table.push(StateEntry {
                predicate: StatePredicate::not_pressed(),
                appearance: StateAppearance::Shape(unpressed_shape),
            });
            table.push(StateEntry {
                predicate: StatePredicate::pressed(),
                appearance: StateAppearance::Shape(pressed_shape),
            });
            Ok(Resolved { appearance: Appearance::Table(table), interactive: true })
        }
    }
}
