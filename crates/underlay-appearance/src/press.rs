//! Two-state press table builder.

use crate::attrs::{AttrGroup, AttrKey};
use crate::color::Color;
use crate::compile::build_shape;
use crate::error::AppearanceError;
use crate::state::{StateAppearance, StateEntry, StatePredicate, StateTable};

/// Builds the pressed/not-pressed state table.
///
/// Both rows are cloned from the base group by re-parsing it, so a later
/// recolor of one row can never leak into the other. Rows appear only for
/// colors actually declared: declaring just the pressed color yields a
/// one-row table, and the not-pressed state then resolves to no appearance
/// at all.
pub fn build_press_table(
    base: &dyn AttrGroup,
    press: &dyn AttrGroup,
) -> Result<StateTable, AppearanceError> {
    let mut pressed_shape = build_shape(base)?;
    let mut unpressed_shape = build_shape(base)?;

    let mut table = StateTable::new();
    for i in 0..press.index_count() {
        match press.key_at(i) {
            Some(AttrKey::PressPressedColor) => {
                pressed_shape.set_fill_color(press.color(i, Color::TRANSPARENT));
                table.push(StateEntry {
                    predicate: StatePredicate::pressed(),
                    appearance: StateAppearance::Shape(pressed_shape.clone()),
                });
            }
            Some(AttrKey::PressUnpressedColor) => {
                unpressed_shape.set_fill_color(press.color(i, Color::TRANSPARENT));
                table.push(StateEntry {
                    predicate: StatePredicate::not_pressed(),
                    appearance: StateAppearance::Shape(unpressed_shape.clone()),
                });
            }
            _ => {}
        }
    }
    Ok(table)
}
