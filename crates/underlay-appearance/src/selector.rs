//! Up-to-four-row selector table builder.

use crate::attrs::{AttrGroup, AttrKey, AttrValue};
use crate::compile::build_shape;
use crate::error::AppearanceError;
use crate::state::{StateAppearance, StateEntry, StatePredicate, StateTable};

/// Builds the selector state table, one row per declared entry, in
/// declaration order.
///
/// A color entry keeps the other base-shape attributes (corner radius,
/// stroke, …) by re-parsing the base group and recoloring the clone; a
/// resource entry replaces the shape wholesale with the external
/// reference. An entry that is neither a usable color nor a resource
/// produces no row.
pub fn build_selector_table(
    base: &dyn AttrGroup,
    selector: &dyn AttrGroup,
) -> Result<StateTable, AppearanceError> {
    let mut table = StateTable::new();
    for i in 0..selector.index_count() {
        let predicate = match selector.key_at(i) {
            Some(AttrKey::SelectorCheckable) => StatePredicate::checkable(),
            Some(AttrKey::SelectorUncheckable) => StatePredicate::not_checkable(),
            Some(AttrKey::SelectorPressed) => StatePredicate::pressed(),
            Some(AttrKey::SelectorUnpressed) => StatePredicate::not_pressed(),
            _ => continue,
        };
        if let Some(entry) = resolve_entry(base, selector, i, predicate)? {
            table.push(entry);
        }
    }
    Ok(table)
}

fn resolve_entry(
    base: &dyn AttrGroup,
    selector: &dyn AttrGroup,
    index: usize,
    predicate: StatePredicate,
) -> Result<Option<StateEntry>, AppearanceError> {
    match selector.value_at(index) {
        Some(AttrValue::Color(c)) if !c.is_transparent() => {
            let mut shape = build_shape(base)?;
            shape.set_fill_color(*c);
            Ok(Some(StateEntry {
                predicate,
                appearance: StateAppearance::Shape(shape),
            }))
        }
        Some(AttrValue::Color(_)) => {
            // The "no color" sentinel is indistinguishable from an absent
            // entry here, even though it could mean transparent black.
            log::debug!("selector entry for {predicate:?} is the transparent sentinel; skipped");
            Ok(None)
        }
        Some(AttrValue::Resource(res)) => Ok(Some(StateEntry {
            predicate,
            appearance: StateAppearance::Resource(res.clone()),
        })),
        Some(other) => {
            log::debug!(
                "selector entry for {predicate:?} is neither a color nor a resource ({other:?}); skipped"
            );
            Ok(None)
        }
        None => Ok(None),
    }
}
