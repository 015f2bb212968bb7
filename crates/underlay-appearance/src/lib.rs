//! Compiles flat style-attribute groups into renderer-ready **appearance
//! descriptors**: background fills, borders, corner rounding, gradients,
//! state-dependent variants, and ripple overlays.
//!
//! Element types never implement this logic themselves — a construction
//! hook (see the `underlay-factory` crate) feeds three attribute groups
//! per element through this compiler and hands the result to the renderer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`attrs`] | `AttrKey`, `AttrValue`, the `AttrGroup` accessor trait, `DeclaredAttrs`, `AttrScope` |
//! | [`color`] | `Color` and the transparent "no color" sentinel |
//! | [`shape`] | `ShapeDescriptor` and its parts |
//! | [`gradient`] | `GradientSpec`, the 45°-quantized `Orientation` |
//! | [`state`] | `StateTable`, predicates, first-match selection |
//! | [`compile`] | base group → `ShapeDescriptor` |
//! | [`press`] | two-state press table builder |
//! | [`selector`] | up-to-4-row selector table builder |
//! | [`resolve`] | selector > press > plain precedence |
//! | [`ripple`] | native wrap / emulated rebuild |
//! | [`error`] | `AppearanceError` |
//!
//! # Quick start
//!
//! ```rust
//! use underlay_appearance::prelude::*;
//!
//! let base = DeclaredAttrs::new()
//!     .with(AttrKey::CornersRadius, AttrValue::Number(8.0))
//!     .with(AttrKey::SolidColor, AttrValue::Color(Color::from_rgb8(0xff, 0, 0)));
//!
//! let shape = build_shape(&base).unwrap();
//! let resolved = resolve(Some(shape), None, None).unwrap();
//! assert!(!resolved.interactive);
//! ```

pub mod attrs;
pub mod color;
pub mod compile;
pub mod error;
pub mod gradient;
pub mod press;
pub mod resolve;
pub mod ripple;
pub mod selector;
pub mod shape;
pub mod state;

pub use attrs::{AttrGroup, AttrKey, AttrScope, AttrValue, DeclaredAttrs, ResourceRef};
pub use color::Color;
pub use compile::build_shape;
pub use error::AppearanceError;
pub use gradient::{GradientSpec, GradientType, Orientation};
pub use press::build_press_table;
pub use resolve::{Appearance, Resolved, resolve};
pub use ripple::{RippleHost, RippleOverlay, apply_ripple, ripple_color};
pub use selector::build_selector_table;
pub use shape::{Corner, CornerRadii, Fill, Padding, ShapeDescriptor, ShapeKind, Size, Stroke};
pub use state::{
    ElementState, StateAppearance, StateEntry, StateFlag, StatePredicate, StateTable,
};

/// Everything needed to drive the compiler — import this in host code.
pub mod prelude {
    pub use crate::attrs::{
        AttrGroup, AttrKey, AttrScope, AttrValue, DeclaredAttrs, ResourceRef,
    };
    pub use crate::color::Color;
    pub use crate::compile::build_shape;
    pub use crate::error::AppearanceError;
    pub use crate::press::build_press_table;
    pub use crate::resolve::{Appearance, Resolved, resolve};
    pub use crate::ripple::{RippleHost, apply_ripple, ripple_color};
    pub use crate::selector::build_selector_table;
    pub use crate::shape::ShapeDescriptor;
    pub use crate::state::{ElementState, StateAppearance, StateTable};
}
