//! Construction-time interception for declarative UI trees.
//!
//! Hosts install an [`AppearanceFactory`] into their tree-construction
//! path; for every element it defers to the cooperating factory chain,
//! constructs the element by name when nobody else claims it, compiles the
//! element's three attribute groups with `underlay-appearance`, and
//! attaches the result through the [`Styleable`] seam.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use underlay_factory::prelude::*;
//!
//! init_logging(LoggingConfig::default());
//!
//! ConstructorRegistry::global().register("widget.badge", |_ctx, _attrs| {
//!     Ok(Box::new(Badge::new()) as Element)
//! });
//!
//! let factory = AppearanceFactory::new();
//! let ctx = HostContext::default().with_namespace("widget");
//!
//! // In the host's element-construction callback:
//! let element = factory.on_create_element(
//!     name, parent, &ctx, &mut base, &mut press, &mut selector,
//! );
//! ```

pub mod construct;
pub mod element;
pub mod factory;
pub mod logging;
pub mod pipeline;

pub use construct::{Constructor, ConstructorRegistry};
pub use element::{Element, HostContext, Styleable};
pub use factory::{ElementResolver, FactoryChain};
pub use logging::{LoggingConfig, init_logging};
pub use pipeline::AppearanceFactory;

/// Everything a host needs to install the factory.
pub mod prelude {
    pub use crate::construct::ConstructorRegistry;
    pub use crate::element::{Element, HostContext, Styleable};
    pub use crate::factory::{ElementResolver, FactoryChain};
    pub use crate::logging::{LoggingConfig, init_logging};
    pub use crate::pipeline::AppearanceFactory;

    // Re-export the compiler surface hosts touch directly.
    pub use underlay_appearance::attrs::{AttrGroup, AttrKey, AttrValue, DeclaredAttrs};
    pub use underlay_appearance::resolve::Appearance;
    pub use underlay_appearance::ripple::RippleHost;
}
