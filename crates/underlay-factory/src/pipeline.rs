//! The construction-time interception step.
//!
//! For each element in a declarative tree the host calls
//! [`AppearanceFactory::on_create_element`] with the element name and its
//! three attribute groups. The factory defers to the upstream chain,
//! constructs the element by name when nobody else does, compiles the
//! groups into an appearance, and attaches it.

use std::sync::Arc;

use anyhow::Context as _;
use log::warn;

use underlay_appearance::attrs::{AttrGroup, AttrScope};
use underlay_appearance::compile::build_shape;
use underlay_appearance::press::build_press_table;
use underlay_appearance::resolve::resolve;
use underlay_appearance::ripple::{apply_ripple, ripple_color};
use underlay_appearance::selector::build_selector_table;

use crate::construct::ConstructorRegistry;
use crate::element::{Element, HostContext, Styleable};
use crate::factory::FactoryChain;

// ── AppearanceFactory ─────────────────────────────────────────────────────

/// The interception hook installed into a host's tree construction.
pub struct AppearanceFactory {
    chain: FactoryChain,
    registry: Arc<ConstructorRegistry>,
}

impl AppearanceFactory {
    /// A factory over the process-wide constructor registry.
    pub fn new() -> Self {
        Self::with_registry(ConstructorRegistry::global())
    }

    pub fn with_registry(registry: Arc<ConstructorRegistry>) -> Self {
        Self { chain: FactoryChain::new(), registry }
    }

    /// Builder-style upstream chain installation.
    pub fn with_chain(mut self, chain: FactoryChain) -> Self {
        self.chain = chain;
        self
    }

    /// Intercepts one element construction.
    ///
    /// The three attribute group handles are released on every exit path.
    /// Errors never propagate past this call: construction failures skip
    /// the element (warn), and an appearance failure leaves the element
    /// with whatever was applied before the failure — partial application
    /// is accepted behavior. Sibling elements are unaffected either way.
    pub fn on_create_element(
        &self,
        name: &str,
        parent: Option<&str>,
        ctx: &HostContext,
        base: &mut dyn AttrGroup,
        press: &mut dyn AttrGroup,
        selector: &mut dyn AttrGroup,
    ) -> Option<Element> {
        let base = AttrScope::new(base);
        let press = AttrScope::new(press);
        let selector = AttrScope::new(selector);

        let mut element = self.chain.create(name, parent, ctx, base.get());

        if base.get().is_empty() && press.get().is_empty() && selector.get().is_empty() {
            return element;
        }

        if element.is_none() {
            match self.registry.construct(name, ctx, base.get()) {
                Ok(built) => element = Some(built),
                Err(err) => {
                    warn!("cannot create element `{name}`: {err}");
                    return None;
                }
            }
        }
        let mut element = element?;

        if let Err(err) =
            apply_appearance(element.as_mut(), ctx, base.get(), press.get(), selector.get())
        {
            warn!("appearance resolution failed for `{name}`: {err:#}");
        }
        Some(element)
    }
}

impl Default for AppearanceFactory {
    fn default() -> Self {
        Self::new()
    }
}

// ── Staged application ────────────────────────────────────────────────────

/// Resolves and applies the appearance in stages.
///
/// The precedence result is applied before the ripple stage runs, so a
/// ripple failure leaves the earlier appearance on the element.
fn apply_appearance(
    element: &mut dyn Styleable,
    ctx: &HostContext,
    base: &dyn AttrGroup,
    press: &dyn AttrGroup,
    selector: &dyn AttrGroup,
) -> anyhow::Result<()> {
    let selector_table = if selector.is_empty() {
        None
    } else {
        Some(build_selector_table(base, selector).context("building selector table")?)
    };
    let press_table = match &selector_table {
        Some(table) if !table.is_empty() => None,
        _ if !press.is_empty() => {
            Some(build_press_table(base, press).context("building press table")?)
        }
        _ => None,
    };
    let have_table = selector_table.as_ref().is_some_and(|t| !t.is_empty())
        || press_table.as_ref().is_some_and(|t| !t.is_empty());
    let plain = if have_table {
        None
    } else {
        Some(build_shape(base).context("building base shape")?)
    };

    let Some(resolved) = resolve(plain, press_table, selector_table) else {
        return Ok(());
    };
    element.set_appearance(resolved.appearance.clone());
    if resolved.interactive {
        element.set_interactive(true);
    }

    if let Some(color) = ripple_color(base) {
        let rippled =
            apply_ripple(resolved, color, ctx.ripple_host, base).context("applying ripple")?;
        element.set_appearance(rippled.appearance);
        element.set_interactive(true);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use underlay_appearance::attrs::{AttrKey, AttrValue, DeclaredAttrs, ResourceRef};
    use underlay_appearance::color::Color;
    use underlay_appearance::resolve::Appearance;
    use underlay_appearance::ripple::RippleHost;
    use underlay_appearance::state::{ElementState, StateAppearance};

    const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    const PINK: Color = Color { r: 1.0, g: 0.5, b: 0.5, a: 1.0 };
    const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    /// Records what the pipeline applied, observable from outside the
    /// boxed element.
    #[derive(Default)]
    struct Recorder {
        applied: Arc<Mutex<Vec<Appearance>>>,
        interactive: Arc<Mutex<bool>>,
    }

    struct Probe {
        applied: Arc<Mutex<Vec<Appearance>>>,
        interactive: Arc<Mutex<bool>>,
    }

    impl Styleable for Probe {
        fn set_appearance(&mut self, appearance: Appearance) {
            self.applied.lock().unwrap().push(appearance);
        }
        fn set_interactive(&mut self, interactive: bool) {
            *self.interactive.lock().unwrap() = interactive;
        }
    }

    fn factory_with(recorder: &Recorder, name: &str) -> AppearanceFactory {
        let registry = Arc::new(ConstructorRegistry::new());
        let applied = Arc::clone(&recorder.applied);
        let interactive = Arc::clone(&recorder.interactive);
        registry.register(name, move |_, _| {
            Ok(Box::new(Probe {
                applied: Arc::clone(&applied),
                interactive: Arc::clone(&interactive),
            }) as Element)
        });
        AppearanceFactory::with_registry(registry)
    }

    fn last_applied(recorder: &Recorder) -> Option<Appearance> {
        recorder.applied.lock().unwrap().last().cloned()
    }

    #[test]
    fn all_groups_empty_is_a_pass_through() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::default();

        let element = factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
        );
        // No chain, no declared styling: nothing to do.
        assert!(element.is_none());
        assert!(recorder.applied.lock().unwrap().is_empty());
    }

    #[test]
    fn plain_shape_is_applied_and_not_interactive() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::default();

        let mut base = DeclaredAttrs::new().with(AttrKey::SolidColor, AttrValue::Color(RED));
        let element = factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
        );
        assert!(element.is_some());
        // The scope released the group on exit.
        assert!(base.is_empty());

        match last_applied(&recorder) {
            Some(Appearance::Shape(shape)) => assert_eq!(shape.fill_color(), Some(RED)),
            other => panic!("expected a shape, got {other:?}"),
        }
        assert!(!*recorder.interactive.lock().unwrap());
    }

    #[test]
    fn selector_masks_press_and_marks_interactive() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::default();

        let mut press =
            DeclaredAttrs::new().with(AttrKey::PressPressedColor, AttrValue::Color(BLACK));
        let mut selector =
            DeclaredAttrs::new().with(AttrKey::SelectorPressed, AttrValue::Color(RED));
        factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut DeclaredAttrs::new(),
            &mut press,
            &mut selector,
        );

        match last_applied(&recorder) {
            Some(Appearance::Table(table)) => {
                let pressed = ElementState { pressed: true, ..Default::default() };
                match table.select(pressed) {
                    Some(StateAppearance::Shape(s)) => assert_eq!(s.fill_color(), Some(RED)),
                    other => panic!("expected the selector row, got {other:?}"),
                }
            }
            other => panic!("expected a state table, got {other:?}"),
        }
        assert!(*recorder.interactive.lock().unwrap());
    }

    #[test]
    fn unknown_element_is_skipped_without_panicking() {
        let factory = AppearanceFactory::with_registry(Arc::new(ConstructorRegistry::new()));
        let ctx = HostContext::default();
        let mut base = DeclaredAttrs::new().with(AttrKey::SolidColor, AttrValue::Color(RED));
        let element = factory.on_create_element(
            "ghost",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
        );
        assert!(element.is_none());
        // Scopes release even on the skip path.
        assert!(base.is_empty());
    }

    #[test]
    fn invalid_angle_keeps_the_element_but_applies_nothing() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::default();

        let mut base = DeclaredAttrs::new()
            .with(AttrKey::GradientStartColor, AttrValue::Color(RED))
            .with(AttrKey::GradientEndColor, AttrValue::Color(BLACK))
            .with(AttrKey::GradientAngle, AttrValue::Number(47.0));
        let element = factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
        );
        assert!(element.is_some());
        assert!(recorder.applied.lock().unwrap().is_empty());
    }

    #[test]
    fn native_ripple_wraps_the_resolved_appearance() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::new(RippleHost::Native);

        let mut base = DeclaredAttrs::new()
            .with(AttrKey::SolidColor, AttrValue::Color(RED))
            .with(AttrKey::RippleEnable, AttrValue::Bool(true))
            .with(AttrKey::RippleColor, AttrValue::Color(PINK));
        factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut DeclaredAttrs::new(),
        );

        match last_applied(&recorder) {
            Some(Appearance::Ripple(overlay)) => {
                assert_eq!(overlay.color, PINK);
                assert!(matches!(*overlay.content, Appearance::Shape(_)));
            }
            other => panic!("expected a ripple overlay, got {other:?}"),
        }
        assert!(*recorder.interactive.lock().unwrap());
    }

    #[test]
    fn ripple_failure_retains_the_earlier_appearance() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::new(RippleHost::Emulated);

        // Resource-only selector rows never parse the base group, so the
        // bad angle only surfaces in the emulated ripple rebuild.
        let mut base = DeclaredAttrs::new()
            .with(AttrKey::GradientStartColor, AttrValue::Color(RED))
            .with(AttrKey::GradientEndColor, AttrValue::Color(BLACK))
            .with(AttrKey::GradientAngle, AttrValue::Number(47.0))
            .with(AttrKey::RippleEnable, AttrValue::Bool(true))
            .with(AttrKey::RippleColor, AttrValue::Color(PINK));
        let mut selector = DeclaredAttrs::new().with(
            AttrKey::SelectorPressed,
            AttrValue::Resource(ResourceRef::new("res42")),
        );
        let element = factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut selector,
        );
        assert!(element.is_some());

        // Exactly one application: the selector table, still in place.
        let applied = recorder.applied.lock().unwrap();
        assert_eq!(applied.len(), 1);
        assert!(matches!(applied[0], Appearance::Table(_)));
    }

    #[test]
    fn emulated_ripple_replaces_a_selector_table_with_two_fresh_rows() {
        let recorder = Recorder::default();
        let factory = factory_with(&recorder, "badge");
        let ctx = HostContext::new(RippleHost::Emulated);

        let mut base = DeclaredAttrs::new()
            .with(AttrKey::SolidColor, AttrValue::Color(RED))
            .with(AttrKey::RippleEnable, AttrValue::Bool(true))
            .with(AttrKey::RippleColor, AttrValue::Color(PINK));
        let mut selector = DeclaredAttrs::new().with(
            AttrKey::SelectorPressed,
            AttrValue::Resource(ResourceRef::new("res42")),
        );
        factory.on_create_element(
            "badge",
            None,
            &ctx,
            &mut base,
            &mut DeclaredAttrs::new(),
            &mut selector,
        );

        match last_applied(&recorder) {
            Some(Appearance::Table(table)) => {
                assert_eq!(table.len(), 2);
                for entry in table.entries() {
                    assert!(matches!(entry.appearance, StateAppearance::Shape(_)));
                }
            }
            other => panic!("expected the synthetic table, got {other:?}"),
        }
    }
}
