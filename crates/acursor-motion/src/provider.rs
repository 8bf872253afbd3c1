#![forbid(unsafe_code)]

//! Adaptive motion provider.
//!
//! [`MotionProvider`] owns the hover state and the motion model. It turns
//! pointer input into tween requests for the floating indicator and, while
//! docked, for the hovered target:
//!
//! ```text
//!             enter(target)
//!   FreeRoam ───────────────▶ Docked
//!      ▲                        │
//!      └────────────────────────┘
//!             leave(target)
//! ```
//!
//! Descendants never hold the provider itself. They get a [`MotionContext`]
//! from [`MotionProvider::context`], which only keeps a weak handle, so the
//! provider's lifetime is decided by whoever constructed it.
//!
//! # Failure Modes
//!
//! - **Indicator not mounted**: every motion update is skipped silently.
//!   Hosts commonly deliver the first pointer events before the indicator
//!   element exists.
//! - **Docked without a live target**: the move falls back to free roam.
//! - **Re-entrant engine**: an engine that calls back into the provider from
//!   inside `animate` panics on the engine's `RefCell`. Engines must only
//!   record or schedule.

use std::cell::RefCell;
use std::rc::Rc;

use acursor_core::css::Length;
use acursor_core::event::PointerEvent;
use acursor_core::viewport::ViewportSnapshot;
use tracing::{debug, trace, warn};

use crate::config::{MotionConfig, MotionConfigError};
use crate::context::MotionContext;
use crate::element::{Element, ElementRef};
use crate::engine::AnimationEngine;
use crate::hover::{HoverState, MotionPhase, TargetEvent};
use crate::parallax::MotionModel;
use crate::flag::{Flag, Watch};
use crate::style::CursorStyle;

#[derive(Debug, Default)]
struct HoverCore {
    unmounted: bool,
    is_hovering: bool,
    current_target: Option<ElementRef>,
    indicator: Option<ElementRef>,
}

/// State shared between a provider and the contexts it hands out.
pub(crate) struct ProviderShared {
    config: MotionConfig,
    model: MotionModel,
    viewport: ViewportSnapshot,
    visual_hover: Flag,
    core: RefCell<HoverCore>,
    engine: RefCell<Box<dyn AnimationEngine>>,
}

impl ProviderShared {
    pub(crate) fn is_unmounted(&self) -> bool {
        self.core.borrow().unmounted
    }

    fn live_indicator(&self) -> Option<ElementRef> {
        let indicator = self.core.borrow().indicator.clone();
        match indicator {
            Some(indicator) if indicator.is_alive() => Some(indicator),
            _ => {
                trace!("indicator not mounted; motion update skipped");
                None
            }
        }
    }

    pub(crate) fn pointer_enter(&self, event: &TargetEvent) {
        {
            let mut core = self.core.borrow_mut();
            if core.unmounted {
                return;
            }
            core.is_hovering = true;
            core.current_target = Some(event.target.clone());
        }
        debug!(target_id = event.target.id().get(), "cursor docked");
        self.visual_hover.set(true);
        self.activate(&event.target);
    }

    pub(crate) fn pointer_leave(&self, event: &TargetEvent) {
        {
            let mut core = self.core.borrow_mut();
            if core.unmounted {
                return;
            }
            core.is_hovering = false;
        }
        debug!(target_id = event.target.id().get(), "cursor released");
        self.visual_hover.set(false);
        self.deactivate(&event.target);
    }

    fn pointer_move(&self, event: &PointerEvent) {
        if self.viewport.is_touch || self.is_unmounted() {
            return;
        }
        let Some(indicator) = self.live_indicator() else {
            return;
        };

        let docked = {
            let core = self.core.borrow();
            if core.is_hovering {
                core.current_target
                    .as_ref()
                    .and_then(|target| target.geometry().map(|g| (target.clone(), g)))
            } else {
                None
            }
        };

        let mut engine = self.engine.borrow_mut();
        match docked {
            Some((target, geometry)) => {
                let motion = self.model.docked(event.position, &geometry);
                engine.animate(&indicator, motion.indicator);
                engine.animate(&target, motion.target);
            }
            None => engine.animate(&indicator, self.model.free_roam(event.position)),
        }
    }

    fn activate(&self, target: &ElementRef) {
        let Some(indicator) = self.live_indicator() else {
            return;
        };
        let Some(geometry) = target.geometry() else {
            debug!(target_id = target.id().get(), "hovered target already dropped");
            return;
        };
        let radius = target.border_radius().and_then(|text| match Length::parse(&text) {
            Ok(radius) => Some(radius),
            Err(err) => {
                debug!(%err, "target corner radius ignored");
                None
            }
        });
        self.engine
            .borrow_mut()
            .animate(&indicator, self.model.activate(geometry.client, radius));
    }

    fn deactivate(&self, target: &ElementRef) {
        let release = self.model.release();
        let indicator = self.live_indicator();
        let mut engine = self.engine.borrow_mut();
        if let Some(indicator) = indicator {
            engine.animate(&indicator, release.indicator);
        }
        engine.animate(target, release.target);
    }

    fn unmount(&self) {
        {
            let mut core = self.core.borrow_mut();
            if core.unmounted {
                return;
            }
            *core = HoverCore {
                unmounted: true,
                ..HoverCore::default()
            };
        }
        self.visual_hover.set(false);
        debug!("motion provider unmounted");
    }
}

/// Owner of the cursor's motion model.
pub struct MotionProvider {
    shared: Rc<ProviderShared>,
}

impl std::fmt::Debug for MotionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let core = self.shared.core.borrow();
        f.debug_struct("MotionProvider")
            .field("config", &self.shared.config)
            .field("viewport", &self.shared.viewport)
            .field("is_hovering", &core.is_hovering)
            .field("indicator", &core.indicator)
            .finish_non_exhaustive()
    }
}

impl MotionProvider {
    /// Create a provider, rejecting invalid configs.
    pub fn new(
        config: MotionConfig,
        viewport: ViewportSnapshot,
        engine: impl AnimationEngine + 'static,
    ) -> Result<Self, MotionConfigError> {
        let config = config.validated().inspect_err(|err| {
            warn!(%err, "motion config rejected");
        })?;
        Ok(Self::build(config, viewport, Box::new(engine)))
    }

    /// Create a provider with the default config.
    #[must_use]
    pub fn with_defaults(
        viewport: ViewportSnapshot,
        engine: impl AnimationEngine + 'static,
    ) -> Self {
        Self::build(MotionConfig::default(), viewport, Box::new(engine))
    }

    fn build(
        config: MotionConfig,
        viewport: ViewportSnapshot,
        engine: Box<dyn AnimationEngine>,
    ) -> Self {
        Self {
            shared: Rc::new(ProviderShared {
                model: MotionModel::new(&config),
                config,
                viewport,
                visual_hover: Flag::new(false),
                core: RefCell::new(HoverCore::default()),
                engine: RefCell::new(engine),
            }),
        }
    }

    /// Register the floating indicator element. Only a weak reference is kept.
    pub fn mount_indicator(&self, indicator: &Rc<dyn Element>) {
        self.mount_indicator_ref(ElementRef::new(indicator));
    }

    /// Register the floating indicator by reference.
    pub fn mount_indicator_ref(&self, indicator: ElementRef) {
        let mut core = self.shared.core.borrow_mut();
        if core.unmounted {
            return;
        }
        debug!(indicator_id = indicator.id().get(), "indicator mounted");
        core.indicator = Some(indicator);
    }

    /// Handle for descendants: effective config plus hover handlers.
    #[must_use]
    pub fn context(&self) -> MotionContext {
        MotionContext::new(Rc::downgrade(&self.shared), self.shared.config.clone())
    }

    /// Effective config.
    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.shared.config
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSnapshot {
        self.shared.viewport
    }

    /// Position update. No-op on touch-primary viewports.
    pub fn on_pointer_move(&self, event: &PointerEvent) {
        self.shared.pointer_move(event);
    }

    /// Dock onto `event.target`.
    pub fn on_pointer_enter_target(&self, event: &TargetEvent) {
        self.shared.pointer_enter(event);
    }

    /// Release `event.target` and return to free roam.
    pub fn on_pointer_leave_target(&self, event: &TargetEvent) {
        self.shared.pointer_leave(event);
    }

    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        self.hover_state().phase()
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        let core = self.shared.core.borrow();
        HoverState {
            is_hovering: core.is_hovering,
            visual_hover: self.shared.visual_hover.get(),
            current_target: core.current_target.clone(),
        }
    }

    /// The render-reactive hover flag.
    #[must_use]
    pub fn visual_hover(&self) -> Flag {
        self.shared.visual_hover.clone()
    }

    /// Indicator base style for the current render-reactive hover flag.
    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        CursorStyle::resolve(&self.shared.config, self.shared.visual_hover.get())
    }

    /// Call `f` with the recomputed base style whenever it changes.
    pub fn watch_cursor_style(&self, f: impl Fn(&CursorStyle) + 'static) -> Watch {
        let config = self.shared.config.clone();
        self.shared
            .visual_hover
            .watch(move |hover| f(&CursorStyle::resolve(&config, hover)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.shared.is_unmounted()
    }

    /// Tear down: reset to free roam and drop every element reference.
    ///
    /// Contexts handed out earlier report [`crate::MotionError::ProviderUnmounted`]
    /// afterwards. Idempotent; also runs on drop.
    pub fn unmount(&self) {
        self.shared.unmount();
    }
}

impl Drop for MotionProvider {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingEngine;
    use acursor_core::geometry::Rect;

    struct Node(Rect);

    impl Element for Node {
        fn bounding_rect(&self) -> Rect {
            self.0
        }
    }

    fn provider() -> (MotionProvider, Rc<RefCell<RecordingEngine>>, Rc<dyn Element>) {
        let engine = Rc::new(RefCell::new(RecordingEngine::new()));
        let provider = MotionProvider::with_defaults(
            ViewportSnapshot::desktop(1280.0, 800.0),
            Rc::clone(&engine),
        );
        let indicator: Rc<dyn Element> = Rc::new(Node(Rect::new(0.0, 0.0, 20.0, 20.0)));
        provider.mount_indicator(&indicator);
        (provider, engine, indicator)
    }

    #[test]
    fn starts_in_free_roam() {
        let (provider, _, _) = provider();
        assert_eq!(provider.phase(), MotionPhase::FreeRoam);
        assert_eq!(provider.hover_state(), HoverState::default());
        assert!(provider.is_mounted());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = MotionProvider::new(
            MotionConfig::default().parallax_index(0.0),
            ViewportSnapshot::default(),
            RecordingEngine::new(),
        )
        .unwrap_err();
        assert!(matches!(err, MotionConfigError::Validation(_)));
    }

    #[test]
    fn both_constructors_build_the_same_provider() {
        let viewport = ViewportSnapshot::desktop(1024.0, 768.0);
        let checked =
            MotionProvider::new(MotionConfig::default(), viewport, RecordingEngine::new()).unwrap();
        let defaulted = MotionProvider::with_defaults(viewport, RecordingEngine::new());
        assert_eq!(checked.config(), defaulted.config());
        assert_eq!(checked.viewport(), defaulted.viewport());
        assert_eq!(checked.hover_state(), defaulted.hover_state());
        assert_eq!(defaulted.visual_hover().flips(), 0);
    }

    #[test]
    fn move_before_indicator_mount_is_skipped() {
        let engine = Rc::new(RefCell::new(RecordingEngine::new()));
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::desktop(800.0, 600.0), Rc::clone(&engine));
        provider.on_pointer_move(&PointerEvent::moved(10.0, 10.0));
        assert!(engine.borrow().is_empty());
    }

    #[test]
    fn dropped_indicator_skips_updates() {
        let (provider, engine, indicator) = provider();
        drop(indicator);
        provider.on_pointer_move(&PointerEvent::moved(10.0, 10.0));
        assert!(engine.borrow().is_empty());
    }

    #[test]
    fn enter_and_leave_toggle_both_flags() {
        let (provider, _, _) = provider();
        let target: Rc<dyn Element> = Rc::new(Node(Rect::new(50.0, 50.0, 100.0, 40.0)));
        let event = TargetEvent::new(PointerEvent::moved(60.0, 60.0), ElementRef::new(&target));

        provider.on_pointer_enter_target(&event);
        let state = provider.hover_state();
        assert!(state.is_hovering && state.visual_hover);
        assert_eq!(state.current_target, Some(ElementRef::new(&target)));
        assert_eq!(provider.phase(), MotionPhase::Docked);

        provider.on_pointer_leave_target(&event);
        let state = provider.hover_state();
        assert!(!state.is_hovering && !state.visual_hover);
        assert!(state.current_target.is_some(), "reference kept until next enter");
        assert_eq!(provider.phase(), MotionPhase::FreeRoam);
    }

    #[test]
    fn unmount_clears_references_and_ignores_input() {
        let (provider, engine, _indicator) = provider();
        let target: Rc<dyn Element> = Rc::new(Node(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let event = TargetEvent::new(PointerEvent::moved(1.0, 1.0), ElementRef::new(&target));
        provider.on_pointer_enter_target(&event);
        provider.unmount();

        assert_eq!(provider.hover_state(), HoverState::default());
        assert!(!provider.is_mounted());

        engine.borrow_mut().clear();
        provider.on_pointer_move(&PointerEvent::moved(5.0, 5.0));
        provider.on_pointer_enter_target(&event);
        assert!(engine.borrow().is_empty());
        assert_eq!(provider.phase(), MotionPhase::FreeRoam);
    }

    #[tracing_test::traced_test]
    #[test]
    fn docking_and_release_are_logged() {
        let (provider, _, _) = provider();
        let target: Rc<dyn Element> = Rc::new(Node(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let event = TargetEvent::new(PointerEvent::moved(1.0, 1.0), ElementRef::new(&target));
        provider.on_pointer_enter_target(&event);
        provider.on_pointer_leave_target(&event);
        assert!(logs_contain("cursor docked"));
        assert!(logs_contain("cursor released"));
    }

    #[test]
    fn cursor_style_follows_visual_flag() {
        let (provider, _, _) = provider();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_cb = Rc::clone(&seen);
        let _watch = provider.watch_cursor_style(move |style| {
            seen_cb.borrow_mut().push(style.background_color);
        });
        let target: Rc<dyn Element> = Rc::new(Node(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let event = TargetEvent::new(PointerEvent::moved(1.0, 1.0), ElementRef::new(&target));

        provider.on_pointer_enter_target(&event);
        assert_eq!(provider.cursor_style().background_color, provider.config().lift_color);
        provider.on_pointer_leave_target(&event);

        let config = provider.config().clone();
        assert_eq!(*seen.borrow(), vec![config.lift_color, config.hover_color]);
    }
}
