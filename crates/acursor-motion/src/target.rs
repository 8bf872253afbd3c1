#![forbid(unsafe_code)]

//! Target markers: hoverable, clickable regions the cursor docks onto.
//!
//! A [`TargetMarker`] wraps one host element. It forwards enter/leave to the
//! provider through its [`MotionContext`] and keeps a local pressed flag for
//! the press visual. It never animates anything itself.

use std::fmt;
use std::rc::Rc;

use acursor_core::event::{PointerEvent, PointerEventKind};
use tracing::trace;

use crate::context::{MotionContext, MotionError};
use crate::element::{Element, ElementRef};
use crate::hover::TargetEvent;
use crate::flag::Flag;
use crate::style::TargetStyle;

type ClickHandler = Box<dyn Fn(&PointerEvent)>;

/// A hoverable region registered with a provider.
pub struct TargetMarker {
    context: MotionContext,
    element: ElementRef,
    active: bool,
    pressed: Flag,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for TargetMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetMarker")
            .field("element", &self.element)
            .field("active", &self.active)
            .field("pressed", &self.pressed.get())
            .finish_non_exhaustive()
    }
}

impl TargetMarker {
    /// Register `element` as a target.
    ///
    /// Fails with [`MotionError::OutsideProvider`] when no context is given.
    pub fn new(
        context: Option<&MotionContext>,
        element: &Rc<dyn Element>,
    ) -> Result<Self, MotionError> {
        let context = MotionContext::require(context)?.clone();
        Ok(Self {
            context,
            element: ElementRef::new(element),
            active: true,
            pressed: Flag::new(false),
            on_click: None,
        })
    }

    /// Enable or disable hover forwarding (builder pattern). Default: enabled.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set the click callback (builder pattern).
    #[must_use]
    pub fn on_click(mut self, handler: impl Fn(&PointerEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed.get()
    }

    /// The pressed flag, for hosts that restyle on change.
    #[must_use]
    pub fn pressed(&self) -> Flag {
        self.pressed.clone()
    }

    /// Current style, including the pressed override.
    #[must_use]
    pub fn style(&self) -> TargetStyle {
        TargetStyle::resolve(self.context.config(), self.pressed.get())
    }

    /// Dispatch a pointer event delivered to this target.
    pub fn handle_event(&self, event: &PointerEvent) -> Result<(), MotionError> {
        match event.kind {
            PointerEventKind::Enter if self.active => self
                .context
                .on_pointer_enter_target(&TargetEvent::new(*event, self.element.clone())),
            PointerEventKind::Leave if self.active => self
                .context
                .on_pointer_leave_target(&TargetEvent::new(*event, self.element.clone())),
            PointerEventKind::Down(_) => {
                self.pressed.set(true);
                Ok(())
            }
            PointerEventKind::Up(_) => {
                self.pressed.set(false);
                Ok(())
            }
            PointerEventKind::Click(_) => {
                if let Some(handler) = &self.on_click {
                    handler(event);
                }
                Ok(())
            }
            kind => {
                trace!(?kind, active = self.active, "target event ignored");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecordingEngine;
    use crate::hover::MotionPhase;
    use crate::provider::MotionProvider;
    use acursor_core::event::PointerButton;
    use acursor_core::geometry::Rect;
    use acursor_core::viewport::ViewportSnapshot;
    use std::cell::Cell;

    struct Node;

    impl Element for Node {
        fn bounding_rect(&self) -> Rect {
            Rect::new(0.0, 0.0, 40.0, 40.0)
        }
    }

    fn at(kind: PointerEventKind) -> PointerEvent {
        PointerEvent::new(kind, 5.0, 5.0)
    }

    #[test]
    fn marker_requires_context() {
        let node: Rc<dyn Element> = Rc::new(Node);
        assert_eq!(
            TargetMarker::new(None, &node).unwrap_err(),
            MotionError::OutsideProvider
        );
    }

    #[test]
    fn press_and_release_toggle_style() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let marker = TargetMarker::new(Some(&provider.context()), &node).unwrap();

        assert!(marker.style().background_color.is_none());
        marker.handle_event(&at(PointerEventKind::Down(PointerButton::Primary))).unwrap();
        assert!(marker.is_pressed());
        assert!(marker.style().box_shadow.is_some());
        marker.handle_event(&at(PointerEventKind::Up(PointerButton::Primary))).unwrap();
        assert!(!marker.is_pressed());
        assert_eq!(marker.style().border_radius.as_px(), Some(20.0));
    }

    #[test]
    fn pressed_flag_is_watchable() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let marker = TargetMarker::new(Some(&provider.context()), &node).unwrap();
        let presses = Rc::new(Cell::new(0u32));
        let presses_cb = Rc::clone(&presses);
        let _watch = marker.pressed().watch(move |down| {
            if down {
                presses_cb.set(presses_cb.get() + 1);
            }
        });

        let down = at(PointerEventKind::Down(PointerButton::Primary));
        marker.handle_event(&down).unwrap();
        marker.handle_event(&down).unwrap();
        marker.handle_event(&at(PointerEventKind::Up(PointerButton::Primary))).unwrap();
        assert_eq!(presses.get(), 1);
        assert_eq!(marker.pressed().flips(), 2);
    }

    #[test]
    fn hover_forwards_to_provider() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let marker = TargetMarker::new(Some(&provider.context()), &node).unwrap();

        marker.handle_event(&at(PointerEventKind::Enter)).unwrap();
        assert_eq!(provider.phase(), MotionPhase::Docked);
        assert_eq!(provider.hover_state().current_target.as_ref(), Some(marker.element()));
        marker.handle_event(&at(PointerEventKind::Leave)).unwrap();
        assert_eq!(provider.phase(), MotionPhase::FreeRoam);
    }

    #[test]
    fn inactive_marker_does_not_dock() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let marker = TargetMarker::new(Some(&provider.context()), &node)
            .unwrap()
            .active(false);
        marker.handle_event(&at(PointerEventKind::Enter)).unwrap();
        assert_eq!(provider.phase(), MotionPhase::FreeRoam);
    }

    #[test]
    fn click_invokes_callback() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let clicks = Rc::new(Cell::new(0u32));
        let clicks_cb = Rc::clone(&clicks);
        let marker = TargetMarker::new(Some(&provider.context()), &node)
            .unwrap()
            .on_click(move |_| clicks_cb.set(clicks_cb.get() + 1));
        marker.handle_event(&at(PointerEventKind::Click(PointerButton::Primary))).unwrap();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn hover_after_provider_drop_is_an_error() {
        let provider =
            MotionProvider::with_defaults(ViewportSnapshot::default(), RecordingEngine::new());
        let node: Rc<dyn Element> = Rc::new(Node);
        let marker = TargetMarker::new(Some(&provider.context()), &node).unwrap();
        drop(provider);
        assert_eq!(
            marker.handle_event(&at(PointerEventKind::Enter)).unwrap_err(),
            MotionError::ProviderUnmounted
        );
        // Press visuals are local and keep working.
        assert!(marker.handle_event(&at(PointerEventKind::Down(PointerButton::Primary))).is_ok());
    }
}
