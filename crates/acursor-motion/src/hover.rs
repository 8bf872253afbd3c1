#![forbid(unsafe_code)]

//! Hover state, motion phase, and target events.

use acursor_core::event::PointerEvent;

use crate::element::ElementRef;

/// Motion regime of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionPhase {
    /// The indicator tracks the raw pointer position.
    #[default]
    FreeRoam,
    /// The indicator and the hovered target drift toward the pointer.
    Docked,
}

/// Snapshot of a provider's hover state.
///
/// `is_hovering` is written synchronously by the enter/leave handlers and
/// selects the motion regime. `visual_hover` is the render-reactive twin that
/// only drives the indicator's base style; the two may briefly disagree
/// while a host defers style updates.
///
/// `current_target` is not cleared on leave. It is only read while
/// `is_hovering` is set, so a stale reference never drives motion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    pub is_hovering: bool,
    pub visual_hover: bool,
    pub current_target: Option<ElementRef>,
}

impl HoverState {
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        if self.is_hovering {
            MotionPhase::Docked
        } else {
            MotionPhase::FreeRoam
        }
    }
}

/// A pointer event delivered to a specific target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetEvent {
    pub pointer: PointerEvent,
    pub target: ElementRef,
}

impl TargetEvent {
    #[must_use]
    pub fn new(pointer: PointerEvent, target: ElementRef) -> Self {
        Self { pointer, target }
    }
}
