#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate their native pointer/mouse callbacks into [`PointerEvent`]
//! values. Coordinates are viewport (client) CSS pixels, the same space in
//! which element bounding boxes are reported.
//!
//! # Design Notes
//!
//! - Enter/leave are per-target events; move is observed by the provider for
//!   the whole region it wraps.
//! - `PointerButton` defaults to `Primary` for press/release when the host
//!   does not report a button.

use crate::geometry::Point;

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// Pointer position in viewport coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: Point::new(x, y),
        }
    }

    /// Shorthand for a move event at `(x, y)`.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Horizontal client coordinate.
    #[must_use]
    pub const fn client_x(&self) -> f64 {
        self.position.x
    }

    /// Vertical client coordinate.
    #[must_use]
    pub const fn client_y(&self) -> f64 {
        self.position.y
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved.
    Move,

    /// Pointer entered a target.
    Enter,

    /// Pointer left a target.
    Leave,

    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Press and release on the same target.
    Click(PointerButton),
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    /// Primary button (left mouse button, touch contact, pen tip).
    #[default]
    Primary,

    /// Secondary button (right mouse button).
    Secondary,

    /// Auxiliary button (wheel click).
    Auxiliary,
}
