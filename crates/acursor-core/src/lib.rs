#![forbid(unsafe_code)]

//! Core: geometry, pointer events, CSS values, easing, and viewport probing.
//!
//! # Role in adaptive-cursor
//! `acursor-core` is the input layer. It owns the normalized pointer event
//! types the motion provider consumes, the small set of CSS value types the
//! provider writes into tween requests, and the one-shot viewport capability
//! probe that decides whether pointer tracking is active at all.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical pointer input (move, enter, leave, press).
//! - **Geometry**: `Point`, `Size`, and `Rect` in CSS pixels.
//! - **CSS values**: colors, pixel lengths, box shadows, filters, gradients.
//! - **Animation**: easing curves and the `Animation` progress trait.
//! - **Viewport probe**: touch capability and viewport size at mount.
//!
//! # How it fits in the system
//! The motion crate (`acursor-motion`) consumes `acursor-core` events and
//! produces tween requests built from `acursor-core` values. Nothing here
//! touches a host element; hosts plug in through traits defined downstream.

pub mod animation;
pub mod css;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
