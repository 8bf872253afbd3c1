#![forbid(unsafe_code)]

//! One-shot viewport capability probe.
//!
//! Determines at mount whether the device is touch-primary and records the
//! viewport size. The snapshot is read-only: re-probing on resize is not
//! supported, so callers that care about later size changes must construct
//! a new snapshot themselves.
//!
//! # Usage
//!
//! ```
//! use acursor_core::geometry::Size;
//! use acursor_core::viewport::{probe_viewport, ViewportHost};
//!
//! struct Desktop;
//!
//! impl ViewportHost for Desktop {
//!     fn has_touch_events(&self) -> bool { false }
//!     fn max_touch_points(&self) -> u32 { 0 }
//!     fn inner_size(&self) -> Size { Size::new(1280.0, 800.0) }
//! }
//!
//! let snapshot = probe_viewport(&Desktop);
//! assert!(!snapshot.is_touch);
//! ```

use crate::geometry::Size;

/// Host-side signals consulted by [`probe_viewport`].
///
/// In a browser these map to `'ontouchstart' in window`,
/// `navigator.maxTouchPoints`, and `window.innerWidth/innerHeight`.
pub trait ViewportHost {
    /// Whether the host exposes touch events at all.
    fn has_touch_events(&self) -> bool;

    /// Maximum simultaneous touch contacts the device reports.
    fn max_touch_points(&self) -> u32;

    /// Inner viewport size in CSS pixels.
    fn inner_size(&self) -> Size;
}

/// Read-only viewport capabilities captured at mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    /// Touch-primary device; pointer tracking is disabled when set.
    pub is_touch: bool,
    pub width: f64,
    pub height: f64,
}

impl ViewportSnapshot {
    /// A pointer-driven (non-touch) viewport.
    #[must_use]
    pub const fn desktop(width: f64, height: f64) -> Self {
        Self {
            is_touch: false,
            width,
            height,
        }
    }

    /// A touch-primary viewport.
    #[must_use]
    pub const fn touch(width: f64, height: f64) -> Self {
        Self {
            is_touch: true,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for ViewportSnapshot {
    fn default() -> Self {
        Self::desktop(0.0, 0.0)
    }
}

/// Probe the host once and return a snapshot.
pub fn probe_viewport(host: &impl ViewportHost) -> ViewportSnapshot {
    let is_touch = host.has_touch_events() || host.max_touch_points() > 0;
    let size = host.inner_size();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        is_touch,
        width = size.width,
        height = size.height,
        "viewport probed"
    );

    ViewportSnapshot {
        is_touch,
        width: size.width,
        height: size.height,
    }
}
