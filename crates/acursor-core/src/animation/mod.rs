#![forbid(unsafe_code)]

//! Animation primitives: easing curves, progress clocks, and interpolation.
//!
//! These are the building blocks a host-driven tween engine needs. Nothing
//! here schedules frames; the host advances time explicitly with
//! [`Animation::tick`], which keeps every animation deterministic under test.
//!
//! # Invariants
//!
//! 1. Easing functions map `0.0 → 0.0` and `1.0 → 1.0` and are monotonic.
//! 2. `Fade::value()` is clamped to `[0.0, 1.0]`.
//! 3. A zero-duration `Fade` is complete immediately and reports `1.0`.
//! 4. `overshoot()` is the time past completion carried by the last tick.

use std::time::Duration;

use crate::css::{BoxShadow, Rgba};

/// An easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// A time-driven animation producing a scalar value.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current value, usually eased progress in `[0.0, 1.0]`.
    fn value(&self) -> f32;

    /// Rewind to the start.
    fn reset(&mut self);

    /// Time accumulated past completion on the last tick.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out. Default curve for cursor tweens.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[must_use]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Eased progress from 0.0 to 1.0 over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    duration: Duration,
    elapsed: Duration,
    overshoot: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a linear fade over `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            overshoot: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Linear (un-eased) progress.
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        let next = self.elapsed.saturating_add(dt);
        if next > self.duration {
            self.overshoot = next - self.duration;
            self.elapsed = self.duration;
        } else {
            self.overshoot = Duration::ZERO;
            self.elapsed = next;
        }
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress()).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.overshoot = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.overshoot
    }
}

// ---------------------------------------------------------------------------
// Interpolation
// ---------------------------------------------------------------------------

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at fraction `t` between `self` (t = 0) and `to` (t = 1).
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * f64::from(t)
    }
}

impl Lerp for f32 {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Rgba {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Rgba::new(
            self.r.lerp(&to.r, t),
            self.g.lerp(&to.g, t),
            self.b.lerp(&to.b, t),
            self.a.lerp(&to.a, t),
        )
    }
}

impl Lerp for BoxShadow {
    fn lerp(&self, to: &Self, t: f32) -> Self {
        BoxShadow {
            offset_x: self.offset_x.lerp(&to.offset_x, t),
            offset_y: self.offset_y.lerp(&to.offset_y, t),
            blur: self.blur.lerp(&to.blur, t),
            spread: self.spread.lerp(&to.spread, t),
            color: self.color.lerp(&to.color, t),
        }
    }
}
