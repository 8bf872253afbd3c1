#![forbid(unsafe_code)]

//! Parallax math and the tween requests for each motion regime.
//!
//! [`MotionModel`] is pure: given a config, a pointer position, and target
//! geometry it builds [`Tween`]s and touches nothing else. The provider
//! decides *when* to send them.
//!
//! # Drift
//!
//! For one axis, with pointer coordinate `p`, target edge `e`, target
//! dimension `d`, and damping divisor `k`:
//!
//! ```text
//! drift = (p − e − d/2) / k
//! ```
//!
//! i.e. the pointer's offset from the target's center, damped by `k`. The
//! indicator uses `k = parallax_index`, the target `k = parallax_index × 1.5`,
//! so the target always moves two thirds as far as the indicator drifts.
//! There is no hard clamp: the pointer leaves the target before the drift
//! can grow past `d / (2k)`.

use std::time::Duration;

use acursor_core::css::{BackgroundImage, BoxShadow, Filter, Length, Rgba};
use acursor_core::geometry::{Point, Size};

use crate::config::MotionConfig;
use crate::element::ElementGeometry;
use crate::tween::Tween;

/// Scale applied to the indicator and target while docked.
pub const DOCKED_SCALE: f64 = 1.1;
/// Blur applied to the docked indicator, in pixels.
pub const DOCKED_BLUR: f64 = 8.0;
/// Corner radius the indicator returns to on deactivate.
pub const ROUND_RADIUS: Length = Length::Px(100.0);
/// Inner stop of the docked indicator's highlight gradient.
pub const HIGHLIGHT_FROM: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.4);
/// Outer stop of the docked indicator's highlight gradient.
pub const HIGHLIGHT_TO: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.0);
/// Target shadow after release, whatever shadow the config docks with.
pub const RELEASED_SHADOW: BoxShadow = BoxShadow::new(0.0, 7.0, 15.0, Rgba::TRANSPARENT);

/// Damped offset of `pointer` from the center of `[edge, edge + dimension]`.
#[inline]
#[must_use]
pub fn move_index(pointer: f64, edge: f64, dimension: f64, divisor: f64) -> f64 {
    (pointer - edge - dimension / 2.0) / divisor
}

/// Per-axis drift of the pointer relative to a target's center.
#[must_use]
pub fn drift(pointer: Point, geometry: &ElementGeometry, divisor: f64) -> Point {
    Point::new(
        move_index(pointer.x, geometry.rect.left(), geometry.client.width, divisor),
        move_index(pointer.y, geometry.rect.top(), geometry.client.height, divisor),
    )
}

/// Tweens for one docked pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockedMotion {
    pub indicator: Tween,
    pub target: Tween,
}

/// Tweens for a hover deactivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseMotion {
    pub indicator: Tween,
    pub target: Tween,
}

/// Config-derived motion model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    size: f64,
    radius: f64,
    duration: Duration,
    cursor_divisor: f64,
    target_divisor: f64,
    shadow: BoxShadow,
}

impl MotionModel {
    #[must_use]
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            size: config.size,
            radius: config.radius(),
            duration: config.transition(),
            cursor_divisor: config.parallax_index,
            target_divisor: config.target_parallax_index(),
            shadow: config.shadow,
        }
    }

    /// Half the base indicator diameter.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Free roam: center the indicator on the pointer.
    #[must_use]
    pub fn free_roam(&self, pointer: Point) -> Tween {
        Tween::new(self.duration).translate(pointer.x - self.radius, pointer.y - self.radius)
    }

    /// Docked: drift the indicator and displace the target toward the pointer.
    ///
    /// The indicator is already sized to the target by the activate
    /// transition, so translating it to the target's edges places it over
    /// the target's center; `radius` keeps the base-size offset used by
    /// free roam.
    #[must_use]
    pub fn docked(&self, pointer: Point, geometry: &ElementGeometry) -> DockedMotion {
        let cursor = drift(pointer, geometry, self.cursor_divisor);
        let target = drift(pointer, geometry, self.target_divisor);
        let local = pointer.relative_to(geometry.rect.origin());

        let indicator = Tween::new(self.duration)
            .filter(Filter::Blur(DOCKED_BLUR))
            .translate(
                geometry.rect.left() + self.radius + cursor.x,
                geometry.rect.top() + self.radius + cursor.y,
            )
            .background_image(BackgroundImage::RadialGradient {
                at: local,
                from: HIGHLIGHT_FROM,
                to: HIGHLIGHT_TO,
            });

        let target = Tween::new(self.duration)
            .translate(target.x, target.y)
            .scale(DOCKED_SCALE)
            .box_shadow(self.shadow);

        DockedMotion { indicator, target }
    }

    /// Activate hover: morph the indicator into the target's shape.
    ///
    /// `corner_radius` is the target's resolved radius; when `None` the
    /// indicator keeps its current radius.
    #[must_use]
    pub fn activate(&self, client: Size, corner_radius: Option<Length>) -> Tween {
        let tween = Tween::new(self.duration)
            .resize(client.width, client.height)
            .scale(DOCKED_SCALE);
        match corner_radius {
            Some(radius) => tween.border_radius(radius),
            None => tween,
        }
    }

    /// Deactivate hover: restore the indicator and release the target.
    #[must_use]
    pub fn release(&self) -> ReleaseMotion {
        let indicator = Tween::new(self.duration)
            .resize(self.size, self.size)
            .border_radius(ROUND_RADIUS)
            .scale(1.0)
            .background_image(BackgroundImage::None)
            .filter(Filter::Blur(0.0));

        let target = Tween::new(self.duration)
            .translate(0.0, 0.0)
            .scale(1.0)
            .box_shadow(RELEASED_SHADOW);

        ReleaseMotion { indicator, target }
    }
}
