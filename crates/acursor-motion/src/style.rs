#![forbid(unsafe_code)]

//! Base (non-animated) styles for the indicator and target markers.
//!
//! These are the declarations a host applies once and re-applies when the
//! render-reactive hover flag or a marker's pressed flag changes. Everything
//! that moves lives in tweens instead.

use std::fmt::Write as _;
use std::time::Duration;

use acursor_core::css::{BoxShadow, Length, Rgba};
use acursor_core::geometry::Point;

use crate::config::MotionConfig;

/// Where the indicator sits before the first pointer move.
pub const OFFSCREEN_ORIGIN: Point = Point::new(-200.0, -200.0);
/// Stacking order of the indicator.
pub const INDICATOR_Z_INDEX: i32 = 9999;
/// Background of a pressed target marker.
pub const PRESSED_BACKGROUND: Rgba = Rgba::new(0.3, 0.05, 0.1, 0.6);
/// Shadow of a pressed target marker.
pub const PRESSED_SHADOW: BoxShadow = BoxShadow::new(0.0, 0.0, 0.0, Rgba::TRANSPARENT);

/// Resolved base style of the floating indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub translate: Point,
    pub size: f64,
    pub z_index: i32,
    pub border_radius: Length,
    pub background_color: Rgba,
    /// Duration of the background-color CSS transition.
    pub transition: Duration,
}

impl CursorStyle {
    /// Resolve for the given render-reactive hover flag.
    ///
    /// Docked indicators take the lift color; free-roaming ones the hover
    /// color.
    #[must_use]
    pub fn resolve(config: &MotionConfig, visual_hover: bool) -> Self {
        Self {
            translate: OFFSCREEN_ORIGIN,
            size: config.size,
            z_index: INDICATOR_Z_INDEX,
            border_radius: Length::Percent(100.0),
            background_color: if visual_hover {
                config.lift_color
            } else {
                config.hover_color
            },
            transition: config.transition(),
        }
    }

    /// Inline CSS declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "transform: translate({}px, {}px); height: {}px; width: {}px; position: fixed; \
             z-index: {}; pointer-events: none; border-radius: {}; background-color: {}; \
             transition: background-color {}s ease-in-out",
            self.translate.x,
            self.translate.y,
            self.size,
            self.size,
            self.z_index,
            self.border_radius,
            self.background_color,
            self.transition.as_secs_f64(),
        )
    }
}

/// Resolved style of a target marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetStyle {
    pub border_radius: Length,
    /// Pressed-state shadow override, applied with `!important`.
    pub box_shadow: Option<BoxShadow>,
    pub background_color: Option<Rgba>,
}

impl TargetStyle {
    #[must_use]
    pub fn resolve(config: &MotionConfig, pressed: bool) -> Self {
        Self {
            border_radius: Length::Px(config.size),
            box_shadow: pressed.then_some(PRESSED_SHADOW),
            background_color: pressed.then_some(PRESSED_BACKGROUND),
        }
    }

    /// Inline CSS declarations.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!("border-radius: {}", self.border_radius);
        if let Some(shadow) = self.box_shadow {
            let _ = write!(css, "; box-shadow: {shadow} !important");
        }
        if let Some(color) = self.background_color {
            let _ = write!(css, "; background-color: {color}");
        }
        css
    }
}
