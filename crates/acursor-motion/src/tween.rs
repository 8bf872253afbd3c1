#![forbid(unsafe_code)]

//! Tween requests: a duration plus the set of properties to drive.
//!
//! A [`Tween`] says *what* an element should animate toward, never *how*.
//! Unset properties are left alone by the engine, so a request that only
//! sets `x`/`y` does not disturb an in-flight size or radius tween.

use std::time::Duration;

use acursor_core::css::{BackgroundImage, BoxShadow, Filter, Length};

/// Target values for the animatable properties. `None` means "leave as is".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TweenProps {
    /// Horizontal translation in pixels.
    pub x: Option<f64>,
    /// Vertical translation in pixels.
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub border_radius: Option<Length>,
    /// Uniform scale factor.
    pub scale: Option<f64>,
    pub filter: Option<Filter>,
    pub background_image: Option<BackgroundImage>,
    pub box_shadow: Option<BoxShadow>,
}

impl TweenProps {
    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Unset every property that `newer` sets.
    ///
    /// Used by engines to give each property at most one active tween: a new
    /// request takes ownership of the properties it names.
    pub fn release_overlap(&mut self, newer: &TweenProps) {
        fn release<T>(slot: &mut Option<T>, newer: &Option<T>) {
            if newer.is_some() {
                *slot = None;
            }
        }
        release(&mut self.x, &newer.x);
        release(&mut self.y, &newer.y);
        release(&mut self.width, &newer.width);
        release(&mut self.height, &newer.height);
        release(&mut self.border_radius, &newer.border_radius);
        release(&mut self.scale, &newer.scale);
        release(&mut self.filter, &newer.filter);
        release(&mut self.background_image, &newer.background_image);
        release(&mut self.box_shadow, &newer.box_shadow);
    }
}

/// A fire-and-forget animation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: Duration,
    pub props: TweenProps,
}

impl Tween {
    /// Create an empty tween over `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            props: TweenProps::default(),
        }
    }

    /// Translate to `(x, y)`.
    #[must_use]
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.props.x = Some(x);
        self.props.y = Some(y);
        self
    }

    /// Resize to `width × height`.
    #[must_use]
    pub fn resize(mut self, width: f64, height: f64) -> Self {
        self.props.width = Some(width);
        self.props.height = Some(height);
        self
    }

    #[must_use]
    pub fn border_radius(mut self, radius: Length) -> Self {
        self.props.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.props.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.props.filter = Some(filter);
        self
    }

    #[must_use]
    pub fn background_image(mut self, image: BackgroundImage) -> Self {
        self.props.background_image = Some(image);
        self
    }

    #[must_use]
    pub fn box_shadow(mut self, shadow: BoxShadow) -> Self {
        self.props.box_shadow = Some(shadow);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_named_properties() {
        let tween = Tween::new(Duration::from_millis(200)).translate(1.0, 2.0).scale(1.1);
        assert_eq!(tween.props.x, Some(1.0));
        assert_eq!(tween.props.y, Some(2.0));
        assert_eq!(tween.props.scale, Some(1.1));
        assert!(tween.props.width.is_none());
        assert!(tween.props.filter.is_none());
    }

    #[test]
    fn release_overlap_keeps_disjoint_properties() {
        let mut older = Tween::new(Duration::ZERO)
            .resize(100.0, 50.0)
            .translate(0.0, 0.0)
            .props;
        let newer = Tween::new(Duration::ZERO).translate(5.0, 5.0).props;
        older.release_overlap(&newer);
        assert!(older.x.is_none() && older.y.is_none());
        assert_eq!(older.width, Some(100.0));
        assert!(!older.is_empty());

        older.release_overlap(&Tween::new(Duration::ZERO).resize(1.0, 1.0).props);
        assert!(older.is_empty());
    }
}
