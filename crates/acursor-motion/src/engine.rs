#![forbid(unsafe_code)]

//! Animation engine collaborator.
//!
//! The provider talks to its animation engine by message passing only:
//! [`AnimationEngine::animate`] accepts an element and a [`Tween`] and
//! returns immediately. Nothing in the motion model waits for a tween to
//! finish, so correctness depends only on which requests were sent and in
//! what order.
//!
//! Two engines ship with the crate:
//!
//! - [`RecordingEngine`] logs every request. Hosts bridging to a foreign
//!   animation library drain it each frame; tests inspect it.
//! - [`TweenEngine`] is a deterministic, host-driven reference engine that
//!   interpolates element state as the host advances time.
//!
//! # Invariants (`TweenEngine`)
//!
//! 1. Each property of an element has at most one active tween. A new request
//!    takes over the properties it names from older in-flight tweens.
//! 2. A retargeted property starts from its current interpolated value.
//! 3. Zero-duration tweens apply immediately inside `animate`.
//! 4. Tracks for elements the host has dropped are pruned on `tick`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use acursor_core::animation::{Animation, EasingFn, Fade, Lerp, ease_out};
use acursor_core::css::{BackgroundImage, BoxShadow, Filter, Length};
use ahash::AHashMap;

use crate::element::{ElementId, ElementRef};
use crate::tween::{Tween, TweenProps};

/// Sink for tween requests.
pub trait AnimationEngine {
    /// Request that `element` animate toward `tween`. Must not block.
    fn animate(&mut self, element: &ElementRef, tween: Tween);
}

/// Shared engines: hosts keep one clone to tick or inspect, the provider
/// owns the other.
impl<E: AnimationEngine> AnimationEngine for Rc<RefCell<E>> {
    fn animate(&mut self, element: &ElementRef, tween: Tween) {
        self.borrow_mut().animate(element, tween);
    }
}

// ---------------------------------------------------------------------------
// RecordingEngine
// ---------------------------------------------------------------------------

/// One logged request.
///
/// Holding the [`ElementRef`] keeps the element's allocation reserved, so an
/// [`ElementId`] in the log cannot be reused by a newer element while the
/// record exists.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenRecord {
    pub element: ElementRef,
    pub tween: Tween,
}

/// Engine that records requests in order and animates nothing.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    records: Vec<TweenRecord>,
}

impl RecordingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All requests received so far, oldest first.
    #[must_use]
    pub fn records(&self) -> &[TweenRecord] {
        &self.records
    }

    /// Take all pending requests.
    pub fn drain(&mut self) -> Vec<TweenRecord> {
        std::mem::take(&mut self.records)
    }

    /// Most recent request for `element`.
    #[must_use]
    pub fn last_for(&self, element: ElementId) -> Option<&Tween> {
        self.records
            .iter()
            .rev()
            .find(|r| r.element.id() == element)
            .map(|r| &r.tween)
    }

    /// Number of requests for `element`.
    #[must_use]
    pub fn count_for(&self, element: ElementId) -> usize {
        self.records.iter().filter(|r| r.element.id() == element).count()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AnimationEngine for RecordingEngine {
    fn animate(&mut self, element: &ElementRef, tween: Tween) {
        self.records.push(TweenRecord {
            element: element.clone(),
            tween,
        });
    }
}

// ---------------------------------------------------------------------------
// TweenEngine
// ---------------------------------------------------------------------------

/// Interpolated visual state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub border_radius: Length,
    pub scale: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    pub background_image: BackgroundImage,
    pub box_shadow: Option<BoxShadow>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            border_radius: Length::Px(0.0),
            scale: 1.0,
            blur: 0.0,
            background_image: BackgroundImage::None,
            box_shadow: None,
        }
    }
}

impl VisualState {
    /// Write the interpolated value of every property in `props`.
    fn apply(&mut self, from: &VisualState, props: &TweenProps, t: f32) {
        if let Some(x) = props.x {
            self.x = from.x.lerp(&x, t);
        }
        if let Some(y) = props.y {
            self.y = from.y.lerp(&y, t);
        }
        if let Some(width) = props.width {
            self.width = from.width.lerp(&width, t);
        }
        if let Some(height) = props.height {
            self.height = from.height.lerp(&height, t);
        }
        if let Some(radius) = props.border_radius {
            self.border_radius = match (from.border_radius, radius) {
                (Length::Px(a), Length::Px(b)) => Length::Px(a.lerp(&b, t)),
                (Length::Percent(a), Length::Percent(b)) => Length::Percent(a.lerp(&b, t)),
                // Mixed units cannot interpolate without a reference size.
                (_, to) => to,
            };
        }
        if let Some(scale) = props.scale {
            self.scale = from.scale.lerp(&scale, t);
        }
        if let Some(Filter::Blur(blur)) = props.filter {
            self.blur = from.blur.lerp(&blur, t);
        }
        if let Some(image) = props.background_image {
            self.background_image = image;
        }
        if let Some(shadow) = props.box_shadow {
            let start = from.box_shadow.unwrap_or_else(|| shadow.transparent());
            self.box_shadow = Some(start.lerp(&shadow, t));
        }
    }
}

#[derive(Debug)]
struct ActiveTween {
    from: VisualState,
    props: TweenProps,
    clock: Fade,
}

#[derive(Debug)]
struct ElementTrack {
    element: ElementRef,
    state: VisualState,
    active: Vec<ActiveTween>,
}

impl ElementTrack {
    fn step(&mut self, dt: Duration) {
        for tween in &mut self.active {
            tween.clock.tick(dt);
            let t = tween.clock.value();
            self.state.apply(&tween.from, &tween.props, t);
        }
        self.active.retain(|tween| !tween.clock.is_complete());
    }
}

/// Deterministic reference engine driven by explicit [`TweenEngine::tick`]s.
#[derive(Debug)]
pub struct TweenEngine {
    tracks: AHashMap<ElementId, ElementTrack>,
    easing: EasingFn,
}

impl Default for TweenEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TweenEngine {
    /// Create an engine using quadratic ease-out.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracks: AHashMap::new(),
            easing: ease_out,
        }
    }

    /// Set the easing curve for tweens started afterwards (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Advance every active tween by `dt` and prune dropped elements.
    pub fn tick(&mut self, dt: Duration) {
        self.tracks.retain(|_, track| track.element.is_alive());
        for track in self.tracks.values_mut() {
            track.step(dt);
        }
    }

    /// Current visual state of `element`, if it was ever animated.
    #[must_use]
    pub fn state(&self, element: ElementId) -> Option<&VisualState> {
        self.tracks.get(&element).map(|track| &track.state)
    }

    /// Whether any tween is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tracks.values().any(|track| !track.active.is_empty())
    }

    /// Number of in-flight tweens for `element`.
    #[must_use]
    pub fn active_count(&self, element: ElementId) -> usize {
        self.tracks.get(&element).map_or(0, |track| track.active.len())
    }

    /// Number of elements with a tracked state.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.tracks.len()
    }
}

impl AnimationEngine for TweenEngine {
    fn animate(&mut self, element: &ElementRef, tween: Tween) {
        if !element.is_alive() || tween.props.is_empty() {
            return;
        }
        let easing = self.easing;
        let track = self
            .tracks
            .entry(element.id())
            .or_insert_with(|| ElementTrack {
                element: element.clone(),
                state: VisualState::default(),
                active: Vec::new(),
            });

        for older in &mut track.active {
            older.props.release_overlap(&tween.props);
        }
        track.active.retain(|older| !older.props.is_empty());
        track.active.push(ActiveTween {
            from: track.state,
            props: tween.props,
            clock: Fade::new(tween.duration).easing(easing),
        });
        track.step(Duration::ZERO);
    }
}
