#![forbid(unsafe_code)]

//! Adaptive cursor public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates, adds a top-level
//! [`Error`], and offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use acursor::prelude::*;
//!
//! struct Window;
//! impl ViewportHost for Window {
//!     fn has_touch_events(&self) -> bool { false }
//!     fn max_touch_points(&self) -> u32 { 0 }
//!     fn inner_size(&self) -> Size { Size::new(1280.0, 800.0) }
//! }
//!
//! # fn main() -> acursor::Result<()> {
//! let config = MotionConfig::default().hover_color(Rgba::parse("rgba(0, 0, 255, 0.2)")?);
//! let engine = Rc::new(RefCell::new(TweenEngine::new()));
//! let provider = acursor::provider(&Window, config, Rc::clone(&engine))?;
//! assert_eq!(provider.phase(), MotionPhase::FreeRoam);
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use acursor_core::animation::{Animation, EasingFn, Fade, Lerp};
pub use acursor_core::css::{BackgroundImage, BoxShadow, Filter, Length, ParseError, Rgba};
pub use acursor_core::event::{PointerButton, PointerEvent, PointerEventKind};
pub use acursor_core::geometry::{Point, Rect, Size};
pub use acursor_core::viewport::{ViewportHost, ViewportSnapshot, probe_viewport};

// --- Motion re-exports -----------------------------------------------------

pub use acursor_motion::{
    AnimationEngine, CursorStyle, Element, ElementGeometry, ElementId, ElementRef, Flag,
    HoverState, MotionConfig, MotionConfigError, MotionContext, MotionError, MotionModel,
    MotionPhase, MotionProvider, RecordingEngine, TargetEvent, TargetMarker, TargetStyle, Tween,
    TweenEngine, TweenProps, TweenRecord, VisualState, Watch,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for adaptive cursor hosts.
#[derive(Debug)]
pub enum Error {
    /// Config could not be loaded or failed validation.
    Config(MotionConfigError),
    /// Provider/consumer contract violation.
    Motion(MotionError),
    /// Invalid CSS value text.
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Motion(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Motion(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<MotionConfigError> for Error {
    fn from(err: MotionConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MotionError> for Error {
    fn from(err: MotionError) -> Self {
        Self::Motion(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Standard result type for adaptive cursor APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Entry points -----------------------------------------------------------

/// Probe `host` once and build a provider for the resulting viewport.
///
/// The probe result is fixed for the provider's lifetime.
pub fn provider(
    host: &impl ViewportHost,
    config: MotionConfig,
    engine: impl AnimationEngine + 'static,
) -> Result<MotionProvider> {
    let viewport = probe_viewport(host);
    Ok(MotionProvider::new(config, viewport, engine)?)
}

/// Load a config file, choosing the format by extension.
///
/// `.json` files are read as JSON; anything else as TOML.
#[cfg(feature = "config-file")]
pub fn load_config(path: impl AsRef<std::path::Path>) -> Result<MotionConfig> {
    let path = path.as_ref();
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => MotionConfig::from_json_file(path)?,
        _ => MotionConfig::from_toml_file(path)?,
    };
    Ok(config.validated()?)
}

// --- Prelude ----------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnimationEngine, Element, Error, Length, MotionConfig, MotionContext, MotionPhase,
        MotionProvider, PointerEvent, PointerEventKind, Rect, RecordingEngine, Result, Rgba, Size,
        TargetMarker, TweenEngine, ViewportHost, ViewportSnapshot,
    };

    pub use crate::{core, motion};
}

pub use acursor_core as core;
pub use acursor_motion as motion;
