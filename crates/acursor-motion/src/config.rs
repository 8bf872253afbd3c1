#![forbid(unsafe_code)]

//! Motion configuration.
//!
//! [`MotionConfig`] is supplied once when a provider is constructed and is
//! immutable afterwards. Every field has a default, so hosts usually override
//! one or two values and keep the rest.
//!
//! # Loading
//!
//! With the `config-file` feature, configs load from TOML or JSON. Missing
//! keys fall back to defaults, and the camelCase keys used by web builds of
//! the cursor (`transitionSpeed`, `mainCursorHoverColor`, ...) are accepted
//! as aliases.
//!
//! ```toml
//! # acursor.toml
//! size = 24
//! parallax_index = 12
//! hover_color = "rgba(0, 0, 0, 0.25)"
//! ```
//!
//! ```rust,ignore
//! let config = MotionConfig::from_toml_file("acursor.toml")?;
//! ```
//!
//! # Invariants
//!
//! - `size > 0` (indicator diameter).
//! - `parallax_index` is finite and non-zero (it is used as a divisor).
//! - `transition_speed` is finite and non-negative.

use std::fmt;
#[cfg(feature = "config-file")]
use std::path::Path;
use std::time::Duration;

use acursor_core::css::{BoxShadow, Rgba};
#[cfg(feature = "config-file")]
use serde::{Deserialize, Serialize};

/// Default indicator diameter in pixels.
pub const DEFAULT_SIZE: f64 = 20.0;
/// Default tween duration in seconds.
pub const DEFAULT_TRANSITION_SPEED: f64 = 0.2;
/// Default damping divisor for the indicator drift.
pub const DEFAULT_PARALLAX_INDEX: f64 = 16.0;
/// Extra damping applied to the hovered target relative to the indicator.
pub const TARGET_DAMPING_RATIO: f64 = 1.5;

/// Tunable parameters for the adaptive cursor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct MotionConfig {
    /// Indicator diameter in pixels.
    pub size: f64,

    /// Duration of every tween, in seconds.
    #[cfg_attr(feature = "config-file", serde(alias = "transitionSpeed"))]
    pub transition_speed: f64,

    /// Damping divisor for the pointer-driven drift. Larger is subtler.
    #[cfg_attr(feature = "config-file", serde(alias = "parallaxIndex"))]
    pub parallax_index: f64,

    /// Indicator background while free-roaming.
    #[cfg_attr(
        feature = "config-file",
        serde(alias = "hoverColor", alias = "mainCursorHoverColor")
    )]
    pub hover_color: Rgba,

    /// Indicator background while docked on a target.
    #[cfg_attr(
        feature = "config-file",
        serde(alias = "liftColor", alias = "mainCursorLiftColor")
    )]
    pub lift_color: Rgba,

    /// Shadow applied to a docked target.
    pub shadow: BoxShadow,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            transition_speed: DEFAULT_TRANSITION_SPEED,
            parallax_index: DEFAULT_PARALLAX_INDEX,
            hover_color: Rgba::new(0.0, 0.0, 0.0, 0.2),
            lift_color: Rgba::TRANSPARENT,
            shadow: BoxShadow::new(0.0, 7.0, 15.0, Rgba::new(0.0, 0.0, 0.0, 0.14)),
        }
    }
}

impl MotionConfig {
    /// Set the indicator diameter (builder pattern).
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the tween duration in seconds (builder pattern).
    #[must_use]
    pub fn transition_speed(mut self, seconds: f64) -> Self {
        self.transition_speed = seconds;
        self
    }

    /// Set the damping divisor (builder pattern).
    #[must_use]
    pub fn parallax_index(mut self, index: f64) -> Self {
        self.parallax_index = index;
        self
    }

    /// Set the free-roam background color (builder pattern).
    #[must_use]
    pub fn hover_color(mut self, color: Rgba) -> Self {
        self.hover_color = color;
        self
    }

    /// Set the docked background color (builder pattern).
    #[must_use]
    pub fn lift_color(mut self, color: Rgba) -> Self {
        self.lift_color = color;
        self
    }

    /// Set the docked target shadow (builder pattern).
    #[must_use]
    pub fn shadow(mut self, shadow: BoxShadow) -> Self {
        self.shadow = shadow;
        self
    }

    /// Half the indicator diameter.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// Tween duration. Non-representable values collapse to zero.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::try_from_secs_f64(self.transition_speed).unwrap_or(Duration::ZERO)
    }

    /// Damping divisor for the hovered target.
    #[must_use]
    pub fn target_parallax_index(&self) -> f64 {
        self.parallax_index * TARGET_DAMPING_RATIO
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(self.size.is_finite() && self.size > 0.0) {
            errors.push(format!("size must be > 0, got {}", self.size));
        }

        if !self.parallax_index.is_finite() || self.parallax_index == 0.0 {
            errors.push(format!(
                "parallax_index must be finite and non-zero, got {}",
                self.parallax_index
            ));
        }

        if !(self.transition_speed.is_finite() && self.transition_speed >= 0.0) {
            errors.push(format!(
                "transition_speed must be >= 0, got {}",
                self.transition_speed
            ));
        }

        errors
    }

    /// Consume the config, returning it unchanged if valid.
    pub fn validated(self) -> Result<Self, MotionConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(MotionConfigError::Validation(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, MotionConfigError> {
        let config: Self = toml::from_str(s).map_err(MotionConfigError::Toml)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, MotionConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MotionConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, MotionConfigError> {
        let config: Self = serde_json::from_str(s).map_err(MotionConfigError::Json)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, MotionConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(MotionConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML string.
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors from loading or validating a [`MotionConfig`].
#[derive(Debug)]
pub enum MotionConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config-file")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config-file")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl fmt::Display for MotionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config-file")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for MotionConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config-file")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
