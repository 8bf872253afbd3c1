#![forbid(unsafe_code)]

//! CSS value types written into tween requests and base styles.
//!
//! Only the handful of value shapes the cursor actually drives are modeled:
//! `rgb()`/`rgba()` colors, pixel and percent lengths, single box shadows,
//! the blur filter, and a radial-gradient background. Each type parses from
//! and formats to CSS text so hosts can forward values verbatim.
//!
//! # Failure Modes
//!
//! - Unknown color notations (`#hex`, named colors, `hsl()`) are rejected
//!   with [`ParseError::Color`] rather than guessed.
//! - Lengths in units other than `px` and `%` are rejected.

use std::fmt;

use crate::geometry::Point;

/// Error returned when CSS text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not an `rgb()`/`rgba()` color.
    Color(String),
    /// Not a `px` or `%` length.
    Length(String),
    /// Not a `<x> <y> [blur] [spread] <color>` box shadow.
    Shadow(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(s) => write!(f, "invalid color: {s:?}"),
            Self::Length(s) => write!(f, "invalid length: {s:?}"),
            Self::Shadow(s) => write!(f, "invalid box shadow: {s:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An `rgba()` color.
///
/// Channels are kept as `f32` rather than `u8` because CSS accepts fractional
/// channel values and the original text should survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Create a color from channels and alpha.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Parse a CSS color.
    ///
    /// Accepts `rgb()`/`rgba()` in comma or space/slash form (`rgb()` with
    /// four components is accepted, as browsers do), `#rgb`, `#rgba`,
    /// `#rrggbb`, `#rrggbbaa`, and the basic named colors including
    /// `transparent`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let err = || ParseError::Color(text.to_string());
        let trimmed = text.trim().to_ascii_lowercase();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::from_hex(hex).ok_or_else(err);
        }
        let Some(body) = trimmed
            .strip_prefix("rgba(")
            .or_else(|| trimmed.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return Self::named(&trimmed).ok_or_else(err);
        };

        let parts: Vec<f32> = body
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(|p| p.parse::<f32>().map_err(|_| err()))
            .collect::<Result<_, _>>()?;

        match parts.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b, 1.0)),
            [r, g, b, a] => Ok(Self::new(*r, *g, *b, a.clamp(0.0, 1.0))),
            _ => Err(err()),
        }
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let digits: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8 * 17))
                .collect::<Option<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                .collect::<Option<_>>()?,
            _ => return None,
        };
        let channel = |i: usize| f32::from(digits[i]);
        let alpha = digits.get(3).map_or(1.0, |a| f32::from(*a) / 255.0);
        Some(Self::new(channel(0), channel(1), channel(2), alpha))
    }

    fn named(name: &str) -> Option<Self> {
        let (r, g, b): (u8, u8, u8) = match name {
            "transparent" => return Some(Self::TRANSPARENT),
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "navy" => (0, 0, 128),
            "yellow" => (255, 255, 0),
            "orange" => (255, 165, 0),
            "cyan" | "aqua" => (0, 255, 255),
            "magenta" | "fuchsia" => (255, 0, 255),
            "purple" => (128, 0, 128),
            "teal" => (0, 128, 128),
            "olive" => (128, 128, 0),
            "maroon" => (128, 0, 0),
            "silver" => (192, 192, 192),
            "gray" | "grey" => (128, 128, 128),
            _ => return None,
        };
        Some(Self::new(f32::from(r), f32::from(g), f32::from(b), 1.0))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Length
// ---------------------------------------------------------------------------

/// A CSS length limited to pixels and percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Parse `8px`, `100%`, or a bare number (treated as pixels).
    ///
    /// For multi-value shorthands such as a resolved `border-radius` of
    /// `8px 4px`, only the first value is read.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let err = || ParseError::Length(text.to_string());
        let first = text.split_whitespace().next().ok_or_else(err)?;
        if let Some(px) = first.strip_suffix("px") {
            px.parse::<f64>().map(Self::Px).map_err(|_| err())
        } else if let Some(pct) = first.strip_suffix('%') {
            pct.parse::<f64>().map(Self::Percent).map_err(|_| err())
        } else {
            first.parse::<f64>().map(Self::Px).map_err(|_| err())
        }
    }

    /// Pixel value, if this is a pixel length.
    #[must_use]
    pub const fn as_px(&self) -> Option<f64> {
        match self {
            Self::Px(v) => Some(*v),
            Self::Percent(_) => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl TryFrom<String> for Length {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Box shadow
// ---------------------------------------------------------------------------

/// A single (non-inset) box shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BoxShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
}

impl BoxShadow {
    /// Create a shadow without spread.
    #[must_use]
    pub const fn new(offset_x: f64, offset_y: f64, blur: f64, color: Rgba) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
        }
    }

    /// Same geometry with a fully transparent color.
    #[must_use]
    pub const fn transparent(mut self) -> Self {
        self.color = self.color.with_alpha(0.0);
        self
    }

    /// Parse `<x> <y> [blur [spread]]` with the color before or after.
    ///
    /// Lengths are px or bare numbers. A color is required.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let err = || ParseError::Shadow(text.to_string());
        let mut tokens = shadow_tokens(text);
        let color_first = tokens.first().is_some_and(|tok| Length::parse(tok).is_err());
        let color_text = if color_first {
            tokens.remove(0)
        } else {
            tokens.pop().ok_or_else(err)?
        };
        let color = Rgba::parse(color_text).map_err(|_| err())?;

        let lengths: Vec<f64> = tokens
            .iter()
            .map(|tok| match Length::parse(tok) {
                Ok(Length::Px(v)) => Ok(v),
                _ => Err(err()),
            })
            .collect::<Result<_, _>>()?;

        match lengths.as_slice() {
            [x, y] => Ok(Self::new(*x, *y, 0.0, color)),
            [x, y, blur] => Ok(Self::new(*x, *y, *blur, color)),
            [x, y, blur, spread] => Ok(Self {
                spread: *spread,
                ..Self::new(*x, *y, *blur, color)
            }),
            _ => Err(err()),
        }
    }
}

/// Split on whitespace outside parentheses, so `rgba(0, 0, 0, 1)` stays whole.
fn shadow_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&text[s..i]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(i);
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}px {}px", self.offset_x, self.offset_y, self.blur)?;
        if self.spread != 0.0 {
            write!(f, " {}px", self.spread)?;
        }
        write!(f, " {}", self.color)
    }
}

impl TryFrom<String> for BoxShadow {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BoxShadow> for String {
    fn from(value: BoxShadow) -> Self {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Filter and background image
// ---------------------------------------------------------------------------

/// The `filter` property, limited to a single blur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// `blur(<px>)`; `Blur(0.0)` renders unblurred.
    Blur(f64),
}

impl Filter {
    /// Blur radius in pixels.
    #[must_use]
    pub const fn blur_radius(&self) -> f64 {
        match self {
            Self::Blur(px) => *px,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blur(px) => write!(f, "blur({px}px)"),
        }
    }
}

/// The `background-image` property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundImage {
    /// `none`.
    None,
    /// `radial-gradient(circle at <x>px <y>px, <from>, <to>)`.
    RadialGradient { at: Point, from: Rgba, to: Rgba },
}

impl fmt::Display for BackgroundImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::RadialGradient { at, from, to } => write!(
                f,
                "radial-gradient(circle at {}px {}px, {from}, {to})",
                at.x, at.y
            ),
        }
    }
}
