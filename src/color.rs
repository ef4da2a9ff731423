//! Hex color parsing for prompt rendering
//!
//! Colors are configured as 6-digit hex literals, with or without a leading
//! `#` (e.g. `#FF6B6B`, `4ECDC4`). Shorthand and alpha forms are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Literal is not exactly 6 hex digits after an optional `#`
    #[error("invalid hex color '{0}'")]
    InvalidHexColor(String),
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an opaque `image` pixel.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A hex color literal as written in configuration.
///
/// The literal is kept verbatim; it is only validated when converted with
/// [`HexColor::rgb`], so a bad value is reported with the exact text the
/// user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the literal into an RGB triple.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] carrying the literal if it is
    /// not exactly 6 hex digits after an optional `#`.
    pub fn rgb(&self) -> Result<Rgb, ColorError> {
        parse_hex(&self.0)
    }
}

impl From<&str> for HexColor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb.to_string())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a `#RRGGBB` or `RRGGBB` literal into an [`Rgb`].
///
/// # Examples
///
/// ```
/// use promptpix::color::{parse_hex, Rgb};
///
/// assert_eq!(parse_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(parse_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
/// assert!(parse_hex("#FFF").is_err());
/// ```
pub fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || ColorError::InvalidHexColor(s.to_string());

    // Byte length check first; any non-ASCII char fails the digit check below
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let r = parse_hex_pair(&hex[0..2]).ok_or_else(invalid)?;
    let g = parse_hex_pair(&hex[2..4]).ok_or_else(invalid)?;
    let b = parse_hex_pair(&hex[4..6]).ok_or_else(invalid)?;
    Ok(Rgb::new(r, g, b))
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}
