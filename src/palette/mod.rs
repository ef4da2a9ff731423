//! Built-in 16-color terminal palette.
//!
//! Resolution is two table lookups: a legacy SGR color code maps to one of
//! 16 canonical color names, and the name maps to either a user override or
//! the fixed base16 RGB value.

use crate::color::{ColorError, HexColor, Rgb};
use std::collections::HashMap;
use std::fmt;

/// User color overrides keyed by canonical color name (e.g. `red`, `lightBlue`).
pub type ColorOverrides = HashMap<String, HexColor>;

/// The 16 canonical terminal color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    LightWhite,
}

/// Standard intensity names, indexed by `code - 30` (or `code - 40`).
const STANDARD: [ColorName; 8] = [
    ColorName::Black,
    ColorName::Red,
    ColorName::Green,
    ColorName::Yellow,
    ColorName::Blue,
    ColorName::Magenta,
    ColorName::Cyan,
    ColorName::White,
];

/// Bright names, indexed by `code - 90` (or `code - 100`).
const BRIGHT: [ColorName; 8] = [
    ColorName::DarkGray,
    ColorName::LightRed,
    ColorName::LightGreen,
    ColorName::LightYellow,
    ColorName::LightBlue,
    ColorName::LightMagenta,
    ColorName::LightCyan,
    ColorName::LightWhite,
];

/// Which color slot an SGR code writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Foreground,
    Background,
}

impl Target {
    /// Classify a numeric code.
    ///
    /// Codes below 40 and in the 90s address the foreground; everything else
    /// addresses the background.
    pub fn of_code(code: i32) -> Self {
        if code < 40 || (90..100).contains(&code) {
            Target::Foreground
        } else {
            Target::Background
        }
    }
}

impl ColorName {
    /// All names in palette order (standard 0-7, then bright 8-15).
    pub const ALL: [ColorName; 16] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
        ColorName::DarkGray,
        ColorName::LightRed,
        ColorName::LightGreen,
        ColorName::LightYellow,
        ColorName::LightBlue,
        ColorName::LightMagenta,
        ColorName::LightCyan,
        ColorName::LightWhite,
    ];

    /// Map a legacy SGR color code to its canonical name.
    ///
    /// Recognizes 30-37 / 40-47 (standard) and 90-97 / 100-107 (bright).
    /// Any other code has no name.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            30..=37 => Some(STANDARD[(code - 30) as usize]),
            40..=47 => Some(STANDARD[(code - 40) as usize]),
            90..=97 => Some(BRIGHT[(code - 90) as usize]),
            100..=107 => Some(BRIGHT[(code - 100) as usize]),
            _ => None,
        }
    }

    /// Look up a canonical name as written in configuration (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }

    /// The configuration key for this color.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
            ColorName::DarkGray => "darkGray",
            ColorName::LightRed => "lightRed",
            ColorName::LightGreen => "lightGreen",
            ColorName::LightYellow => "lightYellow",
            ColorName::LightBlue => "lightBlue",
            ColorName::LightMagenta => "lightMagenta",
            ColorName::LightCyan => "lightCyan",
            ColorName::LightWhite => "lightWhite",
        }
    }

    /// The built-in base16 value for this color.
    pub fn base16(self) -> Rgb {
        match self {
            ColorName::Black => Rgb::new(1, 1, 1),
            ColorName::Red => Rgb::new(222, 56, 43),
            ColorName::Green => Rgb::new(57, 181, 74),
            ColorName::Yellow => Rgb::new(255, 199, 6),
            ColorName::Blue => Rgb::new(0, 111, 184),
            ColorName::Magenta => Rgb::new(118, 38, 113),
            ColorName::Cyan => Rgb::new(44, 181, 233),
            ColorName::White => Rgb::new(204, 204, 204),
            ColorName::DarkGray => Rgb::new(128, 128, 128),
            ColorName::LightRed => Rgb::new(255, 0, 0),
            ColorName::LightGreen => Rgb::new(0, 255, 0),
            ColorName::LightYellow => Rgb::new(255, 255, 0),
            ColorName::LightBlue => Rgb::new(0, 0, 255),
            ColorName::LightMagenta => Rgb::new(255, 0, 255),
            ColorName::LightCyan => Rgb::new(0, 255, 255),
            ColorName::LightWhite => Rgb::new(255, 255, 255),
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Resolve a named color, preferring the user's override.
///
/// # Errors
///
/// An override whose literal is not valid hex is an error; it never falls
/// back to the base16 value.
pub fn resolve_named(name: ColorName, overrides: &ColorOverrides) -> Result<Rgb, ColorError> {
    match overrides.get(name.as_str()) {
        Some(hex) => hex.rgb(),
        None => Ok(name.base16()),
    }
}
