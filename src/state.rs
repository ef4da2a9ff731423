//! Foreground/background color state of a single render
//!
//! A renderer owns one [`RenderColorState`] and feeds it every basic SGR color
//! code it meets. Each call updates at most one slot.

use tracing::{debug, trace};

use crate::color::{ColorError, Rgb};
use crate::palette::{resolve_named, ColorName, ColorOverrides, Target};

/// The current colors of a render in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderColorState {
    /// Current glyph color
    pub foreground: Rgb,
    /// Current cell background
    pub background: Rgb,
    /// Foreground used when a foreground code has no palette entry
    default_foreground: Rgb,
}

impl RenderColorState {
    /// Create a state whose foreground starts at `default_foreground`.
    pub fn new(default_foreground: Rgb, background: Rgb) -> Self {
        Self { foreground: default_foreground, background, default_foreground }
    }

    pub fn default_foreground(&self) -> Rgb {
        self.default_foreground
    }

    /// Apply a legacy 16-color SGR code such as `"31"` or `"104"`.
    ///
    /// Overrides win over the base16 palette. Codes that do not parse as an
    /// integer are ignored. Numeric codes without a palette entry reset the
    /// foreground to its default when they address the foreground, and are
    /// ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] when the override for the
    /// resolved name is not a valid hex literal. No slot is changed in that
    /// case.
    pub fn set_base16_color(
        &mut self,
        code: &str,
        overrides: &ColorOverrides,
    ) -> Result<(), ColorError> {
        let Ok(code_num) = code.parse::<i32>() else {
            debug!(code, "ignoring non-numeric color code");
            return Ok(());
        };

        let target = Target::of_code(code_num);
        let color = match ColorName::from_code(code_num) {
            Some(name) => resolve_named(name, overrides)?,
            None if target == Target::Foreground => {
                debug!(code = code_num, "unknown foreground code, using default foreground");
                self.default_foreground
            }
            None => {
                debug!(code = code_num, "ignoring unknown background code");
                return Ok(());
            }
        };

        trace!(code = code_num, ?target, %color, "color slot updated");
        match target {
            Target::Foreground => self.foreground = color,
            Target::Background => self.background = color,
        }
        Ok(())
    }
}
