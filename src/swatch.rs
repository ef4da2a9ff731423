//! Palette swatch rendering to image buffers
//!
//! The swatch is a 8x4 grid of cells. The top two rows are the foreground
//! codes (30-37, 90-97) drawn as a glyph block on the initial background;
//! the bottom two rows are the background codes (40-47, 100-107) filled
//! behind a glyph block in the default foreground.

use image::{Rgba, RgbaImage};

use crate::color::{ColorError, Rgb};
use crate::palette::ColorOverrides;
use crate::state::RenderColorState;

/// Columns per swatch row (one per color of an intensity band)
const COLUMNS: u32 = 8;

/// Code ranges in row order
const ROW_BASES: [u32; 4] = [30, 90, 40, 100];

/// Smallest cell size that still leaves a visible glyph block
pub const MIN_CELL: u32 = 4;

/// Render the swatch for the given state and overrides.
///
/// Every cell starts from `initial`, so cells are independent of each other.
/// `cell` is clamped to at least [`MIN_CELL`] pixels.
///
/// # Errors
///
/// Fails on the first override that is not a valid hex literal.
pub fn render_swatch(
    initial: &RenderColorState,
    overrides: &ColorOverrides,
    cell: u32,
) -> Result<RgbaImage, ColorError> {
    let cell = cell.max(MIN_CELL);
    let mut image = RgbaImage::new(COLUMNS * cell, ROW_BASES.len() as u32 * cell);

    for (row, base) in ROW_BASES.iter().enumerate() {
        for col in 0..COLUMNS {
            let mut state = initial.clone();
            state.set_base16_color(&(base + col).to_string(), overrides)?;
            paint_cell(&mut image, col * cell, row as u32 * cell, cell, &state);
        }
    }

    Ok(image)
}

/// Fill one cell with the background and a centered glyph block.
fn paint_cell(image: &mut RgbaImage, x0: u32, y0: u32, cell: u32, state: &RenderColorState) {
    let bg: Rgba<u8> = state.background.to_rgba();
    let fg: Rgba<u8> = state.foreground.to_rgba();
    let inset = cell / 4;

    for y in 0..cell {
        for x in 0..cell {
            let inside = x >= inset && x < cell - inset && y >= inset && y < cell - inset;
            image.put_pixel(x0 + x, y0 + y, if inside { fg } else { bg });
        }
    }
}

/// Pixel at the center of the glyph block for a cell (for inspection).
pub fn glyph_pixel(image: &RgbaImage, col: u32, row: u32, cell: u32) -> Rgb {
    let cell = cell.max(MIN_CELL);
    let p = image.get_pixel(col * cell + cell / 2, row * cell + cell / 2);
    Rgb::new(p[0], p[1], p[2])
}

/// Pixel at the top-left corner of a cell (always background).
pub fn background_pixel(image: &RgbaImage, col: u32, row: u32, cell: u32) -> Rgb {
    let cell = cell.max(MIN_CELL);
    let p = image.get_pixel(col * cell, row * cell);
    Rgb::new(p[0], p[1], p[2])
}
