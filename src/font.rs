//! Font selection and text layout.
//!
//! The preferred TrueType font is looked up on disk and rasterized with
//! `fontdue`. When it cannot be acquired the built-in 5x7 bitmap font is
//! used instead, which is compiled in and cannot fail.

use crate::error::{Error, Result};
use crate::models::{IconSpec, PositionedGlyph};
use crate::utils::find_font_file;
use fontdue::FontSettings;
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Width of a built-in glyph cell.
pub const BUILTIN_GLYPH_WIDTH: u32 = 5;
/// Height of a built-in glyph cell.
pub const BUILTIN_GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between built-in glyph origins.
pub const BUILTIN_ADVANCE: i32 = 6;

/// A font ready for measuring and drawing.
pub enum Font {
    /// A TrueType font rasterized at a fixed pixel size.
    TrueType { font: fontdue::Font, px: f32 },
    /// The built-in bitmap font. Has no size control.
    Builtin,
}

impl Font {
    /// Loads a TrueType font file at the given pixel size.
    pub fn load_truetype(path: &Path, px: f32) -> Result<Font> {
        let load_error = |reason: String| Error::FontLoad {
            path: path.to_path_buf(),
            reason,
        };
        let data = fs::read(path).map_err(|e| load_error(e.to_string()))?;
        let font = fontdue::Font::from_bytes(data, FontSettings::default())
            .map_err(|e| load_error(e.to_string()))?;
        Ok(Font::TrueType { font, px })
    }

    /// Finds `name` in the working directory or a system font directory and loads it.
    pub fn load_preferred(name: &str, px: f32) -> Result<Font> {
        let path = find_font_file(name).ok_or_else(|| Error::FontNotFound(name.to_string()))?;
        debug!("Found font {} at {}", name, path.display());
        Font::load_truetype(&path, px)
    }

    /// Whether this is the compiled-in bitmap font.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }

    /// Lays out `text` on a single line with the origin at the top-left.
    ///
    /// For TrueType fonts the top of the line is the ascent line; for the
    /// built-in font it is the top of the glyph cell.
    pub fn layout(&self, text: &str) -> Vec<PositionedGlyph> {
        match self {
            Font::TrueType { font, px } => layout_truetype(font, *px, text),
            Font::Builtin => layout_builtin(text),
        }
    }
}

/// Picks the preferred font from `spec`, falling back to the built-in one
/// when it cannot be found or loaded. `load_preferred` only fails with
/// `FontNotFound` or `FontLoad`, so nothing else is swallowed here.
pub fn select_font(spec: &IconSpec) -> Font {
    match Font::load_preferred(spec.preferred_font, spec.font_size) {
        Ok(font) => {
            info!("Using font {} at {}px", spec.preferred_font, spec.font_size);
            font
        }
        Err(e) => {
            warn!("{}; falling back to built-in font", e);
            Font::Builtin
        }
    }
}

fn layout_truetype(font: &fontdue::Font, px: f32, text: &str) -> Vec<PositionedGlyph> {
    let ascent = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent)
        .unwrap_or(px);
    let baseline = ascent.round() as i32;

    let mut glyphs = Vec::with_capacity(text.len());
    let mut pen_x = 0.0f32;
    let mut previous: Option<char> = None;
    for ch in text.chars() {
        if let Some(prev) = previous {
            pen_x += font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
        }
        let (metrics, coverage) = font.rasterize(ch, px);
        // ymin is the distance from the baseline up to the bitmap's bottom edge
        glyphs.push(PositionedGlyph {
            left: pen_x.round() as i32 + metrics.xmin,
            top: baseline - (metrics.ymin + metrics.height as i32),
            width: metrics.width as u32,
            height: metrics.height as u32,
            coverage,
        });
        pen_x += metrics.advance_width;
        previous = Some(ch);
    }
    glyphs
}

fn layout_builtin(text: &str) -> Vec<PositionedGlyph> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let rows = builtin_glyph(ch);
            let mut coverage =
                Vec::with_capacity((BUILTIN_GLYPH_WIDTH * BUILTIN_GLYPH_HEIGHT) as usize);
            for row in rows {
                for col in (0..BUILTIN_GLYPH_WIDTH).rev() {
                    coverage.push(if row >> col & 1 == 1 { 255 } else { 0 });
                }
            }
            PositionedGlyph {
                left: i as i32 * BUILTIN_ADVANCE,
                top: 0,
                width: BUILTIN_GLYPH_WIDTH,
                height: BUILTIN_GLYPH_HEIGHT,
                coverage,
            }
        })
        .collect()
}

/// Row bitmaps for the built-in font, leftmost pixel in bit 4.
/// Lowercase letters use the uppercase shapes; unknown characters are blank.
fn builtin_glyph(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        _ => [0; 7],
    }
}
