use image::Rgb;

/// Everything needed to produce one icon. All values are fixed at compile time.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSpec {
    /// Width and height of the square canvas, in pixels.
    pub size: u32,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub label: &'static str,
    /// File name (or path) of the TrueType font to try first.
    pub preferred_font: &'static str,
    /// Pixel size for the preferred font. The built-in font ignores it.
    pub font_size: f32,
    /// Added to the centered y offset.
    pub vertical_nudge: i32,
    /// Output location, relative to the working directory.
    pub output_path: &'static str,
}

/// The UDD favicon: white "UDD" on university blue.
pub const UDD_FAVICON: IconSpec = IconSpec {
    size: 32,
    background: Rgb([0x1e, 0x40, 0xaf]),
    foreground: Rgb([0xff, 0xff, 0xff]),
    label: "UDD",
    preferred_font: "arial.ttf",
    font_size: 14.0,
    vertical_nudge: -2,
    output_path: "public/favicon.ico",
};

/// Ink extent of laid-out text. `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// A rasterized glyph placed relative to the layout origin.
#[derive(Clone, Debug)]
pub struct PositionedGlyph {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Row-major coverage, one byte per pixel, stride == width.
    pub coverage: Vec<u8>,
}

impl PositionedGlyph {
    /// Coverage at glyph-local coordinates.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }

    /// Tight ink rectangle in layout coordinates, or `None` for blank glyphs.
    pub fn ink_bounds(&self) -> Option<TextBBox> {
        let mut bounds: Option<TextBBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.coverage_at(x, y) == 0 {
                    continue;
                }
                let px = self.left + x as i32;
                let py = self.top + y as i32;
                let b = bounds.get_or_insert(TextBBox {
                    left: px,
                    top: py,
                    right: px + 1,
                    bottom: py + 1,
                });
                b.left = b.left.min(px);
                b.top = b.top.min(py);
                b.right = b.right.max(px + 1);
                b.bottom = b.bottom.max(py + 1);
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_bounds_skips_empty_margin() {
        // 4x3 cell with a single lit pixel at (2, 1)
        let glyph = PositionedGlyph {
            left: 10,
            top: 5,
            width: 4,
            height: 3,
            coverage: vec![0, 0, 0, 0, 0, 0, 200, 0, 0, 0, 0, 0],
        };
        assert_eq!(
            glyph.ink_bounds(),
            Some(TextBBox { left: 12, top: 6, right: 13, bottom: 7 })
        );
    }

    #[test]
    fn blank_glyph_has_no_bounds() {
        let glyph = PositionedGlyph {
            left: 0,
            top: 0,
            width: 2,
            height: 2,
            coverage: vec![0; 4],
        };
        assert_eq!(glyph.ink_bounds(), None);
    }

    #[test]
    fn udd_favicon_constants() {
        assert_eq!(UDD_FAVICON.size, 32);
        assert_eq!(UDD_FAVICON.background, Rgb([30, 64, 175]));
        assert_eq!(UDD_FAVICON.vertical_nudge, -2);
    }
}
