use crate::font::Font;
use crate::models::{IconSpec, TextBBox};
use image::{Rgb, RgbImage};
use log::debug;

/// Allocates the square canvas filled with the background color.
pub fn new_canvas(spec: &IconSpec) -> RgbImage {
    RgbImage::from_pixel(spec.size, spec.size, spec.background)
}

/// Measures the ink extent of `text` laid out at the origin.
/// Blank or empty text measures as an all-zero box.
pub fn text_bbox(font: &Font, text: &str) -> TextBBox {
    font.layout(text)
        .iter()
        .filter_map(|glyph| glyph.ink_bounds())
        .reduce(|a, b| TextBBox {
            left: a.left.min(b.left),
            top: a.top.min(b.top),
            right: a.right.max(b.right),
            bottom: a.bottom.max(b.bottom),
        })
        .unwrap_or_default()
}

/// Computes where to place the text origin so the box sits centered,
/// shifted vertically by `nudge`. Uses floor division so oversized text
/// gets a negative offset rounded towards negative infinity.
pub fn centered_origin(width: u32, height: u32, bbox: TextBBox, nudge: i32) -> (i32, i32) {
    let x = (width as i32 - bbox.width()).div_euclid(2);
    let y = (height as i32 - bbox.height()).div_euclid(2) + nudge;
    (x, y)
}

/// Draws `text` with its layout origin at `origin`, blending glyph coverage
/// over the existing pixels. Anything outside the canvas is clipped.
pub fn draw_text(
    canvas: &mut RgbImage,
    font: &Font,
    text: &str,
    origin: (i32, i32),
    color: Rgb<u8>,
) {
    let (width, height) = canvas.dimensions();
    for glyph in font.layout(text) {
        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let coverage = glyph.coverage_at(gx, gy);
                if coverage == 0 {
                    continue;
                }
                let x = origin.0 + glyph.left + gx as i32;
                let y = origin.1 + glyph.top + gy as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                    continue;
                }
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                for channel in 0..3 {
                    pixel.0[channel] = blend(pixel.0[channel], color.0[channel], coverage);
                }
            }
        }
    }
}

/// Renders the complete icon for `spec` with an already selected font.
pub fn render_icon(spec: &IconSpec, font: &Font) -> RgbImage {
    let mut canvas = new_canvas(spec);
    let bbox = text_bbox(font, spec.label);
    let origin = centered_origin(canvas.width(), canvas.height(), bbox, spec.vertical_nudge);
    debug!("Label {:?} bbox {:?}, origin {:?}", spec.label, bbox, origin);
    draw_text(&mut canvas, font, spec.label, origin, spec.foreground);
    canvas
}

fn blend(background: u8, foreground: u8, coverage: u8) -> u8 {
    let c = coverage as u32;
    ((background as u32 * (255 - c) + foreground as u32 * c + 127) / 255) as u8
}
