//! Canvas operations: blank canvas, glyph measurement, centering, drawing.
//!
//! Glyph strings are laid out with fontdue, rasterized into coverage
//! bitmaps, and measured by their ink bounds (the tight box around every
//! rasterized glyph). Centering places that box in the middle of the canvas.

use crate::config::IconConfig;
use crate::font::NoteFont;
use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use image::{Rgba, RgbaImage};

/// Creates a canvas of the configured size filled with the background color.
pub fn new_canvas(config: &IconConfig) -> RgbaImage {
    RgbaImage::from_pixel(config.width, config.height, config.background)
}

/// Coverage bitmap of one rasterized glyph, positioned in layout space.
#[derive(Debug, Clone)]
struct GlyphBitmap {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    /// Row-major coverage, 0 = empty, 255 = fully covered.
    coverage: Vec<u8>,
}

/// Tight box around the rasterized pixels of a glyph string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    /// Left edge in layout space.
    pub left: i32,
    /// Top edge in layout space (y grows downward).
    pub top: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A laid-out, rasterized glyph string ready to be drawn.
#[derive(Debug, Clone)]
pub struct GlyphRun {
    bitmaps: Vec<GlyphBitmap>,
    bounds: Option<InkBounds>,
}

impl GlyphRun {
    /// Lays out and rasterizes `text` at `px` pixels.
    ///
    /// Glyphs the font lacks come out as the font's .notdef box; callers
    /// check coverage with [`NoteFont::first_missing`] beforehand.
    pub fn layout(font: &NoteFont, text: &str, px: f32) -> Self {
        let mut layout: Layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font.inner()], &TextStyle::new(text, px, 0));

        let bitmaps = layout
            .glyphs()
            .iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| {
                let (metrics, coverage) = font.inner().rasterize_config(g.key);
                GlyphBitmap {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .collect();

        Self::from_bitmaps(bitmaps)
    }

    fn from_bitmaps(bitmaps: Vec<GlyphBitmap>) -> Self {
        let bounds = ink_bounds(&bitmaps);
        Self { bitmaps, bounds }
    }

    /// Ink bounds of the run, or None if nothing would be drawn.
    pub fn bounds(&self) -> Option<InkBounds> {
        self.bounds
    }
}

/// Computes the box around every bitmap holding at least one covered pixel.
fn ink_bounds(bitmaps: &[GlyphBitmap]) -> Option<InkBounds> {
    let mut inked = bitmaps
        .iter()
        .filter(|b| b.width > 0 && b.height > 0 && b.coverage.iter().any(|&c| c > 0));
    let first = inked.next()?;
    let (mut left, mut top) = (first.x, first.y);
    let mut right = first.x + first.width as i32;
    let mut bottom = first.y + first.height as i32;
    for b in inked {
        left = left.min(b.x);
        top = top.min(b.y);
        right = right.max(b.x + b.width as i32);
        bottom = bottom.max(b.y + b.height as i32);
    }
    Some(InkBounds {
        left,
        top,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}

/// Returns the top-left position that centers a `width`×`height` box on the canvas.
///
/// The result is negative when the box is larger than the canvas; the
/// overhang is split evenly and clipped when drawing.
///
/// # Examples
///
/// ```
/// use notation_icons::icons::canvas::centered_origin;
///
/// assert_eq!(centered_origin(512, 512, 200, 300), (156, 106));
/// ```
pub fn centered_origin(
    canvas_width: u32,
    canvas_height: u32,
    width: u32,
    height: u32,
) -> (i64, i64) {
    let x = (i64::from(canvas_width) - i64::from(width)).div_euclid(2);
    let y = (i64::from(canvas_height) - i64::from(height)).div_euclid(2);
    (x, y)
}

/// Draws `run` so its ink box starts at `origin`, clipping at canvas edges.
pub fn draw_run(canvas: &mut RgbaImage, run: &GlyphRun, origin: (i64, i64), fill: Rgba<u8>) {
    let Some(bounds) = run.bounds else {
        return;
    };
    let (canvas_w, canvas_h) = (i64::from(canvas.width()), i64::from(canvas.height()));

    for bitmap in &run.bitmaps {
        let base_x = origin.0 + i64::from(bitmap.x - bounds.left);
        let base_y = origin.1 + i64::from(bitmap.y - bounds.top);
        for (row, line) in bitmap.coverage.chunks(bitmap.width.max(1)).enumerate() {
            let y = base_y + row as i64;
            if y < 0 || y >= canvas_h {
                continue;
            }
            for (col, &coverage) in line.iter().enumerate() {
                let x = base_x + col as i64;
                if coverage == 0 || x < 0 || x >= canvas_w {
                    continue;
                }
                blend_over(canvas.get_pixel_mut(x as u32, y as u32), fill, coverage);
            }
        }
    }
}

/// Composites `fill` scaled by `coverage` over `dst` (straight alpha, source-over).
pub fn blend_over(dst: &mut Rgba<u8>, fill: Rgba<u8>, coverage: u8) {
    let src_a = f32::from(fill.0[3]) / 255.0 * f32::from(coverage) / 255.0;
    let dst_a = f32::from(dst.0[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    for i in 0..3 {
        let src_c = f32::from(fill.0[i]);
        let dst_c = f32::from(dst.0[i]);
        let c = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
        dst.0[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}
