//! Rendering configuration.
//!
//! The values that used to be loose constants (canvas size, colors, font
//! size, output location) live in [`IconConfig`] so tests can shrink the
//! canvas or redirect the output.

use image::Rgba;
use std::path::PathBuf;

/// Default canvas width and height in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 512;

/// Default font size in pixels.
pub const DEFAULT_FONT_PX: f32 = 400.0;

/// Fully transparent white.
pub const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Near-black used for glyph strokes.
pub const DEFAULT_FILL: Rgba<u8> = Rgba([10, 10, 10, 255]);

/// Output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "static/icons/notes";

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size in pixels.
    pub font_px: f32,
    /// Color the canvas starts out filled with.
    pub background: Rgba<u8>,
    /// Color glyphs are drawn in.
    pub fill: Rgba<u8>,
    /// Directory icons are written into.
    pub output_dir: PathBuf,
}

impl IconConfig {
    /// Returns the default configuration writing into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Path of the icon file for a note name.
    pub fn icon_path(&self, note_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", note_name))
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            font_px: DEFAULT_FONT_PX,
            background: DEFAULT_BACKGROUND,
            fill: DEFAULT_FILL,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
