//! Batch icon generation.
//!
//! Renders each table entry onto its own canvas and writes it as
//! `{output_dir}/{note-name}.png`. Entries are processed in order, one at a
//! time; the first failure aborts the run.

use super::canvas::{centered_origin, draw_run, new_canvas, GlyphRun};
use crate::config::IconConfig;
use crate::error::{IconError, Result};
use crate::font::NoteFont;
use crate::notes::NoteGlyph;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::PathBuf;

/// Files written by a generation run, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path of each icon written, one per entry.
    pub written: Vec<PathBuf>,
}

/// Renders one note's icon in memory.
///
/// # Errors
///
/// Returns `IconError::MissingGlyph` if the font cannot draw a code point of
/// the glyph string, or `IconError::EmptyGlyph` if nothing visible results.
pub fn render_icon(note: &NoteGlyph, config: &IconConfig, font: &NoteFont) -> Result<RgbaImage> {
    if let Some(ch) = font.first_missing(note.glyph) {
        return Err(IconError::MissingGlyph {
            note: note.name.to_string(),
            ch,
        });
    }

    let run = GlyphRun::layout(font, note.glyph, config.font_px);
    let bounds = run.bounds().ok_or_else(|| IconError::EmptyGlyph {
        note: note.name.to_string(),
    })?;

    let origin = centered_origin(config.width, config.height, bounds.width, bounds.height);
    tracing::debug!(
        "Note '{}': ink {}x{} drawn at ({}, {})",
        note.name,
        bounds.width,
        bounds.height,
        origin.0,
        origin.1
    );

    let mut canvas = new_canvas(config);
    draw_run(&mut canvas, &run, origin, config.fill);
    Ok(canvas)
}

/// Renders one note and writes it to its icon path, replacing any existing file.
///
/// # Returns
///
/// The path written
pub fn write_icon(note: &NoteGlyph, config: &IconConfig, font: &NoteFont) -> Result<PathBuf> {
    let image = render_icon(note, config, font)?;
    let path = config.icon_path(note.name);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

/// Generates an icon for every entry in `notes`.
///
/// Creates the output directory if needed. Icons written before a failure
/// are left on disk.
///
/// # Arguments
///
/// * `notes` - Entries to render, usually [`crate::notes::NOTE_GLYPHS`]
/// * `config` - Canvas, colors and output directory
/// * `font` - Font loaded once for the whole run
///
/// # Errors
///
/// Returns the first error encountered; see [`IconError`]
pub fn generate_icons(
    notes: &[NoteGlyph],
    config: &IconConfig,
    font: &NoteFont,
) -> Result<GenerationReport> {
    fs::create_dir_all(&config.output_dir).map_err(|source| IconError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = GenerationReport::default();
    for note in notes {
        let path = write_icon(note, config, font)?;
        tracing::info!("Wrote {} ({})", path.display(), note.code_points());
        report.written.push(path);
    }

    tracing::info!(
        "Generated {} icons in {} using {}",
        report.written.len(),
        config.output_dir.display(),
        font.description()
    );
    Ok(report)
}
