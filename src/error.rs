//! Error types for icon generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating note icons.
///
/// Every variant is fatal for the run: the glyph set is fixed, so a
/// missing font or glyph points at an environment problem the caller
/// has to fix.
#[derive(Debug, Error)]
pub enum IconError {
    /// The font could not be located or parsed.
    #[error("failed to load font from {source_desc}: {reason}")]
    FontLoad {
        /// What was tried (a path or a list of family names).
        source_desc: String,
        /// Why it failed.
        reason: String,
    },

    /// The font has no glyph for a code point in the note's glyph string.
    #[error("font has no glyph for {ch:?} ({}) needed by note '{note}'", .ch.escape_unicode())]
    MissingGlyph { note: String, ch: char },

    /// The glyph string laid out to no visible pixels.
    #[error("glyph for note '{note}' rendered no visible pixels")]
    EmptyGlyph { note: String },

    /// The output directory could not be created.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG could not be encoded or written.
    #[error("failed to write icon {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;
