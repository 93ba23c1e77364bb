//! notation-icons - Renders musical note glyphs into transparent PNG icons.
//!
//! This library provides the glyph table, font loading and the icon
//! generator used by the `notation-icons` binary.

pub mod config;
pub mod error;
pub mod font;
pub mod icons;
pub mod notes;

// Re-export commonly used types
pub use config::IconConfig;
pub use error::IconError;
pub use font::{FontSource, NoteFont};
pub use icons::{generate_icons, render_icon, GenerationReport};
pub use notes::{find_note, glyph_text, NoteGlyph, NOTE_GLYPHS};
