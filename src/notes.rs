//! The fixed table of note glyphs.
//!
//! Each entry pairs a note-name (used as the icon's file stem) with the
//! Unicode string drawn for it. Dotted durations append a literal `.` to
//! the base symbol.

/// A note duration and the glyph string that depicts it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteGlyph {
    /// Identifier, also the output file stem (e.g. "dotted-eighth").
    pub name: &'static str,

    /// One or more code points forming the symbol.
    pub glyph: &'static str,

    /// Duration in beats, where a quarter note is one beat.
    pub beats: f32,
}

impl NoteGlyph {
    /// Creates a table entry.
    pub const fn new(name: &'static str, glyph: &'static str, beats: f32) -> Self {
        Self { name, glyph, beats }
    }

    /// Returns the glyph's code points formatted as `U+XXXX` separated by spaces.
    pub fn code_points(&self) -> String {
        self.glyph
            .chars()
            .map(|c| format!("U+{:04X}", c as u32))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Every icon the generator produces, in output order.
///
/// `sixteenth` uses MUSICAL SYMBOL SIXTEENTH NOTE so it no longer shares
/// the beamed-notes symbol with `triplet-eighth`.
pub const NOTE_GLYPHS: [NoteGlyph; 9] = [
    NoteGlyph::new("whole", "\u{1D15D}", 4.0),
    NoteGlyph::new("half", "\u{1D15E}", 2.0),
    NoteGlyph::new("dotted-half", "\u{1D15E}.", 3.0),
    NoteGlyph::new("quarter", "\u{2669}", 1.0),
    NoteGlyph::new("dotted-quarter", "\u{2669}.", 1.5),
    NoteGlyph::new("eighth", "\u{266A}", 0.5),
    NoteGlyph::new("dotted-eighth", "\u{266A}.", 0.75),
    NoteGlyph::new("triplet-eighth", "\u{266C}", 1.0 / 3.0),
    NoteGlyph::new("sixteenth", "\u{1D161}", 0.25),
];

/// Looks up a table entry by note-name.
///
/// # Arguments
///
/// * `name` - Note-name like "quarter" or "dotted-half"
///
/// # Returns
///
/// The matching entry, or None if the name is not in the table
pub fn find_note(name: &str) -> Option<&'static NoteGlyph> {
    NOTE_GLYPHS.iter().find(|note| note.name == name)
}

/// Every code point used by the table, in table order.
///
/// A font must cover all of it to render the full icon set.
pub fn glyph_text() -> String {
    NOTE_GLYPHS.iter().map(|note| note.glyph).collect()
}
