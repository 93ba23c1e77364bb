//! Font resolution and loading.
//!
//! The font is located once per run, either from an explicit file or by
//! asking the system font database for the first installed family in a
//! fallback list, and then parsed with fontdue.

use crate::error::{IconError, Result};
use fontdue::{Font, FontSettings};
use std::fmt;
use std::path::PathBuf;

/// Families tried, in order, when no font file is given.
/// Listed music-symbol fonts first; Arial and DejaVu carry only some of them,
/// so a family is only taken if it covers the requested glyphs.
pub const DEFAULT_FAMILIES: [&str; 6] = [
    "Noto Music",
    "Symbola",
    "Bravura Text",
    "DejaVu Sans",
    "FreeSerif",
    "Arial",
];

/// Where the font comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk (face 0 of a collection).
    File(PathBuf),
    /// The first installed family from the list.
    System(Vec<String>),
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::System(DEFAULT_FAMILIES.iter().map(|f| f.to_string()).collect())
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => write!(f, "file {}", path.display()),
            FontSource::System(families) => {
                write!(f, "system families [{}]", families.join(", "))
            }
        }
    }
}

/// A parsed font, shared read-only by every render in a run.
pub struct NoteFont {
    font: Font,
    description: String,
}

impl fmt::Debug for NoteFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteFont")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl NoteFont {
    /// Locates and parses a font.
    ///
    /// # Arguments
    ///
    /// * `source` - Font file or system family list
    /// * `required` - Text the font must be able to draw; system families
    ///   missing any of its code points are skipped
    ///
    /// # Errors
    ///
    /// Returns `IconError::FontLoad` if the file cannot be read, the bytes
    /// are not a font, or no installed system family covers `required`.
    pub fn load(source: &FontSource, required: &str) -> Result<Self> {
        match source {
            FontSource::File(path) => {
                let data = std::fs::read(path).map_err(|e| IconError::FontLoad {
                    source_desc: source.to_string(),
                    reason: e.to_string(),
                })?;
                Self::from_bytes(&data, 0, path.display().to_string())
            }
            FontSource::System(families) => Self::load_system(families, required, source),
        }
    }

    /// Parses font bytes directly.
    ///
    /// # Arguments
    ///
    /// * `data` - Raw TrueType/OpenType (or collection) data
    /// * `collection_index` - Face index within a collection, 0 otherwise
    /// * `description` - Human-readable origin, used in logs and errors
    pub fn from_bytes(
        data: &[u8],
        collection_index: u32,
        description: impl Into<String>,
    ) -> Result<Self> {
        let description = description.into();
        let settings = FontSettings {
            collection_index,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|reason| IconError::FontLoad {
            source_desc: description.clone(),
            reason: reason.to_string(),
        })?;
        tracing::debug!(
            "Parsed font {} ({} glyphs)",
            description,
            font.glyph_count()
        );
        Ok(Self { font, description })
    }

    fn load_system(families: &[String], required: &str, source: &FontSource) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!("System font database holds {} faces", db.len());
        Self::load_from_db(&db, families, required)
            .ok_or_else(|| IconError::FontLoad {
                source_desc: source.to_string(),
                reason: "no installed family covers every note glyph".to_string(),
            })
    }

    /// Returns the first family in `families` that parses and covers `required`.
    fn load_from_db(db: &fontdb::Database, families: &[String], required: &str) -> Option<Self> {
        for family in families {
            let query = fontdb::Query {
                families: &[fontdb::Family::Name(family.as_str())],
                ..fontdb::Query::default()
            };
            let Some(id) = db.query(&query) else {
                tracing::warn!("Font family '{}' is not installed, trying next", family);
                continue;
            };
            let loaded = db.with_face_data(id, |data, index| {
                Self::from_bytes(data, index, family.clone())
            });
            match loaded {
                Some(Ok(font)) => match font.first_missing(required) {
                    None => {
                        tracing::info!("Using system font '{}'", family);
                        return Some(font);
                    }
                    Some(ch) => tracing::warn!(
                        "Font family '{}' has no glyph for {:?} ({}), trying next",
                        family,
                        ch,
                        ch.escape_unicode()
                    ),
                },
                Some(Err(e)) => tracing::warn!("Skipping font family '{}': {}", family, e),
                None => tracing::warn!("Font data for '{}' is unavailable", family),
            }
        }
        None
    }

    /// Returns true if the font maps `c` to a real glyph (not .notdef).
    pub fn has_char(&self, c: char) -> bool {
        self.font.lookup_glyph_index(c) != 0
    }

    /// Returns the first code point of `text` the font cannot draw.
    pub fn first_missing(&self, text: &str) -> Option<char> {
        text.chars().find(|&c| !self.has_char(c))
    }

    /// Where the font was loaded from.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The underlying fontdue font.
    pub fn inner(&self) -> &Font {
        &self.font
    }
}

/// Finds any installed face that can draw every code point of `text`.
/// Tests use it to avoid hard-coding a font file.
#[cfg(test)]
pub(crate) fn system_font_covering(text: &str) -> Option<NoteFont> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let ids: Vec<_> = db.faces().map(|face| face.id).collect();
    ids.into_iter().find_map(|id| {
        db.with_face_data(id, |data, index| NoteFont::from_bytes(data, index, "test font"))
            .and_then(|loaded| loaded.ok())
            .filter(|font| font.first_missing(text).is_none())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_font_load_error() {
        let source = FontSource::File(PathBuf::from("/nonexistent/dir/NoSuchFont.ttf"));
        let err = NoteFont::load(&source, "").unwrap_err();
        assert!(matches!(err, IconError::FontLoad { .. }));
        assert!(err.to_string().contains("NoSuchFont.ttf"));
    }

    #[test]
    fn test_garbage_bytes_are_font_load_error() {
        let err = NoteFont::from_bytes(b"definitely not a font", 0, "garbage").unwrap_err();
        match err {
            IconError::FontLoad { source_desc, .. } => assert_eq!(source_desc, "garbage"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_file_is_font_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"\0\x01\0\0garbage").unwrap();
        let err = NoteFont::load(&FontSource::File(path), "").unwrap_err();
        assert!(matches!(err, IconError::FontLoad { .. }));
    }

    #[test]
    fn test_unknown_family_is_font_load_error() {
        let source = FontSource::System(vec!["No Such Family 7f3a9c".to_string()]);
        let err = NoteFont::load(&source, "").unwrap_err();
        assert!(matches!(err, IconError::FontLoad { .. }));
        assert!(err.to_string().contains("No Such Family 7f3a9c"));
    }

    #[test]
    fn test_default_source_lists_families() {
        match FontSource::default() {
            FontSource::System(families) => {
                assert_eq!(families.len(), DEFAULT_FAMILIES.len());
                assert_eq!(families[0], "Noto Music");
            }
            other => panic!("unexpected default source: {other:?}"),
        }
    }

    #[test]
    fn test_coverage_checks() {
        let Some(font) = system_font_covering("\u{2669}") else {
            eprintln!("skipping: no installed font covers U+2669");
            return;
        };
        assert!(font.has_char('\u{2669}'));
        assert_eq!(font.first_missing("\u{2669}"), None);
        // Plane 16 private use is not mapped by system fonts.
        assert_eq!(font.first_missing("\u{2669}\u{10FFFD}"), Some('\u{10FFFD}'));
    }

    #[test]
    fn test_non_covering_families_are_skipped() {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let mut families: Vec<String> = db
            .faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect();
        families.sort();
        families.dedup();
        if families.is_empty() {
            eprintln!("skipping: no system fonts installed");
            return;
        }
        let source = FontSource::System(families);

        // Some installed family loads when nothing is required...
        let font = NoteFont::load(&source, "").unwrap();
        assert!(!font.description().is_empty());

        // ...but every one of them is rejected when a code point no font maps is required.
        let err = NoteFont::load(&source, "\u{10FFFD}").unwrap_err();
        match err {
            IconError::FontLoad { reason, .. } => assert!(reason.contains("covers")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_first_covering_family_wins() {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        let mut families: Vec<String> = db
            .faces()
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect();
        families.sort();
        families.dedup();

        let loads = |family: &String, required: &str| {
            NoteFont::load_from_db(&db, std::slice::from_ref(family), required).is_some()
        };
        // An installed family that parses but lacks U+2669, and one that has it.
        let non_covering = families
            .iter()
            .find(|f| loads(*f, "") && !loads(*f, "\u{2669}"));
        let covering = families.iter().find(|f| loads(*f, "\u{2669}"));
        let (Some(non_covering), Some(covering)) = (non_covering, covering) else {
            eprintln!("skipping: need one family with U+2669 and one without");
            return;
        };

        let listed = vec![non_covering.clone(), covering.clone()];
        let font = NoteFont::load_from_db(&db, &listed, "\u{2669}").unwrap();
        assert_eq!(font.description(), covering.as_str());
        assert_eq!(font.first_missing("\u{2669}"), None);
    }
}
