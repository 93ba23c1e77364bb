//! Icon rendering.
//!
//! - `canvas`: blank canvases, glyph measurement, centering and drawing
//! - `generator`: per-note rendering and the batch run that writes PNGs

pub mod canvas;
pub mod generator;

pub use generator::{generate_icons, render_icon, write_icon, GenerationReport};
