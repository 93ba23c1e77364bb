//! notation-icons - Generates note-duration icons from a music font.
//!
//! Renders every entry of the note glyph table into a 512x512 transparent
//! PNG under `static/icons/notes/`.
//!
//! # Usage
//!
//! ```bash
//! cargo run                          # Use a system music font
//! cargo run -- --font Bravura.otf    # Use a specific font file
//! cargo run -- --list                # Print the glyph table
//! ```
//!
//! Set `RUST_LOG=debug` for font resolution and placement details.

use notation_icons::{
    generate_icons, glyph_text, FontSource, IconConfig, NoteFont, NOTE_GLYPHS,
};

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Command-line options for the generator.
struct CliOptions {
    /// Output directory override.
    out_dir: Option<PathBuf>,
    /// Font file to use instead of the system lookup.
    font: Option<PathBuf>,
    /// Print the glyph table and exit.
    list: bool,
}

impl CliOptions {
    /// Parses command-line arguments.
    ///
    /// Supports:
    /// - `--out <dir>` or `-o <dir>`: Write icons into a different directory
    /// - `--font <path>` or `-f <path>`: Load a specific font file
    /// - `--list` or `-l`: Print the glyph table and exit
    /// - `--help` or `-h`: Print help and exit
    fn parse() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let program = args
            .first()
            .cloned()
            .unwrap_or_else(|| "notation-icons".to_string());
        let mut out_dir = None;
        let mut font = None;
        let mut list = false;
        let mut i = 1;

        while i < args.len() {
            match args[i].as_str() {
                "--out" | "-o" | "--font" | "-f" => {
                    let flag = args[i].clone();
                    i += 1;
                    let Some(value) = args.get(i) else {
                        eprintln!("Error: {} requires a path argument", flag);
                        std::process::exit(1);
                    };
                    if flag == "--out" || flag == "-o" {
                        out_dir = Some(PathBuf::from(value));
                    } else {
                        font = Some(PathBuf::from(value));
                    }
                }
                "--list" | "-l" => list = true,
                "--help" | "-h" => {
                    eprintln!("notation-icons - Render note glyphs into PNG icons");
                    eprintln!();
                    eprintln!("Usage: {} [OPTIONS]", program);
                    eprintln!();
                    eprintln!("Options:");
                    eprintln!("  -o, --out DIR      Output directory (default: static/icons/notes)");
                    eprintln!("  -f, --font PATH    Font file to render with (default: system lookup)");
                    eprintln!("  -l, --list         Print the glyph table and exit");
                    eprintln!("  -h, --help         Print this help message");
                    std::process::exit(0);
                }
                other => {
                    eprintln!("Unknown option: {}", other);
                    eprintln!("Use --help for usage information");
                    std::process::exit(1);
                }
            }
            i += 1;
        }

        Self {
            out_dir,
            font,
            list,
        }
    }
}

/// Prints the glyph table to stdout.
fn print_table() {
    println!("{:<16} {:>6}  {:<6} CODE POINTS", "NAME", "BEATS", "GLYPH");
    for note in &NOTE_GLYPHS {
        println!(
            "{:<16} {:>6.3}  {:<6} {}",
            note.name,
            note.beats,
            note.glyph,
            note.code_points()
        );
    }
}

/// Main entry point.
fn main() -> Result<()> {
    let cli = CliOptions::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        print_table();
        return Ok(());
    }

    let config = match cli.out_dir {
        Some(dir) => IconConfig::with_output_dir(dir),
        None => IconConfig::default(),
    };
    let source = match cli.font {
        Some(path) => FontSource::File(path),
        None => FontSource::default(),
    };

    let font = NoteFont::load(&source, &glyph_text()).context("Failed to load font")?;
    let report = generate_icons(&NOTE_GLYPHS, &config, &font).with_context(|| {
        format!(
            "Icon generation failed (output directory: {})",
            config.output_dir.display()
        )
    })?;

    println!(
        "Wrote {} icons to {}",
        report.written.len(),
        config.output_dir.display()
    );
    Ok(())
}
