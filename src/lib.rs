// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Wordwarp: stretch vector artwork by dragging a four-cornered frame

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

pub mod editing;
pub mod export;
pub mod model;
pub mod path;
pub mod script;
pub mod settings;
pub mod theme;
pub mod warp;

pub use editing::{EditAffordances, OutlineFrame, StretchyEvent, StretchyPath};
pub use path::{CompositePath, Contour, ContourNode};
pub use settings::StretchySettings;
pub use warp::{ArcLengthCurve, SandwichProjector, Side, WarpError};

/// Entry point for the wordwarp command-line tool
///
/// Usage: `wordwarp <script.json> [settings.toml] [--frame]`
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wordwarp=info".parse()?),
        )
        .init();

    let args = CommandLine::parse();

    let settings = match &args.settings {
        Some(path) => StretchySettings::load(path)?,
        None => StretchySettings::default(),
    };
    let script = script::EditScript::load(&args.script)?;
    let (path, report) = script
        .replay(settings)
        .with_context(|| format!("Failed to replay {}", args.script.display()))?;
    if report.failed > 0 {
        tracing::warn!("{} of {} edits were refused", report.failed, script.edits.len());
    }

    print!(
        "{}",
        export::svg_document(&path, args.show_frame || script.show_frame)
    );
    Ok(())
}

/// Wordwarp command-line arguments
///
/// Examples:
///   wordwarp edit.json                  # Replay edits, print the SVG
///   wordwarp edit.json warp.toml        # Use custom settings
///   wordwarp edit.json --frame          # Also draw the frame overlay
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "wordwarp",
    version,
    about = "Stretch vector artwork by dragging a four-cornered frame"
)]
struct CommandLine {
    /// JSON edit script naming the artwork and the edits to replay
    script: PathBuf,

    /// TOML settings file; defaults are used when omitted
    settings: Option<PathBuf>,

    /// Draw the frame outline and visible handles on top of the artwork
    #[arg(long = "frame")]
    show_frame: bool,
}
