// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! JSON edit scripts for the command-line tool.
//!
//! A script names the source artwork as SVG path data and lists the frame
//! edits to replay, in the order an interactive session would deliver them:
//!
//! ```json
//! {
//!   "artwork": "M0 0 L10 0 L10 10 L0 10 Z",
//!   "show_frame": true,
//!   "edits": [
//!     { "move_corner": { "index": 2, "to": [20, 10] } },
//!     { "insert_midpoint": { "side": "top", "at": [5, 0] } },
//!     "reset"
//!   ]
//! }
//! ```

use crate::editing::StretchyPath;
use crate::path::CompositePath;
use crate::settings::StretchySettings;
use crate::warp::{Side, WarpError};
use anyhow::{Context, Result};
use kurbo::Point;
use serde::Deserialize;
use std::path::Path;

/// A replayable editing session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditScript {
    /// SVG path data for the source artwork
    pub artwork: String,

    /// Draw the frame overlay in the output
    #[serde(default)]
    pub show_frame: bool,

    #[serde(default)]
    pub edits: Vec<Edit>,
}

/// One frame edit
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edit {
    MoveCorner { index: usize, to: [f64; 2] },
    MoveVertex { index: usize, to: [f64; 2] },
    InsertMidpoint { side: Side, at: [f64; 2] },
    Hover { hovering: bool },
    Reset,
}

/// How many edits went through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayReport {
    pub applied: usize,
    pub failed: usize,
}

impl EditScript {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse edit script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read edit script {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Build the stretchy path and replay every edit
    ///
    /// Failing edits are logged and skipped, as an interactive session
    /// would; only an unusable artwork aborts the replay.
    pub fn replay(&self, settings: StretchySettings) -> Result<(StretchyPath, ReplayReport)> {
        let artwork = CompositePath::from_svg(&self.artwork)
            .map_err(|e| anyhow::anyhow!("Invalid artwork path data: {}", e))?;
        let mut path =
            StretchyPath::new(artwork, settings).context("Failed to build stretchy path")?;

        let mut report = ReplayReport::default();
        for (step, edit) in self.edits.iter().enumerate() {
            match apply(&mut path, edit) {
                Ok(()) => report.applied += 1,
                Err(error) => {
                    tracing::warn!("Edit {} ({:?}) failed: {}", step, edit, error);
                    report.failed += 1;
                }
            }
        }
        tracing::info!(
            "Replayed {} edits ({} failed)",
            self.edits.len(),
            report.failed
        );
        Ok((path, report))
    }
}

fn apply(path: &mut StretchyPath, edit: &Edit) -> Result<(), WarpError> {
    match *edit {
        Edit::MoveCorner { index, to } => path.on_corner_moved(index, to_point(to)),
        Edit::MoveVertex { index, to } => path.on_control_point_moved(index, to_point(to)),
        Edit::InsertMidpoint { side, at } => path
            .on_midpoint_inserted(side.index(), to_point(at))
            .map(|_| ()),
        Edit::Hover { hovering } => {
            path.on_hover_changed(hovering);
            Ok(())
        }
        Edit::Reset => path.reset_frame(),
    }
}

fn to_point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}
