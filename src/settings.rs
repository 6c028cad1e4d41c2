// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Settings and configuration constants.
//!
//! The constants below are the defaults. A `StretchySettings` value built
//! from them (or loaded from TOML) is handed to each `StretchyPath` and to
//! the SVG writer explicitly; nothing reads colors or tolerances from
//! global state.

use crate::theme::{self, Color};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// FRAME SETTINGS
// ============================================================================
/// Distance under which a frame vertex counts as a corner (design units)
///
/// Large enough to absorb float noise from dragging, small enough that an
/// inserted midpoint is never mistaken for a corner.
const CORNER_TOLERANCE: f64 = 1e-4;

/// Accuracy passed to kurbo arc-length queries
const ARCLEN_ACCURACY: f64 = 1e-6;

// ============================================================================
// AFFORDANCE SETTINGS
// ============================================================================
/// Whether hovering the artwork reveals the frame handles
const AFFORDANCES_ON_HOVER: bool = true;

/// Corner handle radius (design units)
const CORNER_HANDLE_RADIUS: f64 = 4.0;

/// Midpoint handle radius (design units)
const MIDPOINT_HANDLE_RADIUS: f64 = 3.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Frame matching and sampling defaults
pub mod frame {
    pub const CORNER_TOLERANCE: f64 = super::CORNER_TOLERANCE;
    pub const ARCLEN_ACCURACY: f64 = super::ARCLEN_ACCURACY;
}

/// Edit affordance defaults
pub mod affordances {
    pub const ON_HOVER: bool = super::AFFORDANCES_ON_HOVER;
    pub const CORNER_RADIUS: f64 = super::CORNER_HANDLE_RADIUS;
    pub const MIDPOINT_RADIUS: f64 = super::MIDPOINT_HANDLE_RADIUS;
}

/// Everything a `StretchyPath` and its renderer need to know
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StretchySettings {
    pub frame: FrameSettings,
    pub affordances: AffordanceSettings,
    pub style: StyleSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    pub corner_tolerance: f64,
    pub arclen_accuracy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordanceSettings {
    pub visible_on_hover: bool,
    pub corner_radius: f64,
    pub midpoint_radius: f64,
}

/// Colors used when drawing artwork and the frame overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    #[serde(with = "theme::css")]
    pub artwork_color: Color,
    #[serde(with = "theme::css")]
    pub outline_color: Color,
    #[serde(with = "theme::css")]
    pub corner_color: Color,
    #[serde(with = "theme::css")]
    pub midpoint_color: Color,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            corner_tolerance: frame::CORNER_TOLERANCE,
            arclen_accuracy: frame::ARCLEN_ACCURACY,
        }
    }
}

impl Default for AffordanceSettings {
    fn default() -> Self {
        Self {
            visible_on_hover: affordances::ON_HOVER,
            corner_radius: affordances::CORNER_RADIUS,
            midpoint_radius: affordances::MIDPOINT_RADIUS,
        }
    }
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            artwork_color: theme::artwork::FILL,
            outline_color: theme::frame::OUTLINE,
            corner_color: theme::frame::CORNER,
            midpoint_color: theme::frame::MIDPOINT,
        }
    }
}

impl StretchySettings {
    /// Parse settings from TOML; missing keys fall back to defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text).context("Failed to parse settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = Self::from_toml_str(&text)?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !(self.frame.corner_tolerance > 0.0) {
            anyhow::bail!(
                "frame.corner_tolerance must be positive, got {}",
                self.frame.corner_tolerance
            );
        }
        if !(self.frame.arclen_accuracy > 0.0) {
            anyhow::bail!(
                "frame.arclen_accuracy must be positive, got {}",
                self.frame.arclen_accuracy
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let settings = StretchySettings::from_toml_str("").unwrap();
        assert_eq!(settings, StretchySettings::default());
        assert_eq!(settings.frame.corner_tolerance, 1e-4);
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let settings = StretchySettings::from_toml_str(
            r##"
            [frame]
            corner_tolerance = 0.01

            [style]
            outline_color = "#ff000080"
            "##,
        )
        .unwrap();
        assert_eq!(settings.frame.corner_tolerance, 0.01);
        assert_eq!(settings.frame.arclen_accuracy, frame::ARCLEN_ACCURACY);
        assert_eq!(
            settings.style.outline_color.to_rgba8(),
            Color::from_rgba8(0xff, 0, 0, 0x80).to_rgba8()
        );
        assert_eq!(settings.style.corner_color, theme::frame::CORNER);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(StretchySettings::from_toml_str("[frame]\ncorner_tolerance = 0.0").is_err());
        assert!(StretchySettings::from_toml_str("[style]\noutline_color = \"reddish\"").is_err());
    }

    #[test]
    fn settings_survive_toml_round_trip() {
        let defaults = StretchySettings::default();
        let text = toml::to_string(&defaults).unwrap();
        let loaded = StretchySettings::from_toml_str(&text).unwrap();
        assert_eq!(loaded.frame, defaults.frame);
        assert_eq!(loaded.affordances, defaults.affordances);
        assert_eq!(
            loaded.style.midpoint_color.to_rgba8(),
            defaults.style.midpoint_color.to_rgba8()
        );
    }
}
