// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Colors for artwork and frame affordances
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

pub use peniko::Color;

use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Deserializer, Serializer};

/// Serde adapter storing a `Color` as a CSS color string
///
/// Anything the CSS color parser accepts is read (`#4cafff`, `#ff000080`,
/// `rgb(...)`, named colors). Colors are written back as `#rrggbbaa`.
pub mod css {
    use super::*;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        let rgba = color.to_rgba8();
        serializer.serialize_str(&format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            rgba.r, rgba.g, rgba.b, rgba.a
        ))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_color(&text)
            .map(|color| color.to_alpha_color::<Srgb>())
            .map_err(|e| serde::de::Error::custom(format!("invalid color `{}`: {}", text, e)))
    }
}

// ============================================================================
// BASE COLORS -- Generic colors, a dark to light gradient
// ============================================================================
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_J: Color = Color::from_rgb8(0xa0, 0xa0, 0xa0);

// ============================================================================
// ARTWORK
// ============================================================================
const ARTWORK_FILL: Color = BASE_B;

// ============================================================================
// FRAME OUTLINE AND HANDLES
// ============================================================================
const FRAME_OUTLINE: Color = BASE_J;
const CORNER_HANDLE: Color = Color::from_rgb8(0x4c, 0xaf, 0xff);
const MIDPOINT_HANDLE: Color = Color::from_rgba8(0x90, 0xee, 0x90, 0xc0);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Artwork colors
pub mod artwork {
    use super::*;
    pub const FILL: Color = ARTWORK_FILL;
}

/// Frame overlay colors
pub mod frame {
    use super::*;
    pub const OUTLINE: Color = FRAME_OUTLINE;
    pub const CORNER: Color = CORNER_HANDLE;
    pub const MIDPOINT: Color = MIDPOINT_HANDLE;
}
