// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! The projection core: warp artwork to follow a four-sided frame.
//!
//! One arrangement pass runs `decompose` (frame to four sides), builds a
//! `SandwichProjector` from the top and bottom sides, wraps it in a
//! `FrameWarp` and pushes the source artwork through `transform_composite`.

pub mod arclen;
pub mod decompose;
pub mod error;
pub mod sandwich;
pub mod transform;

pub use arclen::ArcLengthCurve;
pub use decompose::{Decomposition, decompose, points_match};
pub use error::{DecompositionError, InvalidFrameError, WarpError};
pub use sandwich::SandwichProjector;
pub use transform::{FrameWarp, PointMapping, transform_composite, transform_contour};

use serde::{Deserialize, Serialize};

/// One of the four boundary sides of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in decomposition order
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Side> {
        Side::ALL.get(index).copied()
    }
}
