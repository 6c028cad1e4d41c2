// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for frame decomposition, projection and frame edits.
//!
//! None of these are fatal. A failed arrangement pass leaves the last good
//! display artwork in place; a refused edit leaves the frame untouched.

use super::Side;
use thiserror::Error;

/// Errors from a single arrangement pass or frame edit
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WarpError {
    #[error("outline decomposition failed: {0}")]
    Decomposition(#[from] DecompositionError),

    #[error("degenerate projection: {side:?} side has zero length")]
    DegenerateProjection { side: Side },

    #[error("invalid frame edit: {0}")]
    InvalidFrame(#[from] InvalidFrameError),

    #[error("an arrangement pass is already running")]
    ArrangementInProgress,
}

/// The frame could not be split into four sides
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecompositionError {
    #[error("frame has {count} vertices, at least 4 are needed")]
    TooFewVertices { count: usize },

    #[error("corner {corner} does not match any frame vertex")]
    CornerNotFound { corner: usize },

    #[error("walk produced {found} sides instead of 4")]
    SideCount { found: usize },

    #[error("walk matched only {matched} of 4 corners")]
    UnmatchedCorners { matched: usize },
}

/// A frame edit that was refused before any arrangement was attempted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidFrameError {
    #[error("artwork has no bounds to build a frame from")]
    EmptyArtwork,

    #[error("corner index {index} is out of range")]
    CornerIndexOutOfRange { index: usize },

    #[error("side index {index} is out of range")]
    SideIndexOutOfRange { index: usize },

    #[error("vertex index {index} is out of range")]
    VertexIndexOutOfRange { index: usize },

    #[error("corners {first} and {second} coincide")]
    CoincidentCorners { first: usize, second: usize },

    #[error("split point coincides with frame vertex {vertex}")]
    SplitAtVertex { vertex: usize },

    #[error("vertex {vertex} would land on another frame vertex")]
    VertexCollision { vertex: usize },

    #[error("frame point is not finite")]
    NonFinitePoint,
}
