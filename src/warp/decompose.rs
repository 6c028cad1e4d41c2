// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Split a closed four-corner frame into its four boundary sides.
//!
//! The walk starts at corner 0 and follows the frame in contour order.
//! Corners are consumed strictly in the order given: a side is closed each
//! time the walk reaches the next expected corner. A vertex only counts as
//! a corner when it lies within the matching tolerance, so floating-point
//! noise from dragging is absorbed without guessing.

use super::Side;
use super::error::DecompositionError;
use crate::path::{Contour, ContourNode};
use kurbo::Point;

/// The four boundary sides of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Open contours in `[top, right, bottom, left]` order, each running
    /// from its starting corner to the next one in contour order
    pub sides: [Contour; 4],

    /// For each side, the frame segment indices it was built from
    pub segments: [Vec<usize>; 4],
}

impl Decomposition {
    pub fn side(&self, side: Side) -> &Contour {
        &self.sides[side.index()]
    }

    /// Which side a frame segment belongs to
    pub fn side_of_segment(&self, segment: usize) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.segments[side.index()].contains(&segment))
    }
}

/// True when two points are equal within `tolerance`
pub fn points_match(a: Point, b: Point, tolerance: f64) -> bool {
    (a - b).length() <= tolerance
}

/// Decompose a closed frame into four sides at the given corners
pub fn decompose(
    frame: &Contour,
    corners: &[Point; 4],
    tolerance: f64,
) -> Result<Decomposition, DecompositionError> {
    let count = frame.len();
    if count < 4 {
        return Err(DecompositionError::TooFewVertices { count });
    }

    let start = frame
        .points()
        .position(|p| points_match(p, corners[0], tolerance))
        .ok_or(DecompositionError::CornerNotFound { corner: 0 })?;

    let mut sides: Vec<Contour> = Vec::with_capacity(4);
    let mut side_segments: Vec<Vec<usize>> = Vec::with_capacity(4);
    let mut nodes = vec![frame.nodes[start].clone()];
    let mut segments = Vec::new();
    // corners[0] has been consumed as the walk origin; it is sought
    // again as the final corner when the walk wraps around.
    let mut next_corner = 1;

    for step in 0..count {
        let segment = (start + step) % count;
        let end = (segment + 1) % count;
        segments.push(segment);
        nodes.push(frame.nodes[end].clone());

        if next_corner <= 4 && points_match(frame.nodes[end].point, corners[next_corner % 4], tolerance)
        {
            sides.push(open_side(std::mem::take(&mut nodes)));
            side_segments.push(std::mem::take(&mut segments));
            nodes.push(frame.nodes[end].clone());
            next_corner += 1;
        }
    }

    if next_corner <= 4 {
        // corners[0] plus every corner consumed before the walk ran out
        let matched = next_corner;
        tracing::debug!(matched, "frame walk ended before reaching every corner");
        return Err(DecompositionError::UnmatchedCorners { matched });
    }
    if !segments.is_empty() {
        // the walk reached corner 0 early and left segments over
        return Err(DecompositionError::SideCount {
            found: sides.len() + 1,
        });
    }

    let found = sides.len();
    let sides: [Contour; 4] = sides
        .try_into()
        .map_err(|_| DecompositionError::SideCount { found })?;
    let segments: [Vec<usize>; 4] = side_segments
        .try_into()
        .map_err(|_| DecompositionError::SideCount { found })?;

    Ok(Decomposition { sides, segments })
}

/// Build an open side; the outer handles belong to neighbouring sides
fn open_side(mut nodes: Vec<ContourNode>) -> Contour {
    if let Some(first) = nodes.first_mut() {
        first.handle_in = None;
    }
    if let Some(last) = nodes.last_mut() {
        last.handle_out = None;
    }
    Contour::open(nodes)
}
