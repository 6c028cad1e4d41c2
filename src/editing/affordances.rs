// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Corner and midpoint handles shown while the artwork is hovered.
//!
//! Affordances are rebuilt from the frame after every edit. A midpoint
//! handle is identified by the two frame nodes its segment joins, so once a
//! vertex is inserted on a segment, that segment's handle is gone and two
//! new ones take its place.

use super::frame::OutlineFrame;
use crate::model::EntityId;
use crate::warp::{Decomposition, Side};
use kurbo::Point;

/// Handle for one of the four corners
#[derive(Debug, Clone, PartialEq)]
pub struct CornerHandle {
    pub corner: usize,
    /// Frame vertex realizing the corner, if there is one
    pub vertex: Option<usize>,
    pub point: Point,
}

/// Handle at the arc-length midpoint of a frame segment
#[derive(Debug, Clone, PartialEq)]
pub struct MidpointHandle {
    /// Node the segment starts at
    pub start: EntityId,
    /// Node the segment ends at
    pub end: EntityId,
    /// Frame segment index
    pub segment: usize,
    /// Side the segment belongs to; `None` while the frame cannot be
    /// decomposed
    pub side: Option<Side>,
    pub point: Point,
}

/// All edit handles of a frame plus their visibility
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditAffordances {
    pub visible: bool,
    pub corners: Vec<CornerHandle>,
    pub midpoints: Vec<MidpointHandle>,
}

impl EditAffordances {
    /// Build handles for `frame`
    pub fn for_frame(
        frame: &OutlineFrame,
        parts: Option<&Decomposition>,
        tolerance: f64,
        accuracy: f64,
        visible: bool,
    ) -> Self {
        let corners = frame
            .corners()
            .iter()
            .enumerate()
            .map(|(corner, &point)| CornerHandle {
                corner,
                vertex: frame.corner_vertex(corner, tolerance),
                point,
            })
            .collect();

        let nodes = &frame.contour().nodes;
        let midpoints = frame
            .segment_midpoints(accuracy)
            .into_iter()
            .enumerate()
            .map(|(segment, point)| MidpointHandle {
                start: nodes[segment].id,
                end: nodes[(segment + 1) % nodes.len()].id,
                segment,
                side: parts.and_then(|p| p.side_of_segment(segment)),
                point,
            })
            .collect();

        Self {
            visible,
            corners,
            midpoints,
        }
    }

    /// Midpoint handles belonging to `side`
    pub fn midpoints_on(&self, side: Side) -> impl Iterator<Item = &MidpointHandle> {
        self.midpoints
            .iter()
            .filter(move |handle| handle.side == Some(side))
    }

    /// Look up a midpoint handle by the nodes its segment joins
    pub fn midpoint_between(&self, start: EntityId, end: EntityId) -> Option<&MidpointHandle> {
        self.midpoints
            .iter()
            .find(|handle| handle.start == start && handle.end == end)
    }
}
