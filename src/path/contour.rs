// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! A single open or closed chain of nodes

use super::node::ContourNode;
use super::segment::Segment;
use crate::model::EntityId;
use kurbo::{BezPath, Point, Rect, Shape};

/// One contour of an artwork, or one side of an outline frame
///
/// A closed contour has an implicit segment from its last node back to
/// its first; an open contour does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// Unique identifier for this contour
    pub id: EntityId,

    /// The anchors of the contour, in drawing order
    pub nodes: Vec<ContourNode>,

    /// Whether the contour is closed
    pub closed: bool,
}

impl Contour {
    /// Create a closed contour from nodes
    pub fn closed(nodes: Vec<ContourNode>) -> Self {
        Self {
            id: EntityId::next(),
            nodes,
            closed: true,
        }
    }

    /// Create an open contour from nodes
    pub fn open(nodes: Vec<ContourNode>) -> Self {
        Self {
            id: EntityId::next(),
            nodes,
            closed: false,
        }
    }

    /// Closed contour of straight segments through `points`
    pub fn polygon(points: &[Point]) -> Self {
        Self::closed(points.iter().copied().map(ContourNode::corner).collect())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Anchor positions in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|node| node.point)
    }

    /// Number of segments (closing segment included for closed contours)
    pub fn segment_count(&self) -> usize {
        match (self.nodes.len(), self.closed) {
            (0, _) | (1, _) => 0,
            (n, true) => n,
            (n, false) => n - 1,
        }
    }

    /// The segment starting at node `index`
    pub fn segment(&self, index: usize) -> Option<Segment> {
        if index >= self.segment_count() {
            return None;
        }
        let next = (index + 1) % self.nodes.len();
        Some(Segment::between(&self.nodes[index], &self.nodes[next]))
    }

    /// Iterate over all segments in contour order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.segment_count()).filter_map(move |i| self.segment(i))
    }

    /// Same contour walked backwards; node ids are kept
    pub fn reversed(&self) -> Self {
        Self {
            id: self.id,
            nodes: self.nodes.iter().rev().map(ContourNode::flipped).collect(),
            closed: self.closed,
        }
    }

    /// Convert to a kurbo BezPath for rendering and export
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        self.append_to(&mut path);
        path
    }

    /// Append this contour as a new subpath of `path`
    pub fn append_to(&self, path: &mut BezPath) {
        let Some(first) = self.nodes.first() else {
            return;
        };
        path.move_to(first.point);
        for segment in self.segments() {
            match segment {
                Segment::Line(line) => path.line_to(line.p1),
                Segment::Cubic(cubic) => path.curve_to(cubic.p1, cubic.p2, cubic.p3),
            }
        }
        if self.closed {
            path.close_path();
        }
    }

    /// Tight bounds of the drawn contour, `None` when empty
    pub fn bounding_box(&self) -> Option<Rect> {
        match self.nodes.len() {
            0 => None,
            1 => Some(Rect::from_points(self.nodes[0].point, self.nodes[0].point)),
            _ => Some(self.to_bezpath().bounding_box()),
        }
    }
}
