// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable outline frame: a closed contour with four tagged corners

use crate::path::{Contour, ContourNode, Segment};
use crate::warp::{
    ArcLengthCurve, Decomposition, DecompositionError, InvalidFrameError, Side, WarpError,
    decompose, points_match,
};
use kurbo::{ParamCurveNearest, Point, Rect};

/// A closed contour with four corners in contour order
///
/// Corners are positions, not indices, so vertex insertions never
/// invalidate them. Each corner is expected to coincide with a frame
/// vertex; decomposition reports the frame as broken when one does not.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineFrame {
    contour: Contour,
    corners: [Point; 4],
}

impl OutlineFrame {
    /// The axis-aligned frame around `rect`, corners clockwise from the
    /// top left in y-down coordinates
    pub fn from_rect(rect: Rect, tolerance: f64) -> Result<Self, InvalidFrameError> {
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        Self::from_parts(Contour::polygon(&corners), corners, tolerance)
    }

    /// Assemble a frame from a contour and corner positions
    ///
    /// Only corner distinctness is checked here. Whether the corners can be
    /// found on the contour is up to decomposition.
    pub fn from_parts(
        mut contour: Contour,
        corners: [Point; 4],
        tolerance: f64,
    ) -> Result<Self, InvalidFrameError> {
        for point in contour.points().chain(corners) {
            check_finite(point)?;
        }
        check_distinct(&corners, tolerance)?;
        contour.closed = true;
        Ok(Self { contour, corners })
    }

    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    pub fn vertex_count(&self) -> usize {
        self.contour.len()
    }

    /// Split into the four boundary sides
    pub fn decompose(&self, tolerance: f64) -> Result<Decomposition, DecompositionError> {
        decompose(&self.contour, &self.corners, tolerance)
    }

    /// Index of the vertex that realizes corner `corner`
    pub fn corner_vertex(&self, corner: usize, tolerance: f64) -> Option<usize> {
        let target = *self.corners.get(corner)?;
        self.contour
            .points()
            .position(|p| points_match(p, target, tolerance))
    }

    /// Which corner, if any, vertex `vertex` realizes
    pub fn corner_at_vertex(&self, vertex: usize, tolerance: f64) -> Option<usize> {
        let point = self.contour.nodes.get(vertex)?.point;
        self.corners
            .iter()
            .position(|&corner| points_match(point, corner, tolerance))
    }

    /// Move corner `index` and the vertex that realizes it
    pub fn move_corner(
        &mut self,
        index: usize,
        to: Point,
        tolerance: f64,
    ) -> Result<(), InvalidFrameError> {
        if index >= 4 {
            return Err(InvalidFrameError::CornerIndexOutOfRange { index });
        }
        check_finite(to)?;
        let mut corners = self.corners;
        corners[index] = to;
        check_distinct(&corners, tolerance)?;

        let vertex = self.corner_vertex(index, tolerance);
        if let Some(other) = self.collision(to, vertex, tolerance) {
            return Err(InvalidFrameError::VertexCollision { vertex: other });
        }
        if let Some(vertex) = vertex {
            self.contour.nodes[vertex].point = to;
        }
        self.corners = corners;
        Ok(())
    }

    /// Move a vertex that is not a corner
    pub fn move_vertex(
        &mut self,
        vertex: usize,
        to: Point,
        tolerance: f64,
    ) -> Result<(), InvalidFrameError> {
        if vertex >= self.contour.len() {
            return Err(InvalidFrameError::VertexIndexOutOfRange { index: vertex });
        }
        check_finite(to)?;
        if let Some(other) = self.collision(to, Some(vertex), tolerance) {
            return Err(InvalidFrameError::VertexCollision { vertex: other });
        }
        if let Some(corner) = self
            .corners
            .iter()
            .position(|&c| points_match(to, c, tolerance))
        {
            return Err(InvalidFrameError::VertexCollision {
                vertex: self.corner_vertex(corner, tolerance).unwrap_or(vertex),
            });
        }
        self.contour.nodes[vertex].point = to;
        Ok(())
    }

    /// Insert a vertex on `side` at the position nearest to `near`
    ///
    /// Curved segments are subdivided so the frame's shape does not change.
    /// Returns the index of the new vertex.
    pub fn insert_on_side(
        &mut self,
        side: Side,
        near: Point,
        tolerance: f64,
        accuracy: f64,
    ) -> Result<usize, WarpError> {
        check_finite(near)?;
        let parts = self.decompose(tolerance)?;

        let mut best: Option<(usize, f64, f64)> = None;
        for &index in &parts.segments[side.index()] {
            let Some(segment) = self.contour.segment(index) else {
                continue;
            };
            let nearest = segment.to_path_seg().nearest(near, accuracy);
            if best.is_none_or(|(_, _, d)| nearest.distance_sq < d) {
                best = Some((index, nearest.t, nearest.distance_sq));
            }
        }
        let Some((index, t, _)) = best else {
            return Err(DecompositionError::SideCount { found: 0 }.into());
        };

        let Some(segment) = self.contour.segment(index) else {
            return Err(InvalidFrameError::VertexIndexOutOfRange { index }.into());
        };
        let split = segment.eval(t);
        if let Some(vertex) = self
            .contour
            .points()
            .position(|p| points_match(p, split, tolerance))
        {
            return Err(InvalidFrameError::SplitAtVertex { vertex }.into());
        }

        let end = (index + 1) % self.contour.len();
        let node = match segment.split(t) {
            (Segment::Cubic(before), Segment::Cubic(after)) => {
                self.contour.nodes[index].handle_out = Some(before.p1 - before.p0);
                self.contour.nodes[end].handle_in = Some(after.p2 - after.p3);
                ContourNode::with_handles(
                    split,
                    Some(before.p2 - before.p3),
                    Some(after.p1 - after.p0),
                )
            }
            _ => ContourNode::corner(split),
        };
        self.contour.nodes.insert(index + 1, node);

        tracing::debug!(
            ?side,
            segment = index,
            t,
            "inserted frame vertex at ({:.3}, {:.3})",
            split.x,
            split.y
        );
        Ok(index + 1)
    }

    /// Midpoint of every frame segment by arc length
    pub fn segment_midpoints(&self, accuracy: f64) -> Vec<Point> {
        self.contour
            .segments()
            .map(|segment| {
                let curve = ArcLengthCurve::new(vec![segment], accuracy);
                curve.point_at(curve.length() / 2.0)
            })
            .collect()
    }

    /// A vertex other than `except` sitting on `point`
    fn collision(&self, point: Point, except: Option<usize>, tolerance: f64) -> Option<usize> {
        self.contour
            .points()
            .enumerate()
            .find(|&(i, p)| Some(i) != except && points_match(p, point, tolerance))
            .map(|(i, _)| i)
    }
}

fn check_finite(point: Point) -> Result<(), InvalidFrameError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(InvalidFrameError::NonFinitePoint)
    }
}

fn check_distinct(corners: &[Point; 4], tolerance: f64) -> Result<(), InvalidFrameError> {
    for first in 0..4 {
        for second in first + 1..4 {
            if points_match(corners[first], corners[second], tolerance) {
                return Err(InvalidFrameError::CoincidentCorners { first, second });
            }
        }
    }
    Ok(())
}
