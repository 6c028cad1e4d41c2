// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Apply a point mapping to whole artworks.
//!
//! Anchors go through `map_point`. Handles are not moved as free points:
//! each relative handle is pushed through the mapping's local derivative at
//! its anchor, so tangent directions and handle proportions follow the
//! warp and curves stay smooth where they were smooth.

use super::sandwich::SandwichProjector;
use crate::path::{CompositePath, Contour, ContourNode};
use kurbo::{Point, Rect, Vec2};

/// Step used for the finite-difference tangent approximation
const DIFF_STEP: f64 = 1e-4;

/// A 2D point mapping that can also carry tangent vectors
pub trait PointMapping {
    /// Where `p` lands
    fn map_point(&self, p: Point) -> Point;

    /// Where a vector attached at `at` lands
    ///
    /// Defaults to a central difference of `map_point` along `v`.
    fn map_vector(&self, at: Point, v: Vec2) -> Vec2 {
        let ahead = self.map_point(at + v * DIFF_STEP);
        let behind = self.map_point(at - v * DIFF_STEP);
        (ahead - behind) / (2.0 * DIFF_STEP)
    }
}

impl<F: Fn(Point) -> Point> PointMapping for F {
    fn map_point(&self, p: Point) -> Point {
        self(p)
    }
}

/// Maps artwork inside `bounds` onto the region of a warped frame
///
/// Points are normalized against the fixed source bounds, then projected.
/// Handles use the analytic Jacobian of the projection.
#[derive(Debug, Clone)]
pub struct FrameWarp {
    bounds: Rect,
    projector: SandwichProjector,
}

impl FrameWarp {
    pub fn new(bounds: Rect, projector: SandwichProjector) -> Self {
        Self { bounds, projector }
    }

    /// Unit-square coordinates of `p` relative to the source bounds
    ///
    /// A zero-sized axis maps to 0.
    pub fn normalize(&self, p: Point) -> (f64, f64) {
        let width = self.bounds.width();
        let height = self.bounds.height();
        let u = if width > 0.0 { (p.x - self.bounds.x0) / width } else { 0.0 };
        let v = if height > 0.0 { (p.y - self.bounds.y0) / height } else { 0.0 };
        (u, v)
    }
}

impl PointMapping for FrameWarp {
    fn map_point(&self, p: Point) -> Point {
        let (u, v) = self.normalize(p);
        self.projector.project(u, v)
    }

    fn map_vector(&self, at: Point, vector: Vec2) -> Vec2 {
        let (u, v) = self.normalize(at);
        let (du, dv) = self.projector.partials(u, v);
        let width = self.bounds.width();
        let height = self.bounds.height();
        let mut mapped = Vec2::ZERO;
        if width > 0.0 {
            mapped += du * (vector.x / width);
        }
        if height > 0.0 {
            mapped += dv * (vector.y / height);
        }
        mapped
    }
}

/// Map one node: anchor through the mapping, handles through its derivative
pub fn transform_node(mapping: &impl PointMapping, node: &ContourNode) -> ContourNode {
    ContourNode {
        id: node.id,
        point: mapping.map_point(node.point),
        handle_in: node.handle_in.map(|h| mapping.map_vector(node.point, h)),
        handle_out: node.handle_out.map(|h| mapping.map_vector(node.point, h)),
    }
}

/// Map one contour, keeping its id, node count and closedness
pub fn transform_contour(mapping: &impl PointMapping, contour: &Contour) -> Contour {
    Contour {
        id: contour.id,
        nodes: contour
            .nodes
            .iter()
            .map(|node| transform_node(mapping, node))
            .collect(),
        closed: contour.closed,
    }
}

/// Map every contour of an artwork into a new artwork
///
/// Contour order, node order and handle presence are all preserved; empty
/// and single-node contours are carried through as they are mapped.
pub fn transform_composite(mapping: &impl PointMapping, artwork: &CompositePath) -> CompositePath {
    CompositePath::new(
        artwork
            .contours
            .iter()
            .map(|contour| transform_contour(mapping, contour))
            .collect(),
    )
}
