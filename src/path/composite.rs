// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Multi-contour artwork, e.g. a letterform with counters.

use super::contour::Contour;
use super::node::ContourNode;
use crate::model::EntityId;
use kurbo::{BezPath, PathEl, Point, Rect, SvgParseError};

/// An ordered set of contours treated as one artwork
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositePath {
    pub contours: Vec<Contour>,
}

impl CompositePath {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Build from a kurbo path
    ///
    /// Every `MoveTo` starts a new contour. Quadratic segments are
    /// elevated to cubics. On `ClosePath`, a trailing node that lands on
    /// the first node is merged into it.
    pub fn from_bezpath(path: &BezPath) -> Self {
        let mut contours = Vec::new();
        let mut current: Option<Contour> = None;

        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if let Some(done) = current.take() {
                        contours.push(done);
                    }
                    current = Some(Contour::open(vec![ContourNode::corner(p)]));
                }
                PathEl::LineTo(p) => {
                    current
                        .get_or_insert_with(|| Contour::open(Vec::new()))
                        .nodes
                        .push(ContourNode::corner(p));
                }
                PathEl::QuadTo(q, p) => {
                    let contour = current.get_or_insert_with(|| Contour::open(Vec::new()));
                    let start = contour.nodes.last().map(|n| n.point).unwrap_or(q);
                    let c1 = start + (q - start) * (2.0 / 3.0);
                    let c2 = p + (q - p) * (2.0 / 3.0);
                    push_cubic(contour, c1, c2, p);
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let contour = current.get_or_insert_with(|| Contour::open(Vec::new()));
                    push_cubic(contour, c1, c2, p);
                }
                PathEl::ClosePath => {
                    if let Some(mut contour) = current.take() {
                        close_contour(&mut contour);
                        contours.push(contour);
                    }
                }
            }
        }
        if let Some(done) = current {
            contours.push(done);
        }

        Self { contours }
    }

    /// Parse SVG path data
    pub fn from_svg(data: &str) -> Result<Self, SvgParseError> {
        Ok(Self::from_bezpath(&BezPath::from_svg(data)?))
    }

    /// Convert to a single kurbo BezPath
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for contour in &self.contours {
            contour.append_to(&mut path);
        }
        path
    }

    /// SVG path data for the whole artwork
    pub fn to_svg(&self) -> String {
        self.to_bezpath().to_svg()
    }

    /// Union of the contour bounds, `None` when there are no nodes
    pub fn bounding_box(&self) -> Option<Rect> {
        self.contours
            .iter()
            .filter_map(Contour::bounding_box)
            .reduce(|a, b| a.union(b))
    }

    pub fn contour_count(&self) -> usize {
        self.contours.len()
    }

    /// Total number of nodes over all contours
    pub fn node_count(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Iterate over every node of every contour
    pub fn nodes(&self) -> impl Iterator<Item = &ContourNode> {
        self.contours.iter().flat_map(|c| c.nodes.iter())
    }

    /// Find a node by id
    pub fn find_node(&self, id: EntityId) -> Option<&ContourNode> {
        self.nodes().find(|node| node.id == id)
    }
}

fn push_cubic(contour: &mut Contour, c1: Point, c2: Point, p: Point) {
    if let Some(prev) = contour.nodes.last_mut() {
        prev.handle_out = Some(c1 - prev.point);
    }
    contour
        .nodes
        .push(ContourNode::with_handles(p, Some(c2 - p), None));
}

fn close_contour(contour: &mut Contour) {
    contour.closed = true;
    if contour.nodes.len() < 2 {
        return;
    }
    let last = contour.nodes.len() - 1;
    if contour.nodes[last].point == contour.nodes[0].point {
        if let Some(dup) = contour.nodes.pop() {
            if dup.handle_in.is_some() {
                contour.nodes[0].handle_in = dup.handle_in;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn svg_square_becomes_one_closed_contour() {
        let art = CompositePath::from_svg("M0 0 L10 0 L10 10 L0 10 Z").unwrap();
        assert_eq!(art.contour_count(), 1);
        assert!(art.contours[0].closed);
        assert_eq!(art.node_count(), 4);
        assert_eq!(art.bounding_box(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn explicit_closing_point_is_merged() {
        let art = CompositePath::from_svg("M0 0 L10 0 L10 10 L0 0 Z").unwrap();
        assert_eq!(art.node_count(), 3);
    }

    #[test]
    fn closing_curve_handle_moves_to_first_node() {
        let art = CompositePath::from_svg("M0 0 L10 0 C10 5 5 10 0 0 Z").unwrap();
        let contour = &art.contours[0];
        assert_eq!(contour.len(), 2);
        assert_eq!(contour.nodes[0].handle_in, Some(Vec2::new(5.0, 10.0)));
        assert_eq!(contour.nodes[1].handle_out, Some(Vec2::new(0.0, 5.0)));
    }

    #[test]
    fn quadratic_is_elevated() {
        let art = CompositePath::from_svg("M0 0 Q3 3 6 0").unwrap();
        let contour = &art.contours[0];
        assert!(!contour.closed);
        assert_eq!(contour.nodes[0].handle_out, Some(Vec2::new(2.0, 2.0)));
        assert_eq!(contour.nodes[1].handle_in, Some(Vec2::new(-2.0, 2.0)));
    }

    #[test]
    fn holes_stay_separate_contours() {
        let art = CompositePath::from_svg(
            "M0 0 L10 0 L10 10 L0 10 Z M3 3 L3 7 L7 7 L7 3 Z",
        )
        .unwrap();
        assert_eq!(art.contour_count(), 2);
        let back = CompositePath::from_bezpath(&art.to_bezpath());
        assert_eq!(back.node_count(), 8);
    }
}
