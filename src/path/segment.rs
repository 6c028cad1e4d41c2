// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Segments between consecutive contour nodes

use super::node::{ContourNode, handle_is_flat};
use kurbo::{CubicBez, Line, ParamCurve, ParamCurveDeriv, PathSeg, Point, Vec2};

/// A segment between two consecutive nodes of a contour
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight segment (both handles absent or zero)
    Line(Line),
    /// Curved segment
    Cubic(CubicBez),
}

impl Segment {
    /// Build the segment running from `from` to `to`
    pub fn between(from: &ContourNode, to: &ContourNode) -> Self {
        if handle_is_flat(from.handle_out) && handle_is_flat(to.handle_in) {
            Segment::Line(Line::new(from.point, to.point))
        } else {
            Segment::Cubic(CubicBez::new(
                from.point,
                from.out_control(),
                to.in_control(),
                to.point,
            ))
        }
    }

    pub fn start(&self) -> Point {
        match self {
            Segment::Line(line) => line.p0,
            Segment::Cubic(cubic) => cubic.p0,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Segment::Line(line) => line.p1,
            Segment::Cubic(cubic) => cubic.p3,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Segment::Line(_))
    }

    /// Convert to a kurbo path segment for arc-length and nearest queries
    pub fn to_path_seg(&self) -> PathSeg {
        match *self {
            Segment::Line(line) => PathSeg::Line(line),
            Segment::Cubic(cubic) => PathSeg::Cubic(cubic),
        }
    }

    /// Point at parameter `t`; the endpoints are returned exactly
    pub fn eval(&self, t: f64) -> Point {
        if t <= 0.0 {
            return self.start();
        }
        if t >= 1.0 {
            return self.end();
        }
        match self {
            Segment::Line(line) => line.eval(t),
            Segment::Cubic(cubic) => cubic.eval(t),
        }
    }

    /// First derivative with respect to the curve parameter
    pub fn deriv(&self, t: f64) -> Vec2 {
        match self {
            Segment::Line(line) => line.p1 - line.p0,
            Segment::Cubic(cubic) => cubic.deriv().eval(t).to_vec2(),
        }
    }

    /// Split at parameter `t`, returning the two halves
    pub fn split(&self, t: f64) -> (Segment, Segment) {
        match *self {
            Segment::Line(line) => (
                Segment::Line(line.subsegment(0.0..t)),
                Segment::Line(line.subsegment(t..1.0)),
            ),
            Segment::Cubic(cubic) => (
                Segment::Cubic(cubic.subsegment(0.0..t)),
                Segment::Cubic(cubic.subsegment(t..1.0)),
            ),
        }
    }
}
