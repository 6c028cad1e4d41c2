// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Arc-length addressing over a chain of segments.
//!
//! Two boundary sides of different physical length are sampled at the same
//! normalized fraction by asking each for `point_at(fraction * length)`.
//! That is what makes a stretch scale-correct instead of following vertex
//! counts.

use crate::path::{Contour, Segment};
use kurbo::{ParamCurveArclen, Point, Vec2};

/// Below this, a derivative is treated as vanishing
const MIN_DERIV: f64 = 1e-12;

/// A window over a chain of segments, addressed by distance along it
#[derive(Debug, Clone)]
pub struct ArcLengthCurve {
    segments: Vec<Segment>,
    /// Arc length of each segment
    lengths: Vec<f64>,
    /// Distance from the chain start to the end of each segment
    ends: Vec<f64>,
    /// Window start, measured from the chain start
    offset: f64,
    /// Window length
    length: f64,
    accuracy: f64,
}

impl ArcLengthCurve {
    /// Address the whole chain
    pub fn new(segments: Vec<Segment>, accuracy: f64) -> Self {
        let lengths: Vec<f64> = segments
            .iter()
            .map(|seg| seg.to_path_seg().arclen(accuracy))
            .collect();
        let ends = lengths
            .iter()
            .scan(0.0, |acc, len| {
                *acc += len;
                Some(*acc)
            })
            .collect::<Vec<_>>();
        let length = ends.last().copied().unwrap_or(0.0);

        Self {
            segments,
            lengths,
            ends,
            offset: 0.0,
            length,
            accuracy,
        }
    }

    /// Address every segment of a contour, in contour order
    pub fn from_contour(contour: &Contour, accuracy: f64) -> Self {
        Self::new(contour.segments().collect(), accuracy)
    }

    /// Restrict to `length` units starting `offset` units into the chain
    ///
    /// Both values are clamped to the chain's true length.
    pub fn with_window(mut self, offset: f64, length: f64) -> Self {
        let chain = self.chain_length();
        self.offset = offset.clamp(0.0, chain);
        self.length = length.clamp(0.0, chain - self.offset);
        self
    }

    /// Length of the addressed window
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Length of the whole underlying chain
    pub fn chain_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    /// Point `distance` units from the window start, clamped to the window
    pub fn point_at(&self, distance: f64) -> Point {
        match self.locate(distance) {
            Some((index, t)) => self.segments[index].eval(t),
            None => Point::ZERO,
        }
    }

    /// Derivative of `point_at` with respect to distance
    ///
    /// This is the unit tangent where the curve is regular. Where the
    /// parametric derivative vanishes (a cubic handle of zero length),
    /// the direction is taken from the segment chord instead.
    pub fn tangent_at(&self, distance: f64) -> Vec2 {
        let Some((index, t)) = self.locate(distance) else {
            return Vec2::ZERO;
        };
        let segment = &self.segments[index];
        let deriv = segment.deriv(t);
        let len = deriv.length();
        if len > MIN_DERIV {
            return deriv / len;
        }
        let chord = segment.end() - segment.start();
        let chord_len = chord.length();
        if chord_len > MIN_DERIV {
            chord / chord_len
        } else {
            Vec2::ZERO
        }
    }

    /// Find the segment and curve parameter for a window distance
    fn locate(&self, distance: f64) -> Option<(usize, f64)> {
        if self.segments.is_empty() {
            return None;
        }
        let clamped = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, self.length)
        };
        let target = self.offset + clamped;

        let index = self
            .ends
            .partition_point(|&end| end < target)
            .min(self.segments.len() - 1);
        let seg_len = self.lengths[index];
        let local = target - (self.ends[index] - seg_len);

        let t = if seg_len <= 0.0 || local <= 0.0 {
            0.0
        } else if local >= seg_len {
            1.0
        } else {
            self.segments[index]
                .to_path_seg()
                .inv_arclen(local, self.accuracy)
        };
        Some((index, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ContourNode;
    use kurbo::{CubicBez, Line};

    const ACCURACY: f64 = 1e-9;

    fn assert_near(a: Point, b: Point, tol: f64) {
        assert!((a - b).length() < tol, "{a:?} != {b:?}");
    }

    fn polyline(points: &[Point]) -> ArcLengthCurve {
        let contour = Contour::open(points.iter().copied().map(ContourNode::corner).collect());
        ArcLengthCurve::from_contour(&contour, ACCURACY)
    }

    #[test]
    fn polyline_length_and_points() {
        let curve = polyline(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
        ]);
        assert!((curve.length() - 15.0).abs() < 1e-9);
        assert_near(curve.point_at(5.0), Point::new(5.0, 0.0), 1e-9);
        assert_near(curve.point_at(12.0), Point::new(10.0, 2.0), 1e-9);
    }

    #[test]
    fn distances_are_clamped() {
        let curve = polyline(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
        assert_eq!(curve.point_at(-3.0), Point::new(0.0, 0.0));
        assert_eq!(curve.point_at(100.0), Point::new(4.0, 0.0));
        assert_eq!(curve.point_at(f64::NAN), Point::new(0.0, 0.0));
    }

    #[test]
    fn endpoints_are_exact() {
        let curve = polyline(&[Point::new(0.1, 0.3), Point::new(0.7, 0.9)]);
        assert_eq!(curve.point_at(curve.length()), Point::new(0.7, 0.9));
        assert_eq!(curve.point_at(0.0), Point::new(0.1, 0.3));
    }

    #[test]
    fn window_offsets_into_chain() {
        let curve = polyline(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]).with_window(2.0, 5.0);
        assert!((curve.length() - 5.0).abs() < 1e-12);
        assert_near(curve.point_at(0.0), Point::new(2.0, 0.0), 1e-9);
        assert_near(curve.point_at(50.0), Point::new(7.0, 0.0), 1e-9);
    }

    #[test]
    fn cubic_midpoint_by_arclength() {
        // symmetric arch: half the arc length lands on the axis of symmetry
        let arch = Segment::Cubic(CubicBez::new(
            (0.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
            (10.0, 0.0),
        ));
        let curve = ArcLengthCurve::new(vec![arch], ACCURACY);
        let mid = curve.point_at(curve.length() / 2.0);
        assert!((mid.x - 5.0).abs() < 1e-6);
        assert!((mid.y - 7.5).abs() < 1e-6);
    }

    #[test]
    fn zero_length_segments_are_skipped() {
        let curve = ArcLengthCurve::new(
            vec![
                Segment::Line(Line::new((0.0, 0.0), (0.0, 0.0))),
                Segment::Line(Line::new((0.0, 0.0), (6.0, 0.0))),
            ],
            ACCURACY,
        );
        assert_near(curve.point_at(3.0), Point::new(3.0, 0.0), 1e-9);
        assert_eq!(curve.tangent_at(3.0), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn empty_chain_is_harmless() {
        let curve = ArcLengthCurve::new(Vec::new(), ACCURACY);
        assert_eq!(curve.length(), 0.0);
        assert_eq!(curve.point_at(1.0), Point::ZERO);
        assert_eq!(curve.tangent_at(1.0), Vec2::ZERO);
    }

    #[test]
    fn tangent_falls_back_to_chord() {
        // both handles retracted: parametric derivative vanishes at t = 0
        let seg = Segment::Cubic(CubicBez::new((0.0, 0.0), (0.0, 0.0), (0.0, 4.0), (0.0, 4.0)));
        let curve = ArcLengthCurve::new(vec![seg], ACCURACY);
        let tangent = curve.tangent_at(0.0);
        assert!((tangent - Vec2::new(0.0, 1.0)).length() < 1e-9);
    }
}
