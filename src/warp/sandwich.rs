// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Ruled-surface projection between two boundary curves.
//!
//! `project(u, v)` samples the top and bottom curves at the same normalized
//! arc-length fraction `u` and blends the two samples linearly by `v`.
//! Left and right sides only matter through the corners they share with
//! top and bottom; their own shape is not sampled.

use super::Side;
use super::arclen::ArcLengthCurve;
use super::decompose::Decomposition;
use super::error::WarpError;
use crate::path::Contour;
use kurbo::{Point, Vec2};

/// Sides shorter than this cannot be normalized by arc length
const MIN_SIDE_LENGTH: f64 = 1e-9;

/// Maps unit-square coordinates onto the region between two curves
#[derive(Debug, Clone)]
pub struct SandwichProjector {
    top: ArcLengthCurve,
    bottom: ArcLengthCurve,
}

impl SandwichProjector {
    /// Build from two sides that already run in the same direction
    pub fn new(top: &Contour, bottom: &Contour, accuracy: f64) -> Result<Self, WarpError> {
        let top = ArcLengthCurve::from_contour(top, accuracy);
        if top.length() <= MIN_SIDE_LENGTH {
            return Err(WarpError::DegenerateProjection { side: Side::Top });
        }
        let bottom = ArcLengthCurve::from_contour(bottom, accuracy);
        if bottom.length() <= MIN_SIDE_LENGTH {
            return Err(WarpError::DegenerateProjection { side: Side::Bottom });
        }
        Ok(Self { top, bottom })
    }

    /// Build from a decomposed frame
    ///
    /// The contour walk produces the bottom side running from the bottom
    /// right corner to the bottom left one, so it is reversed to run the
    /// same way as the top side.
    pub fn from_decomposition(parts: &Decomposition, accuracy: f64) -> Result<Self, WarpError> {
        let bottom = parts.side(Side::Bottom).reversed();
        Self::new(parts.side(Side::Top), &bottom, accuracy)
    }

    /// World-space point for unit-square coordinates
    ///
    /// `v = 0` lies on the top curve and `v = 1` on the bottom curve.
    pub fn project(&self, u: f64, v: f64) -> Point {
        let (above, below) = self.samples(u);
        if v == 0.0 {
            above
        } else if v == 1.0 {
            below
        } else {
            above.lerp(below, v)
        }
    }

    /// Partial derivatives of `project` with respect to `u` and `v`
    pub fn partials(&self, u: f64, v: f64) -> (Vec2, Vec2) {
        let top_len = self.top.length();
        let bottom_len = self.bottom.length();
        let top_tangent = self.top.tangent_at(u * top_len) * top_len;
        let bottom_tangent = self.bottom.tangent_at(u * bottom_len) * bottom_len;
        let (above, below) = self.samples(u);

        let du = top_tangent * (1.0 - v) + bottom_tangent * v;
        let dv = below - above;
        (du, dv)
    }

    fn samples(&self, u: f64) -> (Point, Point) {
        (
            self.top.point_at(u * self.top.length()),
            self.bottom.point_at(u * self.bottom.length()),
        )
    }
}
