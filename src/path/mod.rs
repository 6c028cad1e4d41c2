// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Path data model for artwork and outline frames.
//!
//! A `CompositePath` owns an ordered list of `Contour`s, each an ordered
//! list of `ContourNode`s with relative cubic handles. Everything converts
//! to and from `kurbo::BezPath`, which is what rendering and SVG export
//! consume.

pub mod composite;
pub mod contour;
pub mod node;
pub mod segment;

pub use composite::CompositePath;
pub use contour::Contour;
pub use node::ContourNode;
pub use segment::Segment;
