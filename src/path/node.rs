// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! A single anchor of a contour together with its curve handles.

use crate::model::EntityId;
use kurbo::{Point, Vec2};

/// An on-curve anchor with optional cubic handles
///
/// Handles are stored relative to the anchor. `handle_out` shapes the
/// segment leaving this node, `handle_in` the segment arriving at it.
/// A segment is straight when neither of its handles is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourNode {
    /// Unique identifier for this node
    pub id: EntityId,

    /// Anchor position
    pub point: Point,

    /// Incoming handle, relative to `point`
    pub handle_in: Option<Vec2>,

    /// Outgoing handle, relative to `point`
    pub handle_out: Option<Vec2>,
}

impl ContourNode {
    /// A corner node without handles
    pub fn corner(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            handle_in: None,
            handle_out: None,
        }
    }

    /// A node with explicit relative handles
    pub fn with_handles(point: Point, handle_in: Option<Vec2>, handle_out: Option<Vec2>) -> Self {
        Self {
            id: EntityId::next(),
            point,
            handle_in,
            handle_out,
        }
    }

    /// Absolute position of the incoming control point
    pub fn in_control(&self) -> Point {
        self.point + self.handle_in.unwrap_or(Vec2::ZERO)
    }

    /// Absolute position of the outgoing control point
    pub fn out_control(&self) -> Point {
        self.point + self.handle_out.unwrap_or(Vec2::ZERO)
    }

    /// Swap the handles, used when a contour is walked backwards
    pub fn flipped(&self) -> Self {
        Self {
            id: self.id,
            point: self.point,
            handle_in: self.handle_out,
            handle_out: self.handle_in,
        }
    }
}

/// True when a handle is absent or has no length
pub(crate) fn handle_is_flat(handle: Option<Vec2>) -> bool {
    handle.is_none_or(|h| h.x == 0.0 && h.y == 0.0)
}
