// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for contours and contour nodes.
//!
//! Each `EntityId` is a monotonically increasing `u64` drawn from a global
//! atomic counter. The warp keeps ids stable from source to display
//! artwork, so a display node can always be traced back to the source node
//! it was projected from. Frame vertices and edit affordances are keyed by
//! ids too, which keeps them valid across vertex insertions.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for an entity (contour, node, affordance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static ENTITY_COUNTER: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Create a new unique entity ID
    pub fn next() -> Self {
        Self(ENTITY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::next()
    }
}
