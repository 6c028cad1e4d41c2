// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Notifications emitted by a `StretchyPath`

use crate::warp::WarpError;

/// Outcome of an arrangement pass, delivered to every subscriber
#[derive(Debug, Clone, PartialEq)]
pub enum StretchyEvent {
    /// The display artwork was replaced
    Rearranged {
        /// Number of successful passes so far, this one included
        generation: u64,
    },

    /// The pass was aborted; the previous display artwork is still current
    ArrangeFailed { error: WarpError },
}

/// Arrangement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrangeState {
    /// Display artwork matches the frame
    #[default]
    Idle,

    /// A pass is running
    Arranging,
}
