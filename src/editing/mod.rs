// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Frame editing and the stretchy path orchestrator

pub mod affordances;
pub mod events;
pub mod frame;
pub mod stretchy;

pub use affordances::{CornerHandle, EditAffordances, MidpointHandle};
pub use events::{ArrangeState, StretchyEvent};
pub use frame::OutlineFrame;
pub use stretchy::StretchyPath;
