// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Shared model types

pub mod entity_id;

pub use entity_id::EntityId;
