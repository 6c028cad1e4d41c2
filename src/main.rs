// Copyright 2025 the Wordwarp Authors
// SPDX-License-Identifier: Apache-2.0

//! Wordwarp: stretch vector artwork by dragging a four-cornered frame

fn main() -> anyhow::Result<()> {
    wordwarp::run()
}
