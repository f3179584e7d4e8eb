// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated background in a window.
//!
//! A gradient masked by a radial vignette with an oscillating circle on top.
//! Prints the frame rate to stderr every two seconds.

use shimmer_backend_winit::{HostConfig, run, timebase};
use shimmer_core::background::Background;
use shimmer_core::scene::Scene;
use shimmer_debug::pretty::PrettyPrintSink;
use shimmer_render::PixmapCanvas;

fn main() -> anyhow::Result<()> {
    let scene: Scene<PixmapCanvas> = Scene::new(Background::default());
    let sink = PrettyPrintSink::stderr(timebase()).with_frames(false);
    run(HostConfig::new("shimmer: background"), scene, sink)?;
    Ok(())
}
