// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated background with a sprite layer composited on top.
//!
//! The sprite paints two overlapping translucent squares into an offscreen
//! buffer, stretched vertically by an oscillating scale, and composites the
//! buffer through an oscillating opacity.

use shimmer_backend_winit::{HostConfig, run, timebase};
use shimmer_core::background::Background;
use shimmer_core::layer::{SpriteConfig, SpriteLayer};
use shimmer_core::scene::Scene;
use shimmer_debug::pretty::PrettyPrintSink;
use shimmer_render::PixmapCanvas;

fn main() -> anyhow::Result<()> {
    let scene: Scene<PixmapCanvas> = Scene::new(Background::default())
        .with_layer(SpriteLayer::new(SpriteConfig::DEFAULT));
    let sink = PrettyPrintSink::stderr(timebase()).with_frames(false);
    run(HostConfig::new("shimmer: layered"), scene, sink)?;
    Ok(())
}
