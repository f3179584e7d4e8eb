// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animated scene: a background plus an ordered stack of layers.
//!
//! A [`Scene`] is the [`FrameHandler`] a host drives. Each repaint runs:
//!
//! 1. the background renders from its current values, then advances, so
//!    what is on screen always lags its state by one step;
//! 2. every layer, bottom to top, advances and then renders.
//!
//! A paint that fails partway still consumes a step: the background and
//! every layer below the failing one have already advanced.
//!
//! Timer ticks only request repaints. Animation state moves once per paint,
//! so a host that coalesces several ticks into one repaint sees a single
//! step, never a burst.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::animate::Animated;
use crate::background::Background;
use crate::canvas::{Canvas, CanvasError};
use crate::host::FrameHandler;

/// A background with zero or more animated layers composited over it.
pub struct Scene<C: Canvas> {
    background: Background,
    layers: Vec<Box<dyn Animated<C>>>,
    ticks: u64,
    frames: u64,
}

impl<C: Canvas> core::fmt::Debug for Scene<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("background", &self.background)
            .field("layers", &self.layers.len())
            .field("ticks", &self.ticks)
            .field("frames", &self.frames)
            .finish()
    }
}

impl<C: Canvas> Scene<C> {
    /// Creates a scene with no layers.
    #[must_use]
    pub fn new(background: Background) -> Self {
        Self {
            background,
            layers: Vec::new(),
            ticks: 0,
            frames: 0,
        }
    }

    /// Adds a layer on top of all existing ones.
    pub fn push_layer(&mut self, layer: impl Animated<C> + 'static) {
        self.layers.push(Box::new(layer));
    }

    /// Builder form of [`push_layer`](Self::push_layer).
    #[must_use]
    pub fn with_layer(mut self, layer: impl Animated<C> + 'static) -> Self {
        self.push_layer(layer);
        self
    }

    /// The background.
    #[must_use]
    pub const fn background(&self) -> &Background {
        &self.background
    }

    /// Layers, bottom to top.
    #[must_use]
    pub fn layers(&self) -> &[Box<dyn Animated<C>>] {
        &self.layers
    }

    /// Number of completed repaints.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of timer ticks received.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.ticks
    }
}

impl<C: Canvas> FrameHandler<C> for Scene<C> {
    fn on_tick(&mut self) -> bool {
        self.ticks += 1;
        true
    }

    fn on_paint(&mut self, canvas: &mut C, region: Rect) -> Result<(), CanvasError> {
        // The whole canvas is redrawn regardless of damage.
        _ = region;

        self.background.render(canvas)?;
        Animated::<C>::tick(&mut self.background);

        for layer in &mut self.layers {
            layer.tick();
            layer.render(canvas)?;
        }

        self.frames += 1;
        Ok(())
    }
}
