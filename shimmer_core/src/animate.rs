// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability shared by everything that moves.

use crate::canvas::{Canvas, CanvasError};

/// Something that advances per tick and draws itself onto a canvas.
///
/// Implementors own all of their animation state. `tick` only mutates that
/// state; `render` only reads it and writes to the canvas.
///
/// Both the [`Background`](crate::background::Background) and the
/// [`SpriteLayer`](crate::layer::SpriteLayer) implement this, and a
/// [`Scene`](crate::scene::Scene) holds a list of boxed layers of any
/// implementing type.
pub trait Animated<C: Canvas> {
    /// Advances the animation by one step.
    fn tick(&mut self);

    /// Draws the current state onto `canvas`.
    ///
    /// # Errors
    ///
    /// Propagates canvas failures such as offscreen buffer allocation.
    fn render(&self, canvas: &mut C) -> Result<(), CanvasError>;
}
