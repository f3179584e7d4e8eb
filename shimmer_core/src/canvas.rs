// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface contract.
//!
//! A [`Canvas`] is whatever the host hands to a paint callback: a window's
//! backing pixmap, an offscreen image, or a test double. Animated objects
//! only ever draw through this trait, so the scene stays independent of any
//! particular rasterizer.
//!
//! The operation set is deliberately close to a retained 2D context:
//! painting a source through a mask, filling and stroking paths under a
//! transform, and compositing an offscreen buffer through a solid alpha
//! mask. All drawing uses source-over.

use core::fmt;

use kurbo::{Affine, BezPath, Point, Rect};

use crate::paint::{Color, Paint};

/// Errors from [`Canvas`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasError {
    /// An offscreen buffer of the given size could not be allocated.
    BufferAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferAllocation { width, height } => {
                write!(f, "failed to allocate a {width}x{height} offscreen buffer")
            }
        }
    }
}

impl core::error::Error for CanvasError {}

/// A 2D drawing surface of fixed integer size.
pub trait Canvas {
    /// Offscreen buffer type produced by [`create_buffer`](Self::create_buffer)
    /// and consumed by [`composite`](Self::composite).
    type Buffer: Canvas;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// The full extent of the canvas as a rectangle at the origin.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }

    /// Paints `source` over the whole canvas, modulated by the alpha of
    /// `mask` at each pixel. The mask's color channels are ignored.
    fn mask(&mut self, source: &Paint, mask: &Paint);

    /// Fills `path` with `paint`, with `transform` applied to the path.
    fn fill(&mut self, path: &BezPath, paint: &Paint, transform: Affine);

    /// Strokes `path` with `paint` at `line_width`, with `transform` applied
    /// to the path. A non-positive width draws nothing.
    fn stroke(&mut self, path: &BezPath, paint: &Paint, line_width: f64, transform: Affine);

    /// Creates a transparent offscreen buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::BufferAllocation`] when the buffer cannot be
    /// created, including for zero-sized requests.
    fn create_buffer(&self, width: u32, height: u32) -> Result<Self::Buffer, CanvasError>;

    /// Draws `buffer` with its top-left corner at `origin`, through a solid
    /// mask of color `mask`.
    ///
    /// Only the mask's alpha matters: the result equals drawing the buffer
    /// with its opacity scaled by `mask.a`.
    fn composite(&mut self, buffer: &Self::Buffer, origin: Point, mask: Color);
}
