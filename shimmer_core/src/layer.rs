// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A self-animating translucent sprite.
//!
//! [`SpriteLayer`] draws two overlapping half-transparent squares into an
//! offscreen buffer under a pulsing non-uniform scale, then composites the
//! buffer onto the target with a pulsing opacity. The buffer lives only for
//! the duration of one [`render`](Animated::render) call.

use kurbo::{Affine, Point, Rect, Shape, Vec2};

use crate::animate::Animated;
use crate::canvas::{Canvas, CanvasError};
use crate::oscillator::Oscillator;
use crate::paint::{Color, PATH_TOLERANCE, Paint};

/// Side length of each square, in unscaled buffer units.
pub const SQUARE_SIZE: f64 = 60.0;

/// Offset of the second square from the first.
pub const SQUARE_OFFSET: f64 = 30.0;

/// Geometry and oscillator seeds for a [`SpriteLayer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteConfig {
    /// Top-left corner on the target canvas.
    pub origin: Point,
    /// Buffer width in pixels.
    pub width: u32,
    /// Buffer height in pixels.
    pub height: u32,
    /// Composite opacity.
    pub opacity: Oscillator,
    /// Horizontal scale.
    pub scale_x: Oscillator,
    /// Vertical scale.
    pub scale_y: Oscillator,
}

impl SpriteConfig {
    /// A 200×200 sprite at `(200, 200)`: opacity from `0` by `0.02` in
    /// `[0, 1]`, horizontal scale from `1` and vertical scale from `0.5`,
    /// both by `0.05` in `[0.5, 2]`.
    pub const DEFAULT: Self = Self {
        origin: Point::new(200.0, 200.0),
        width: 200,
        height: 200,
        opacity: Oscillator::unit(0.0, 0.02),
        scale_x: Oscillator::new(1.0, 0.05, 0.5, 2.0),
        scale_y: Oscillator::new(0.5, 0.05, 0.5, 2.0),
    };
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Two overlapping squares with pulsing scale and opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteLayer {
    origin: Point,
    width: u32,
    height: u32,
    opacity: Oscillator,
    scale_x: Oscillator,
    scale_y: Oscillator,
}

impl SpriteLayer {
    /// Creates a sprite from the given geometry and seeds.
    #[must_use]
    pub const fn new(config: SpriteConfig) -> Self {
        Self {
            origin: config.origin,
            width: config.width,
            height: config.height,
            opacity: config.opacity,
            scale_x: config.scale_x,
            scale_y: config.scale_y,
        }
    }

    /// Top-left corner on the target canvas.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Buffer size in pixels.
    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The opacity oscillator.
    #[must_use]
    pub const fn opacity(&self) -> &Oscillator {
        &self.opacity
    }

    /// The horizontal scale oscillator.
    #[must_use]
    pub const fn scale_x(&self) -> &Oscillator {
        &self.scale_x
    }

    /// The vertical scale oscillator.
    #[must_use]
    pub const fn scale_y(&self) -> &Oscillator {
        &self.scale_y
    }

    /// The transform applied to everything drawn into the buffer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::scale_non_uniform(self.scale_x.value(), self.scale_y.value())
    }

    /// Draws both squares into `buffer`: blue at the origin, then green
    /// offset diagonally on top of it.
    fn paint_squares<B: Canvas>(&self, buffer: &mut B) {
        let transform = self.transform();
        let blue = Rect::from_origin_size((0.0, 0.0), (SQUARE_SIZE, SQUARE_SIZE));
        let green = blue + Vec2::new(SQUARE_OFFSET, SQUARE_OFFSET);

        buffer.fill(
            &blue.to_path(PATH_TOLERANCE),
            &Paint::Solid(Color::rgba(0.0, 0.0, 1.0, 0.5)),
            transform,
        );
        buffer.fill(
            &green.to_path(PATH_TOLERANCE),
            &Paint::Solid(Color::rgba(0.0, 1.0, 0.0, 0.5)),
            transform,
        );
    }
}

impl Default for SpriteLayer {
    fn default() -> Self {
        Self::new(SpriteConfig::DEFAULT)
    }
}

impl<C: Canvas> Animated<C> for SpriteLayer {
    fn tick(&mut self) {
        self.opacity.advance();
        self.scale_x.advance();
        self.scale_y.advance();
    }

    fn render(&self, canvas: &mut C) -> Result<(), CanvasError> {
        let mut buffer = canvas.create_buffer(self.width, self.height)?;
        self.paint_squares(&mut buffer);
        let mask = Color::BLACK.with_alpha(self.opacity.value());
        canvas.composite(&buffer, self.origin, mask);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingCanvas};

    fn tick_n(layer: &mut SpriteLayer, n: usize) {
        for _ in 0..n {
            <SpriteLayer as Animated<RecordingCanvas>>::tick(layer);
        }
    }

    #[test]
    fn fifty_ticks_from_stock_seeds() {
        let mut layer = SpriteLayer::default();
        tick_n(&mut layer, 50);

        // Opacity climbs 0 → 1 in 50 steps of 0.02 and reflects on tick 50.
        let opacity = layer.opacity();
        assert!(
            libm::fabs(opacity.value() - 1.0) < 1e-9,
            "opacity at the top, got {}",
            opacity.value()
        );
        assert!(opacity.delta() < 0.0, "opacity reflected at max");

        // Vertical scale starts on its lower bound moving up: it reflects at
        // max on tick 30 and is on its way down at tick 50.
        let scale_y = layer.scale_y();
        assert!(scale_y.delta() < 0.0, "scale_y reflected at max");
        assert!(
            libm::fabs(scale_y.value() - 1.0) < 1e-9,
            "scale_y descending through 1.0, got {}",
            scale_y.value()
        );
    }

    #[test]
    fn vertical_scale_hits_max_before_min() {
        let mut layer = SpriteLayer::default();
        let mut reflections = alloc::vec::Vec::new();
        let mut prev = layer.scale_y().delta();
        for tick in 1..=70 {
            tick_n(&mut layer, 1);
            let delta = layer.scale_y().delta();
            if (delta > 0.0) != (prev > 0.0) {
                reflections.push((tick, layer.scale_y().value() > 1.25));
            }
            prev = delta;
        }
        assert_eq!(
            reflections,
            [(30, true), (61, false)],
            "upper reflection on tick 30, lower on tick 61"
        );
    }

    #[test]
    fn render_composites_scaled_squares() {
        let mut layer = SpriteLayer::default();
        tick_n(&mut layer, 1);
        let mut canvas = RecordingCanvas::new(640, 480);
        layer.render(&mut canvas).expect("recording canvas allocates");

        assert_eq!(canvas.ops.len(), 1, "a single composite onto the target");
        let Op::Composite {
            width,
            height,
            ops,
            origin,
            mask,
        } = &canvas.ops[0]
        else {
            panic!("expected composite, got {:?}", canvas.ops[0]);
        };
        assert_eq!((*width, *height), (200, 200), "buffer matches the layer size");
        assert_eq!(*origin, Point::new(200.0, 200.0), "placed at the layer origin");
        assert_eq!(mask.a, layer.opacity().value(), "mask alpha is the opacity");

        assert_eq!(ops.len(), 2, "two squares");
        let expected = Affine::scale_non_uniform(1.0 + 0.05, 0.5 + 0.05);
        let blue = Rect::new(0.0, 0.0, SQUARE_SIZE, SQUARE_SIZE);
        let green = blue + Vec2::new(SQUARE_OFFSET, SQUARE_OFFSET);
        for (op, (square, color)) in ops.iter().zip([
            (blue, Color::rgba(0.0, 0.0, 1.0, 0.5)),
            (green, Color::rgba(0.0, 1.0, 0.0, 0.5)),
        ]) {
            let Op::Fill {
                path,
                paint,
                transform,
            } = op
            else {
                panic!("expected fill, got {op:?}");
            };
            assert_eq!(paint, &Paint::Solid(color), "blue first, then green");
            assert_eq!(
                path,
                &square.to_path(PATH_TOLERANCE),
                "square geometry in buffer units"
            );
            assert_eq!(*transform, expected, "scaled by the current factors");
        }
    }

    #[test]
    fn allocation_failure_propagates() {
        let layer = SpriteLayer::default();
        let mut canvas = RecordingCanvas::new(640, 480);
        canvas.fail_buffers = true;
        assert_eq!(
            layer.render(&mut canvas),
            Err(CanvasError::BufferAllocation {
                width: 200,
                height: 200
            }),
            "no fallback rendering"
        );
        assert!(canvas.ops.is_empty(), "nothing composited");
    }
}
