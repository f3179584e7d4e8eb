// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animated background: a vignetted diagonal gradient with a drifting
//! circle.
//!
//! Each frame paints, in order:
//!
//! 1. a linear gradient from the top-left to the bottom-right corner whose
//!    five stops mix the channel oscillators `c1..c4`,
//! 2. masked by a radial gradient centered on the canvas that is opaque out
//!    to half the inscribed radius and fades to transparent at the full
//!    inscribed radius,
//! 3. a translucent circle of half the inscribed radius, pushed sideways by
//!    the offset oscillator, with an outline whose width follows the size of
//!    the push.

use kurbo::{Affine, BezPath, Circle, Point, Shape};

use crate::animate::Animated;
use crate::canvas::{Canvas, CanvasError};
use crate::oscillator::Oscillator;
use crate::paint::{Color, LinearGradient, PATH_TOLERANCE, Paint, RadialGradient};

/// Gap between the vignette's outer edge and the nearer canvas edge.
pub const EDGE_MARGIN: u32 = 5;

/// Opacity of the circle's fill and outline.
const CIRCLE_ALPHA: f64 = 0.3;

/// Seeds for the background oscillators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundConfig {
    /// Channel oscillators `c1..c4`.
    pub channels: [Oscillator; 4],
    /// Horizontal circle offset.
    pub offset: Oscillator,
}

impl BackgroundConfig {
    /// The stock seeds: `c1..c4 = 0, 1, 0.3, 0.8` stepping by
    /// `0.01, 0.02, 0.03, 0.04` in `[0, 1]`, and an offset starting at `0`
    /// stepping by `1.2` in `[-50, 50]`.
    pub const DEFAULT: Self = Self {
        channels: [
            Oscillator::unit(0.0, 0.01),
            Oscillator::unit(1.0, 0.02),
            Oscillator::unit(0.3, 0.03),
            Oscillator::unit(0.8, 0.04),
        ],
        offset: Oscillator::new(0.0, 1.2, -50.0, 50.0),
    };
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Radius of the vignette for a canvas of the given size.
///
/// Half the smaller dimension (integer halving) minus [`EDGE_MARGIN`]. Can be
/// zero or negative on canvases smaller than the margin.
#[must_use]
pub fn inscribed_radius(width: u32, height: u32) -> f64 {
    f64::from((width / 2).min(height / 2)) - f64::from(EDGE_MARGIN)
}

/// The background animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    channels: [Oscillator; 4],
    offset: Oscillator,
}

impl Background {
    /// Creates a background from the given seeds.
    #[must_use]
    pub const fn new(config: BackgroundConfig) -> Self {
        Self {
            channels: config.channels,
            offset: config.offset,
        }
    }

    /// Current channel values `[c1, c2, c3, c4]`.
    #[must_use]
    pub fn channels(&self) -> [f64; 4] {
        self.channels.map(|osc| osc.value())
    }

    /// The channel oscillators, for inspecting steps and bounds.
    #[must_use]
    pub const fn channel_oscillators(&self) -> &[Oscillator; 4] {
        &self.channels
    }

    /// The horizontal offset oscillator.
    #[must_use]
    pub const fn offset(&self) -> &Oscillator {
        &self.offset
    }

    /// The diagonal gradient for the current channel values.
    #[must_use]
    pub fn gradient(&self, width: u32, height: u32) -> LinearGradient {
        let [c1, c2, c3, c4] = self.channels();
        LinearGradient::new((0.0, 0.0), (f64::from(width), f64::from(height)))
            .with_stop(0.0, Color::rgb(c1, c3, c4))
            .with_stop(0.25, Color::rgb(c1, c3, c4))
            .with_stop(0.5, Color::rgb(c2, c3, c4))
            .with_stop(0.75, Color::rgb(c1, c4, c3))
            .with_stop(1.0, Color::rgb(c1, c4, c3))
    }

    /// The vignette mask for a canvas of the given size.
    #[must_use]
    pub fn vignette(width: u32, height: u32) -> RadialGradient {
        let radius = inscribed_radius(width, height);
        RadialGradient::new(center(width, height), radius * 0.5, radius)
            .with_stop(0.0, Color::BLACK)
            .with_stop(1.0, Color::TRANSPARENT)
    }

    /// The drifting circle for a canvas of the given size.
    #[must_use]
    pub fn circle(&self, width: u32, height: u32) -> Circle {
        let c = center(width, height);
        let radius = inscribed_radius(width, height) / 2.0;
        Circle::new((c.x + self.offset.value(), c.y), radius)
    }

    /// Outline width: a fifth of the current offset's magnitude.
    #[must_use]
    pub fn outline_width(&self) -> f64 {
        libm::fabs(self.offset.value()) / 5.0
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(BackgroundConfig::DEFAULT)
    }
}

fn center(width: u32, height: u32) -> Point {
    Point::new(f64::from(width) / 2.0, f64::from(height) / 2.0)
}

impl<C: Canvas> Animated<C> for Background {
    fn tick(&mut self) {
        for channel in &mut self.channels {
            channel.advance();
        }
        self.offset.advance();
    }

    /// Paints the frame from the current values. Canvases too small to hold
    /// a positive vignette radius are left untouched.
    fn render(&self, canvas: &mut C) -> Result<(), CanvasError> {
        let (width, height) = (canvas.width(), canvas.height());
        if inscribed_radius(width, height) <= 0.0 {
            return Ok(());
        }

        let gradient = Paint::Linear(self.gradient(width, height));
        let vignette = Paint::Radial(Self::vignette(width, height));
        canvas.mask(&gradient, &vignette);

        let [_, _, c3, c4] = self.channels();
        let circle: BezPath = self.circle(width, height).to_path(PATH_TOLERANCE);
        canvas.fill(
            &circle,
            &Paint::Solid(Color::rgba(c4, c4, c3, CIRCLE_ALPHA)),
            Affine::IDENTITY,
        );
        canvas.stroke(
            &circle,
            &Paint::Solid(Color::BLACK.with_alpha(CIRCLE_ALPHA)),
            self.outline_width(),
            Affine::IDENTITY,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingCanvas};

    fn tick(bg: &mut Background) {
        <Background as Animated<RecordingCanvas>>::tick(bg);
    }

    #[test]
    fn one_tick_from_stock_seeds() {
        let mut bg = Background::default();
        tick(&mut bg);

        let [c1, c2, c3, c4] = bg.channels();
        assert_eq!(c1, 0.0 + 0.01, "c1 rises");
        assert_eq!(c2, 1.0 + 0.02, "c2 overshoots, not clamped");
        assert_eq!(c3, 0.3 + 0.03, "c3 rises");
        assert_eq!(c4, 0.8 + 0.04, "c4 rises");
        assert_eq!(bg.offset().value(), 1.2, "offset rises");

        let deltas = bg.channel_oscillators().map(|osc| osc.delta());
        assert_eq!(deltas, [0.01, -0.02, 0.03, 0.04], "only c2 reflected");
        assert_eq!(bg.offset().delta(), 1.2, "offset still rising");
    }

    #[test]
    fn radius_uses_integer_halving() {
        assert_eq!(inscribed_radius(640, 480), 235.0, "min(320, 240) - 5");
        assert_eq!(inscribed_radius(641, 481), 235.0, "odd sizes round down");
        assert_eq!(inscribed_radius(8, 100), -1.0, "tiny canvases go negative");
    }

    #[test]
    fn gradient_stop_layout() {
        let bg = Background::default();
        let g = bg.gradient(640, 480);
        assert_eq!(g.end, Point::new(640.0, 480.0), "spans the diagonal");
        let offsets: [f64; 5] = core::array::from_fn(|i| g.stops[i].offset);
        assert_eq!(offsets, [0.0, 0.25, 0.5, 0.75, 1.0], "five fixed stops");
        assert_eq!(g.stops[2].color, Color::rgb(1.0, 0.3, 0.8), "middle stop uses c2");
        assert_eq!(g.stops[4].color, Color::rgb(0.0, 0.8, 0.3), "tail swaps c3 and c4");
    }

    #[test]
    fn render_emits_mask_fill_stroke() {
        let bg = Background::default();
        let mut canvas = RecordingCanvas::new(640, 480);
        bg.render(&mut canvas).expect("recording canvas never fails");

        assert_eq!(canvas.ops.len(), 3, "mask, fill, stroke");
        let Op::Mask { mask, .. } = &canvas.ops[0] else {
            panic!("first op should be the masked gradient, got {:?}", canvas.ops[0]);
        };
        let Paint::Radial(vignette) = mask else {
            panic!("mask should be radial, got {mask:?}");
        };
        assert_eq!(vignette.center, Point::new(320.0, 240.0), "centered");
        assert_eq!(vignette.start_radius, 117.5, "opaque to half the radius");
        assert_eq!(vignette.end_radius, 235.0, "transparent at the radius");

        let expected_circle = Circle::new((320.0, 240.0), 117.5).to_path(PATH_TOLERANCE);
        match &canvas.ops[1] {
            Op::Fill { path, paint, .. } => {
                assert_eq!(path, &expected_circle, "circle at center, no offset yet");
                assert_eq!(
                    paint,
                    &Paint::Solid(Color::rgba(0.8, 0.8, 0.3, 0.3)),
                    "fill mixes c4, c4, c3"
                );
            }
            op => panic!("expected fill, got {op:?}"),
        }
        match &canvas.ops[2] {
            Op::Stroke { line_width, .. } => {
                assert_eq!(*line_width, 0.0, "offset 0 gives a zero-width outline");
            }
            op => panic!("expected stroke, got {op:?}"),
        }
    }

    #[test]
    fn offset_moves_circle_and_widens_outline() {
        let mut bg = Background::default();
        for _ in 0..10 {
            tick(&mut bg);
        }
        let offset = bg.offset().value();
        let circle = bg.circle(640, 480);
        assert_eq!(circle.center.x, 320.0 + offset, "pushed right");
        assert_eq!(bg.outline_width(), libm::fabs(offset) / 5.0, "a fifth of the push");
    }

    #[test]
    fn tiny_canvas_draws_nothing() {
        let bg = Background::default();
        let mut canvas = RecordingCanvas::new(10, 10);
        bg.render(&mut canvas).expect("no failure on tiny canvases");
        assert!(canvas.ops.is_empty(), "radius 0 leaves the canvas alone");
    }
}
