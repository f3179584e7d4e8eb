// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors, gradients and paint sources.
//!
//! These are plain descriptions handed to a [`Canvas`](crate::canvas::Canvas);
//! they carry no backend resources. Color components are stored as given,
//! including values outside `[0, 1]` produced by an overshooting
//! [`Oscillator`](crate::oscillator::Oscillator). Canvases clamp at the point
//! of use via [`Color::clamped`].

use alloc::vec::Vec;

use kurbo::Point;

/// Flattening tolerance used when converting shapes to paths.
pub const PATH_TOLERANCE: f64 = 0.1;

/// A straight-alpha RGBA color with `f64` components nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
    /// Alpha.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// A color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Returns the color with every component restricted to `[0, 1]`.
    ///
    /// NaN components become `0`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: clamp_unit(self.r),
            g: clamp_unit(self.g),
            b: clamp_unit(self.b),
            a: clamp_unit(self.a),
        }
    }
}

/// Restricts `v` to `[0, 1]`, mapping NaN to `0`.
#[must_use]
pub fn clamp_unit(v: f64) -> f64 {
    if v >= 1.0 {
        1.0
    } else if v > 0.0 {
        v
    } else {
        0.0
    }
}

/// A color at a relative position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at that position.
    pub color: Color,
}

/// A gradient along the line from `start` to `end`.
///
/// Outside the line the end colors extend (pad).
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    /// Position of offset `0`.
    pub start: Point,
    /// Position of offset `1`.
    pub end: Point,
    /// Stops in increasing offset order.
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Creates a gradient with no stops.
    #[must_use]
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            stops: Vec::new(),
        }
    }

    /// Appends a color stop.
    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// A gradient between two concentric circles.
///
/// Offset `0` lies on the circle of `start_radius` and offset `1` on the
/// circle of `end_radius`. Inside the start circle and outside the end
/// circle the end colors extend (pad).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    /// Shared center of both circles.
    pub center: Point,
    /// Radius of offset `0`.
    pub start_radius: f64,
    /// Radius of offset `1`.
    pub end_radius: f64,
    /// Stops in increasing offset order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Creates a gradient with no stops.
    #[must_use]
    pub fn new(center: impl Into<Point>, start_radius: f64, end_radius: f64) -> Self {
        Self {
            center: center.into(),
            start_radius,
            end_radius,
            stops: Vec::new(),
        }
    }

    /// Appends a color stop.
    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }

    /// Re-expresses the stops relative to a gradient that starts at the
    /// center (radius `0`) and ends at `end_radius`.
    ///
    /// Rasterizers that only know "radius 0 to r" gradients use this. Returns
    /// `None` when `end_radius` is not positive.
    #[must_use]
    pub fn stops_from_center(&self) -> Option<Vec<ColorStop>> {
        if self.end_radius <= 0.0 {
            return None;
        }
        let span = self.end_radius - self.start_radius;
        Some(
            self.stops
                .iter()
                .map(|stop| ColorStop {
                    offset: (self.start_radius + stop.offset * span) / self.end_radius,
                    color: stop.color,
                })
                .collect(),
        )
    }
}

/// A paint source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// A single color.
    Solid(Color),
    /// A linear gradient.
    Linear(LinearGradient),
    /// A concentric radial gradient.
    Radial(RadialGradient),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Self::Linear(gradient)
    }
}

impl From<RadialGradient> for Paint {
    fn from(gradient: RadialGradient) -> Self {
        Self::Radial(gradient)
    }
}
