// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded oscillating scalars.
//!
//! An [`Oscillator`] walks a value by a fixed step each tick and bounces off
//! the ends of its interval. The bounce is applied *after* the step: the
//! value is never clamped, so the tick that crosses a bound leaves the value
//! one step outside the interval and only flips the direction. The next tick
//! steps back inside.
//!
//! ```text
//!   max ─────────────•──────────     value overshoots once
//!                  •   •
//!                •       •
//!   min ───────•───────────•────
//! ```
//!
//! Every animated quantity in the scene is an `Oscillator`: the four
//! background color components, the circle offset, and the sprite's opacity
//! and scale factors.

/// A scalar that advances by `delta` per tick and reverses at either bound.
///
/// # Preconditions
///
/// `min < max` and `delta != 0.0`. These are not checked: with `min >= max`
/// the value reverses every tick, and with a zero step it never moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    value: f64,
    delta: f64,
    min: f64,
    max: f64,
}

impl Oscillator {
    /// Creates an oscillator at `value`, stepping by `delta` inside
    /// `[min, max]`.
    #[must_use]
    pub const fn new(value: f64, delta: f64, min: f64, max: f64) -> Self {
        Self {
            value,
            delta,
            min,
            max,
        }
    }

    /// Creates an oscillator bounded to the unit interval `[0, 1]`.
    #[must_use]
    pub const fn unit(value: f64, delta: f64) -> Self {
        Self::new(value, delta, 0.0, 1.0)
    }

    /// Advances by one tick.
    ///
    /// Adds the current step, then negates the step if the new value lies
    /// outside `[min, max]`. The value itself is left where it landed.
    #[inline]
    pub fn advance(&mut self) {
        self.value += self.delta;
        if self.value > self.max || self.value < self.min {
            self.delta = -self.delta;
        }
    }

    /// Advances by `ticks` ticks.
    pub fn advance_by(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.advance();
        }
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Current signed step.
    #[inline]
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.delta
    }

    /// Lower bound.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` while the value sits outside `[min, max]`, which only
    /// happens on the tick right after a bound was crossed.
    #[must_use]
    pub fn is_overshooting(&self) -> bool {
        self.value > self.max || self.value < self.min
    }
}
