// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic host time.
//!
//! [`HostTime`] is a point on the host's monotonic clock expressed in ticks.
//! The animation itself never reads it: oscillators advance per paint, not
//! per elapsed second. Host time only drives the frame timer, the fps
//! counter and trace timestamps.
//!
//! [`Timebase`] converts ticks to nanoseconds (`nanos = ticks * numer /
//! denom`). The winit host reads `std::time::Instant` and uses
//! [`Timebase::NANOS`].

use core::fmt;

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// A point in time expressed as host-clock ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// The raw tick count.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// This time in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn to_nanos(self, timebase: Timebase) -> u64 {
        timebase.ticks_to_nanos(self.0)
    }

    /// Time elapsed since `earlier`; zero if `earlier` is later.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// `self + duration`, pinned at the end of the clock.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({})", self.0)
    }
}

/// Ticks-to-nanoseconds ratio of a host clock.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timebase {
    /// Nanoseconds per `denom` ticks.
    pub numer: u32,
    /// Ticks per `numer` nanoseconds.
    pub denom: u32,
}

impl Timebase {
    /// Ticks are nanoseconds.
    pub const NANOS: Self = Self { numer: 1, denom: 1 };

    /// Creates a timebase of `numer / denom` nanoseconds per tick.
    ///
    /// # Panics
    ///
    /// Panics if `denom` is zero.
    #[inline]
    #[must_use]
    pub const fn new(numer: u32, denom: u32) -> Self {
        assert!(denom != 0, "timebase denominator must not be zero");
        Self { numer, denom }
    }

    /// Converts ticks to nanoseconds, rounding down.
    #[inline]
    #[must_use]
    pub const fn ticks_to_nanos(self, ticks: u64) -> u64 {
        scale(ticks, self.numer, self.denom)
    }

    /// Converts nanoseconds to ticks, rounding down.
    #[inline]
    #[must_use]
    pub const fn nanos_to_ticks(self, nanos: u64) -> u64 {
        scale(nanos, self.denom, self.numer)
    }
}

impl fmt::Debug for Timebase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timebase({}/{})", self.numer, self.denom)
    }
}

/// `v * mul / div` through a 128-bit intermediate, saturating at `u64::MAX`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is clamped to u64::MAX before narrowing"
)]
const fn scale(v: u64, mul: u32, div: u32) -> u64 {
    if div == 0 {
        return u64::MAX;
    }
    let wide = v as u128 * mul as u128 / div as u128;
    if wide > u64::MAX as u128 {
        u64::MAX
    } else {
        wide as u64
    }
}

/// A span of host-clock ticks.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// No time at all.
    pub const ZERO: Self = Self(0);

    /// The raw tick count.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// `millis` whole milliseconds in the given timebase.
    #[inline]
    #[must_use]
    pub const fn from_millis(millis: u64, timebase: Timebase) -> Self {
        Self(timebase.nanos_to_ticks(millis.saturating_mul(NANOS_PER_MILLI)))
    }

    /// This span in nanoseconds.
    #[inline]
    #[must_use]
    pub const fn to_nanos(self, timebase: Timebase) -> u64 {
        timebase.ticks_to_nanos(self.0)
    }

    /// This span in fractional seconds.
    #[inline]
    #[must_use]
    pub fn as_secs_f64(self, timebase: Timebase) -> f64 {
        self.to_nanos(timebase) as f64 / NANOS_PER_SECOND
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_in_nanosecond_timebase() {
        let d = Duration::from_millis(16, Timebase::NANOS);
        assert_eq!(d.ticks(), 16_000_000, "16ms is 16e6 ns");
        assert_eq!(d.to_nanos(Timebase::NANOS), 16_000_000, "identity timebase");
    }

    #[test]
    fn millis_in_coarse_timebase() {
        // 24 MHz counter: 125/3 ns per tick.
        let tb = Timebase::new(125, 3);
        let d = Duration::from_millis(1000, tb);
        assert_eq!(d.ticks(), 24_000_000, "one second is 24e6 ticks");
        assert_eq!(HostTime(d.ticks()).to_nanos(tb), 1_000_000_000, "and back");
    }

    #[test]
    fn seconds_as_float() {
        let d = Duration(2_500_000_000);
        let secs = d.as_secs_f64(Timebase::NANOS);
        assert!(libm::fabs(secs - 2.5) < 1e-12, "2.5s, got {secs}");
    }

    #[test]
    fn saturating_arithmetic() {
        let t = HostTime(1000);
        assert_eq!(
            t.saturating_duration_since(HostTime(400)),
            Duration(600),
            "plain difference"
        );
        assert_eq!(
            t.saturating_duration_since(HostTime(1500)),
            Duration::ZERO,
            "later start clamps to zero"
        );
        assert_eq!(
            HostTime(u64::MAX).saturating_add(Duration(1)),
            HostTime(u64::MAX),
            "end of the clock"
        );
    }

    #[test]
    fn conversions_saturate() {
        let fast = Timebase::new(u32::MAX, 1);
        assert_eq!(fast.ticks_to_nanos(u64::MAX), u64::MAX, "no wraparound");
    }
}
