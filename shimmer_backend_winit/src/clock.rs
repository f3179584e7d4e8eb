// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host clock reads.

use std::time::Instant;

use shimmer_core::time::{HostTime, Timebase};

/// Returns the host [`Timebase`]: ticks are nanoseconds.
#[must_use]
pub const fn timebase() -> Timebase {
    Timebase::NANOS
}

/// A source of [`HostTime`] readings.
pub(crate) trait Clock {
    fn now(&self) -> HostTime;
}

/// Monotonic nanoseconds since the clock was created.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Converts a host time back to an [`Instant`] for `ControlFlow::WaitUntil`.
    pub(crate) fn instant_at(&self, t: HostTime) -> Instant {
        self.origin + std::time::Duration::from_nanos(t.ticks())
    }

    fn host_time(&self, at: Instant) -> HostTime {
        let nanos = at.saturating_duration_since(self.origin).as_nanos();
        HostTime(u64::try_from(nanos).unwrap_or(u64::MAX))
    }
}

impl Clock for InstantClock {
    fn now(&self) -> HostTime {
        self.host_time(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timebase_is_nanos_identity() {
        assert_eq!(timebase(), Timebase::NANOS, "nanosecond ticks");
    }

    #[test]
    fn now_is_monotonic_non_decreasing() {
        let clock = InstantClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a, "monotonic: {a:?} then {b:?}");
    }

    #[test]
    fn instant_round_trip() {
        let clock = InstantClock::new();
        let t = HostTime(16_000_000);
        assert_eq!(clock.host_time(clock.instant_at(t)), t, "exact in nanoseconds");
    }

    #[test]
    fn instants_before_origin_saturate() {
        let clock = InstantClock::new();
        let earlier = clock
            .origin
            .checked_sub(std::time::Duration::from_millis(5))
            .unwrap_or(clock.origin);
        assert_eq!(clock.host_time(earlier), HostTime(0), "clamped to zero");
    }
}
