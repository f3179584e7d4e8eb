// Copyright 2026 the Shimmer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-cadence tick source.
//!
//! The [`FrameTimer`] does not read a clock. The host passes the current
//! [`HostTime`] to [`FrameTimer::poll`] whenever it wakes up and sleeps until
//! [`FrameTimer::next_deadline`] in between. A late wake-up fires once and
//! re-arms from the wake-up time, so a stalled host never bursts through a
//! backlog of missed ticks.

use crate::time::{Duration, HostTime, Timebase};

/// Configuration for a [`FrameTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerConfig {
    /// Time between ticks.
    pub interval: Duration,
}

impl TimerConfig {
    /// A nominal 60 Hz cadence in a nanosecond timebase.
    ///
    /// Uses whole milliseconds (`1000 / 60 = 16`), so the real rate is
    /// slightly above 60 Hz.
    #[must_use]
    pub const fn sixty_hz() -> Self {
        Self::from_millis(1000 / 60, Timebase::NANOS)
    }

    /// A cadence of `millis` milliseconds in the given timebase.
    #[must_use]
    pub const fn from_millis(millis: u64, timebase: Timebase) -> Self {
        Self {
            interval: Duration::from_millis(millis, timebase),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::sixty_hz()
    }
}

/// Fixed-interval timer polled by the host.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer {
    interval: Duration,
    deadline: HostTime,
    fired: u64,
}

impl FrameTimer {
    /// Creates a timer whose first tick is due one interval after `now`.
    #[must_use]
    pub const fn new(config: TimerConfig, now: HostTime) -> Self {
        Self {
            interval: config.interval,
            deadline: now.saturating_add(config.interval),
            fired: 0,
        }
    }

    /// When the next tick is due.
    #[must_use]
    pub const fn next_deadline(&self) -> HostTime {
        self.deadline
    }

    /// The configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks fired so far.
    #[must_use]
    pub const fn fired(&self) -> u64 {
        self.fired
    }

    /// Returns `true` if a tick is due at `now`, and re-arms for
    /// `now + interval`.
    ///
    /// Fires at most once per call regardless of how many intervals have
    /// elapsed.
    pub fn poll(&mut self, now: HostTime) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now.saturating_add(self.interval);
        self.fired += 1;
        true
    }
}
