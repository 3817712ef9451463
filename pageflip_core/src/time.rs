// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic frame time.
//!
//! [`FrameTime`] is a point on the host's monotonic clock, in microseconds
//! from an arbitrary epoch. Hosts stamp every pointer event and every frame
//! poll with one; the core never reads a clock itself.
//!
//! Spans between two frame times are plain [`core::time::Duration`] values.

use core::fmt;
use core::ops::Add;
use core::time::Duration;

/// A point in time on the host's monotonic clock, in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FrameTime(pub u64);

impl FrameTime {
    /// Time zero. Handy as the epoch for scripted input.
    pub const ZERO: Self = Self(0);

    /// Creates a frame time from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    /// Returns the span between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration::from_micros(self.0.saturating_sub(earlier.0))
    }
}

impl Add<Duration> for FrameTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(duration_micros(rhs)))
    }
}

impl fmt::Debug for FrameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameTime({}µs)", self.0)
    }
}

/// Whole microseconds in `d`, saturating at `u64::MAX`.
#[inline]
#[must_use]
pub(crate) fn duration_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_are_scaled_to_micros() {
        assert_eq!(FrameTime::from_millis(16).as_micros(), 16_000);
    }

    #[test]
    fn saturating_since_clamps_to_zero() {
        let t = FrameTime(1_000);
        assert_eq!(t.saturating_duration_since(FrameTime(1_500)), Duration::ZERO);
        assert_eq!(
            t.saturating_duration_since(FrameTime(400)),
            Duration::from_micros(600)
        );
    }

    #[test]
    fn adding_a_duration() {
        let t = FrameTime::from_millis(10) + Duration::from_millis(5);
        assert_eq!(t, FrameTime::from_millis(15));
        assert_eq!(FrameTime(u64::MAX) + Duration::from_secs(1), FrameTime(u64::MAX));
    }
}
