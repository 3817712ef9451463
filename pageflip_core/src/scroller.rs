// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based scroll simulation for the settle animation.
//!
//! [`Scroller`] moves a point from a start position by a fixed delta over a
//! fixed duration, shaped by an [`Interpolator`]. It does not own a clock:
//! callers pass the frame time to [`compute_scroll_offset`] once per frame.
//!
//! The start instant is anchored by the first poll after
//! [`start_scroll`](Scroller::start_scroll), so code that starts an animation
//! from an input callback does not need to know the current frame time.
//!
//! [`compute_scroll_offset`]: Scroller::compute_scroll_offset

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{CubicBez, ParamCurve, Point, Vec2};

use crate::time::FrameTime;

/// Timing curve mapping elapsed fraction to travelled fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interpolator {
    /// Constant speed.
    Linear,
    /// Starts fast and decelerates into the resting point (`1 - (1 - t)²`).
    #[default]
    EaseOut,
    /// Material "fast out, linear in": cubic Bézier `(0.4, 0) (1, 1)`.
    /// Accelerates away from the start and arrives at full speed.
    FastOutLinearIn,
}

impl Interpolator {
    /// Maps `t` in `[0, 1]` to the travelled fraction. Values outside the
    /// range are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let r = 1.0 - t;
                1.0 - r * r
            }
            Self::FastOutLinearIn => {
                let curve = CubicBez::new((0.0, 0.0), (0.4, 0.0), (1.0, 1.0), (1.0, 1.0));
                solve_for_x(&curve, t)
            }
        }
    }
}

/// Evaluates `y` at the parameter where the monotonic easing curve reaches
/// `x`, by bisection.
fn solve_for_x(curve: &CubicBez, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..40 {
        let mid = 0.5 * (lo + hi);
        if curve.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval(0.5 * (lo + hi)).y
}

/// A point travelling from `start` to `start + delta` over `duration`.
#[derive(Clone, Debug)]
pub struct Scroller {
    interpolator: Interpolator,
    start: Point,
    delta: Vec2,
    current: Point,
    duration: Duration,
    started_at: Option<FrameTime>,
    finished: bool,
}

impl Scroller {
    /// Creates an idle, finished scroller.
    #[must_use]
    pub const fn new(interpolator: Interpolator) -> Self {
        Self {
            interpolator,
            start: Point::ORIGIN,
            delta: Vec2::ZERO,
            current: Point::ORIGIN,
            duration: Duration::ZERO,
            started_at: None,
            finished: true,
        }
    }

    /// Starts travelling from `start` by `delta` over `duration`. Replaces any
    /// animation in progress.
    pub fn start_scroll(&mut self, start: Point, delta: Vec2, duration: Duration) {
        self.start = start;
        self.delta = delta;
        self.current = start;
        self.duration = duration;
        self.started_at = None;
        self.finished = false;
    }

    /// Advances to `now`.
    ///
    /// Returns `true` while there is a position to report, including the poll
    /// that lands on the final position, and `false` once finished.
    pub fn compute_scroll_offset(&mut self, now: FrameTime) -> bool {
        if self.finished {
            return false;
        }
        let t0 = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(t0);
        if elapsed < self.duration {
            let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.current = self.start + self.delta * self.interpolator.apply(t);
        } else {
            self.current = self.final_position();
            self.finished = true;
        }
        true
    }

    /// Stops the animation and jumps to the final position.
    pub fn abort_animation(&mut self) {
        self.current = self.final_position();
        self.finished = true;
    }

    /// Whether the animation has reached (or been forced to) its end.
    #[inline]
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Position reported by the last poll.
    #[inline]
    #[must_use]
    pub const fn current_position(&self) -> Point {
        self.current
    }

    /// Where the animation ends.
    #[inline]
    #[must_use]
    pub fn final_position(&self) -> Point {
        self.start + self.delta
    }

    /// Total animation duration.
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

/// Duration for settling over `distance` when a full `width` takes `base`.
///
/// Scales linearly and is not clamped, so distances beyond the width take
/// longer than `base`. Truncated to whole milliseconds. A non-positive or
/// non-finite width yields zero.
#[must_use]
pub fn duration_for(distance: f64, width: f64, base: Duration) -> Duration {
    if !width.is_finite() || width <= 0.0 || !distance.is_finite() {
        return Duration::ZERO;
    }
    let ms = base.as_millis() as f64 * distance.abs() / width;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "ms is finite and non-negative; truncation to whole milliseconds is intended"
    )]
    let whole = ms.floor() as u64;
    Duration::from_millis(whole)
}
