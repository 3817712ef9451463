// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed pointer scripts and a fixed-rate frame clock.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use pageflip_core::effect::PageEffect;
use pageflip_core::gesture::{PointerEvent, PointerKind};
use pageflip_core::host::PageHost;
use pageflip_core::time::FrameTime;
use pageflip_core::turner::PageTurner;

/// Spacing between scripted samples and between polled frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// Polls after which [`run_to_idle`] gives up.
pub const MAX_FRAMES: u32 = 10_000;

/// A sequence of pointer samples on a private clock.
///
/// Each sample is stamped one [`FRAME`] after the previous one, unless
/// [`wait`](Self::wait) inserts a longer gap.
#[derive(Clone, Debug)]
pub struct GestureScript {
    events: Vec<PointerEvent>,
    clock: FrameTime,
}

impl GestureScript {
    /// Starts an empty script whose first sample is stamped `at`.
    #[must_use]
    pub const fn new(at: FrameTime) -> Self {
        Self {
            events: Vec::new(),
            clock: at,
        }
    }

    /// Down and up at `p`.
    #[must_use]
    pub fn tap(p: Point, at: FrameTime) -> Self {
        Self::new(at).down(p).up(p)
    }

    /// Down at `from`, `steps` evenly spaced moves ending at `to`, then up at
    /// `to`.
    #[must_use]
    pub fn drag(from: Point, to: Point, steps: u32, at: FrameTime) -> Self {
        let mut script = Self::new(at).down(from);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = f64::from(i) / f64::from(steps);
            script = script.move_to(from.lerp(to, t));
        }
        script.up(to)
    }

    /// Appends a pointer-down.
    #[must_use]
    pub fn down(self, p: Point) -> Self {
        self.push(PointerKind::Down, p)
    }

    /// Appends a move.
    #[must_use]
    pub fn move_to(self, p: Point) -> Self {
        self.push(PointerKind::Move, p)
    }

    /// Appends a pointer-up.
    #[must_use]
    pub fn up(self, p: Point) -> Self {
        self.push(PointerKind::Up, p)
    }

    /// Appends a cancel.
    #[must_use]
    pub fn cancel(self, p: Point) -> Self {
        self.push(PointerKind::Cancel, p)
    }

    /// Delays the next sample by `d` beyond the usual spacing.
    #[must_use]
    pub fn wait(mut self, d: Duration) -> Self {
        self.clock = self.clock + d;
        self
    }

    /// The samples, in order.
    #[must_use]
    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Timestamp the next appended sample would get.
    #[must_use]
    pub const fn end_time(&self) -> FrameTime {
        self.clock
    }

    /// Feeds every sample to `turner` and returns what each call reported.
    pub fn play<S, E, H>(&self, turner: &mut PageTurner<S, E>, host: &H) -> Vec<bool>
    where
        E: PageEffect<S>,
        H: PageHost<Snapshot = S> + ?Sized,
    {
        self.events
            .iter()
            .map(|e| turner.on_touch_event(host, e))
            .collect()
    }

    fn push(mut self, kind: PointerKind, p: Point) -> Self {
        self.events.push(PointerEvent::new(kind, p, self.clock));
        self.clock = self.clock + FRAME;
        self
    }
}

/// Outcome of [`run_to_idle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Number of polls, including the one that stopped the turn.
    pub polls: u32,
    /// Timestamp of the last poll.
    pub finished_at: FrameTime,
}

/// Polls `turner` every [`FRAME`] from `from` until no turn is in flight.
///
/// Returns `None` if the turn is still running after [`MAX_FRAMES`] polls.
/// A controller that is already idle is polled once.
pub fn run_to_idle<S, E>(turner: &mut PageTurner<S, E>, from: FrameTime) -> Option<RunReport>
where
    E: PageEffect<S>,
{
    let mut now = from;
    for polls in 1..=MAX_FRAMES {
        turner.poll_frame(now);
        if !turner.is_started() {
            return Some(RunReport {
                polls,
                finished_at: now,
            });
        }
        now = now + FRAME;
    }
    None
}
