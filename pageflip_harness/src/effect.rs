// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An effect that records its hook calls.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use pageflip_core::effect::PageEffect;
use pageflip_core::state::Direction;
use pageflip_core::turner::TurnCore;

use crate::host::PageShot;

/// One hook invocation, with what the effect could see at the time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HookCall {
    /// `on_scroll_start`.
    ScrollStart {
        /// Direction of the turn.
        direction: Direction,
        /// Whether the pointer was retracting.
        cancelled: bool,
        /// Snapshot held by the controller.
        snapshot: Option<PageShot>,
        /// Touch point at the call.
        touch: Point,
    },
    /// `on_scroll`.
    Scroll {
        /// Touch point after the move.
        touch: Point,
    },
    /// `on_draw`.
    Draw,
    /// `on_scroll_stop`.
    ScrollStop {
        /// Direction of the turn.
        direction: Direction,
        /// Snapshot still held by the controller.
        snapshot: Option<PageShot>,
        /// Final touch point.
        touch: Point,
    },
}

/// A slide-style effect that logs every hook call.
///
/// On `on_scroll_start` it settles the touch point horizontally: to the left
/// edge for a forward turn, to the right edge for a backward one, and back to
/// the start point when the turn was cancelled. Drawing pushes the touch
/// point onto the surface.
#[derive(Clone, Debug, Default)]
pub struct RecordingEffect {
    calls: Vec<HookCall>,
    /// When set, `on_scroll_start` is logged but no glide starts.
    pub passive: bool,
}

impl RecordingEffect {
    /// Creates an effect with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every hook call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[HookCall] {
        &self.calls
    }

    /// The `on_scroll_start` calls.
    pub fn starts(&self) -> impl Iterator<Item = &HookCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, HookCall::ScrollStart { .. }))
    }

    /// The `on_scroll_stop` calls.
    pub fn stops(&self) -> impl Iterator<Item = &HookCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, HookCall::ScrollStop { .. }))
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

/// Horizontal distance the settle animation travels.
#[must_use]
pub fn settle_dx(
    direction: Direction,
    cancelled: bool,
    start: Point,
    touch: Point,
    width: f64,
) -> f64 {
    if cancelled {
        return start.x - touch.x;
    }
    match direction {
        Direction::Next => -touch.x,
        Direction::Prev => width - touch.x,
        Direction::None => 0.0,
    }
}

impl PageEffect<PageShot> for RecordingEffect {
    type Surface = Vec<Point>;

    fn on_scroll_start(&mut self, turn: &mut TurnCore<PageShot>) {
        let direction = turn.direction();
        let cancelled = turn.state().is_cancel();
        self.calls.push(HookCall::ScrollStart {
            direction,
            cancelled,
            snapshot: turn.snapshot().copied(),
            touch: turn.touch_point(),
        });
        if self.passive {
            return;
        }
        let dx = settle_dx(
            direction,
            cancelled,
            turn.start_point(),
            turn.touch_point(),
            turn.viewport().width,
        );
        let duration = turn.duration_for(dx);
        turn.start_glide(Vec2::new(dx, 0.0), duration);
    }

    fn on_scroll(&mut self, turn: &mut TurnCore<PageShot>) {
        self.calls.push(HookCall::Scroll {
            touch: turn.touch_point(),
        });
    }

    fn on_draw(&mut self, turn: &TurnCore<PageShot>, surface: &mut Vec<Point>) {
        self.calls.push(HookCall::Draw);
        surface.push(turn.touch_point());
    }

    fn on_scroll_stop(&mut self, turn: &mut TurnCore<PageShot>) {
        self.calls.push(HookCall::ScrollStop {
            direction: turn.direction(),
            snapshot: turn.snapshot().copied(),
            touch: turn.touch_point(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_targets() {
        let start = Point::new(500.0, 1000.0);
        let touch = Point::new(300.0, 1000.0);
        assert_eq!(settle_dx(Direction::Next, false, start, touch, 1000.0), -300.0);
        assert_eq!(settle_dx(Direction::Prev, false, start, touch, 1000.0), 700.0);
        assert_eq!(settle_dx(Direction::Next, true, start, touch, 1000.0), 200.0);
        assert_eq!(settle_dx(Direction::None, false, start, touch, 1000.0), 0.0);
    }
}
