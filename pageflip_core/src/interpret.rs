// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input handling for [`PageTurner`].
//!
//! Raw samples go through the [`GestureDetector`](crate::gesture::GestureDetector)
//! and each recognized step is mapped onto the turn:
//!
//! - **down** starts a fresh gesture at the pointer.
//! - **tap** turns toward the half of the viewport that was tapped.
//! - **drag** locks a direction on the first horizontally dominant sample,
//!   then follows the pointer, flipping between tracking and cancelling as
//!   the pointer moves with or against that direction.
//! - **up after a locked drag** hands the turn to the effect to settle.
//! - **cancel** abandons an uncommitted gesture.
//!
//! Everything is refused while a turn is in flight.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::effect::PageEffect;
use crate::gesture::{GestureEvent, PointerEvent, PointerKind};
use crate::host::PageHost;
use crate::state::Direction;
use crate::trace::{DirectionSource, GestureTraceEvent, Rejected};
use crate::turner::PageTurner;

impl<S, E: PageEffect<S>> PageTurner<S, E> {
    /// Feeds one pointer sample.
    ///
    /// Returns whether the sample was consumed. Samples arriving while a turn
    /// is in flight are refused and return `false`.
    pub fn on_touch_event<H>(&mut self, host: &H, event: &PointerEvent) -> bool
    where
        H: PageHost<Snapshot = S> + ?Sized,
    {
        if self.core.state.is_started() {
            self.core.tracer.rejected(&Rejected::Pointer(event.kind));
            return false;
        }

        match event.kind {
            PointerKind::Up if self.core.state.is_moved() => {
                // The detector still has to see the up to end its press.
                if let Some(release) = self.detector.on_pointer(event) {
                    self.trace_gesture(event, release, true);
                }
                if !self.core.state.no_next() {
                    self.hand_off();
                }
                return true;
            }
            PointerKind::Cancel => {
                self.detector.reset();
                self.core.abandon();
                return false;
            }
            _ => {}
        }

        let Some(gesture) = self.detector.on_pointer(event) else {
            return false;
        };
        let handled = match gesture {
            GestureEvent::Down { position } => self.on_down(position),
            GestureEvent::SingleTapUp { position } => self.on_tap(host, position),
            GestureEvent::Scroll {
                position, delta, ..
            } => self.on_drag(host, position, delta),
            GestureEvent::LongPress { .. } | GestureEvent::Release { .. } => false,
        };
        self.trace_gesture(event, gesture, handled);
        handled
    }

    fn on_down(&mut self, position: Point) -> bool {
        self.core.state.reset_gesture();
        self.core.snapshot = None;
        self.core.set_start(position, true);
        true
    }

    fn on_tap<H>(&mut self, host: &H, position: Point) -> bool
    where
        H: PageHost<Snapshot = S> + ?Sized,
    {
        let half = (self.core.viewport().width / 2.0).floor();
        let direction = if position.x > half {
            Direction::Next
        } else {
            Direction::Prev
        };
        if self.core.resolve(host, direction, DirectionSource::Tap) {
            self.set_touch(position, true);
            self.hand_off();
        }
        true
    }

    fn on_drag<H>(&mut self, host: &H, position: Point, delta: Vec2) -> bool
    where
        H: PageHost<Snapshot = S> + ?Sized,
    {
        if self.core.state.no_next() {
            return true;
        }
        if !self.core.state.is_moved() {
            if delta.x.abs() <= delta.y.abs() {
                return false;
            }
            let direction = Direction::from_drag(delta.x);
            if !self.core.resolve(host, direction, DirectionSource::Drag) {
                return true;
            }
        }
        let cancel = self.core.direction().is_retraction(delta.x);
        self.core.state.track(cancel);
        self.set_touch(position, true);
        true
    }

    fn trace_gesture(&mut self, event: &PointerEvent, gesture: GestureEvent, handled: bool) {
        self.core.tracer.gesture(&GestureTraceEvent {
            time: event.time,
            gesture,
            handled,
        });
    }
}
