// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pointer gesture recognition.
//!
//! [`GestureDetector`] turns raw [`PointerEvent`]s into [`GestureEvent`]s:
//!
//! ```text
//!   Down ─┬─ Up inside slop ──────────────► SingleTapUp
//!         ├─ held past long-press timeout ─► LongPress (no tap follows)
//!         └─ Move beyond slop ─► Scroll* ─► Up ─► Release
//! ```
//!
//! The slop circle is centred on the down point. Once a pointer leaves it the
//! press can no longer become a tap, even if it returns. Long presses are
//! detected from event timestamps rather than a timer, so a long press is
//! reported on the first move or up after the timeout elapses.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::time::FrameTime;

/// What happened to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// The pointer touched down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted.
    Up,
    /// The platform took the pointer away (e.g. a parent started scrolling).
    Cancel,
}

/// A raw pointer sample delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Sample kind.
    pub kind: PointerKind,
    /// Position in viewport coordinates.
    pub position: Point,
    /// When the sample was taken.
    pub time: FrameTime,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub const fn new(kind: PointerKind, position: Point, time: FrameTime) -> Self {
        Self {
            kind,
            position,
            time,
        }
    }

    /// A pointer-down sample.
    #[must_use]
    pub const fn down(position: Point, time: FrameTime) -> Self {
        Self::new(PointerKind::Down, position, time)
    }

    /// A pointer-move sample.
    #[must_use]
    pub const fn moved(position: Point, time: FrameTime) -> Self {
        Self::new(PointerKind::Move, position, time)
    }

    /// A pointer-up sample.
    #[must_use]
    pub const fn up(position: Point, time: FrameTime) -> Self {
        Self::new(PointerKind::Up, position, time)
    }

    /// A cancel sample.
    #[must_use]
    pub const fn cancel(position: Point, time: FrameTime) -> Self {
        Self::new(PointerKind::Cancel, position, time)
    }
}

/// A recognized gesture step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A new press began.
    Down {
        /// Where the pointer touched down.
        position: Point,
    },
    /// The pointer is dragging.
    Scroll {
        /// Where the press began.
        origin: Point,
        /// The latest pointer position.
        position: Point,
        /// Movement since the previous scroll sample (or since the down point
        /// for the first one).
        delta: Vec2,
    },
    /// The pointer lifted without leaving the slop circle.
    SingleTapUp {
        /// Where the pointer lifted.
        position: Point,
    },
    /// The pointer stayed inside the slop circle past the long-press timeout.
    LongPress {
        /// Where the pointer was held.
        position: Point,
    },
    /// The pointer lifted after dragging.
    Release {
        /// Where the pointer lifted.
        position: Point,
    },
}

impl GestureEvent {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Scroll { .. } => "scroll",
            Self::SingleTapUp { .. } => "tap",
            Self::LongPress { .. } => "long-press",
            Self::Release { .. } => "release",
        }
    }

    /// The pointer position the event refers to.
    #[must_use]
    pub const fn position(&self) -> Point {
        match *self {
            Self::Down { position }
            | Self::Scroll { position, .. }
            | Self::SingleTapUp { position }
            | Self::LongPress { position }
            | Self::Release { position } => position,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Press {
    origin: Point,
    last: Point,
    at: FrameTime,
    in_tap_region: bool,
    long_pressed: bool,
}

/// Classifies one pointer's down-move-up sequence.
#[derive(Clone, Debug)]
pub struct GestureDetector {
    touch_slop: f64,
    long_press_timeout: Option<Duration>,
    press: Option<Press>,
}

impl GestureDetector {
    /// Creates a detector with the given slop radius and long-press timeout.
    #[must_use]
    pub const fn new(touch_slop: f64, long_press_timeout: Option<Duration>) -> Self {
        Self {
            touch_slop,
            long_press_timeout,
            press: None,
        }
    }

    /// Whether a press is in progress.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Forgets the current press.
    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Feeds one pointer sample.
    ///
    /// Non-finite positions are dropped (except for cancel, which only needs
    /// the kind). Moves and ups without a preceding down are ignored.
    pub fn on_pointer(&mut self, e: &PointerEvent) -> Option<GestureEvent> {
        if e.kind != PointerKind::Cancel && !e.position.is_finite() {
            return None;
        }
        match e.kind {
            PointerKind::Down => {
                self.press = Some(Press {
                    origin: e.position,
                    last: e.position,
                    at: e.time,
                    in_tap_region: true,
                    long_pressed: false,
                });
                Some(GestureEvent::Down {
                    position: e.position,
                })
            }
            PointerKind::Move => self.on_move(e),
            PointerKind::Up => {
                let press = self.press.take()?;
                if press.long_pressed {
                    None
                } else if press.in_tap_region {
                    if self.long_press_elapsed(&press, e.time) {
                        Some(GestureEvent::LongPress {
                            position: e.position,
                        })
                    } else {
                        Some(GestureEvent::SingleTapUp {
                            position: e.position,
                        })
                    }
                } else {
                    Some(GestureEvent::Release {
                        position: e.position,
                    })
                }
            }
            PointerKind::Cancel => {
                self.press = None;
                None
            }
        }
    }

    fn on_move(&mut self, e: &PointerEvent) -> Option<GestureEvent> {
        let long_pressed = {
            let press = self.press.as_ref()?;
            press.in_tap_region && !press.long_pressed && self.long_press_elapsed(press, e.time)
        };
        let slop2 = self.touch_slop * self.touch_slop;
        let press = self.press.as_mut()?;
        if press.long_pressed {
            return None;
        }
        if long_pressed {
            press.long_pressed = true;
            return Some(GestureEvent::LongPress {
                position: e.position,
            });
        }

        let delta = e.position - press.last;
        if press.in_tap_region {
            if (e.position - press.origin).hypot2() <= slop2 {
                return None;
            }
            press.in_tap_region = false;
        } else if delta.x.abs() < 1.0 && delta.y.abs() < 1.0 {
            return None;
        }
        press.last = e.position;
        Some(GestureEvent::Scroll {
            origin: press.origin,
            position: e.position,
            delta,
        })
    }

    fn long_press_elapsed(&self, press: &Press, now: FrameTime) -> bool {
        self.long_press_timeout
            .is_some_and(|timeout| now.saturating_duration_since(press.at) >= timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> FrameTime {
        FrameTime::from_millis(v)
    }

    fn detector() -> GestureDetector {
        GestureDetector::new(8.0, Some(Duration::from_millis(400)))
    }

    #[test]
    fn press_and_lift_in_place_is_a_tap() {
        let mut d = detector();
        let p = Point::new(800.0, 1000.0);
        assert_eq!(
            d.on_pointer(&PointerEvent::down(p, ms(0))),
            Some(GestureEvent::Down { position: p })
        );
        assert_eq!(d.on_pointer(&PointerEvent::moved(p + Vec2::new(3.0, 2.0), ms(20))), None);
        assert_eq!(
            d.on_pointer(&PointerEvent::up(p, ms(60))),
            Some(GestureEvent::SingleTapUp { position: p })
        );
        assert!(!d.is_pressed());
    }

    #[test]
    fn leaving_the_slop_starts_scrolling() {
        let mut d = detector();
        d.on_pointer(&PointerEvent::down(Point::new(500.0, 1000.0), ms(0)));
        let first = d.on_pointer(&PointerEvent::moved(Point::new(480.0, 1000.0), ms(16)));
        assert_eq!(
            first,
            Some(GestureEvent::Scroll {
                origin: Point::new(500.0, 1000.0),
                position: Point::new(480.0, 1000.0),
                delta: Vec2::new(-20.0, 0.0),
            })
        );
        let second = d.on_pointer(&PointerEvent::moved(Point::new(470.0, 1004.0), ms(32)));
        assert!(matches!(
            second,
            Some(GestureEvent::Scroll { delta, .. }) if delta == Vec2::new(-10.0, 4.0)
        ));
        assert!(matches!(
            d.on_pointer(&PointerEvent::up(Point::new(470.0, 1004.0), ms(48))),
            Some(GestureEvent::Release { .. })
        ));
    }

    #[test]
    fn returning_into_the_slop_is_not_a_tap() {
        let mut d = detector();
        let p = Point::new(100.0, 100.0);
        d.on_pointer(&PointerEvent::down(p, ms(0)));
        d.on_pointer(&PointerEvent::moved(Point::new(150.0, 100.0), ms(16)));
        d.on_pointer(&PointerEvent::moved(p, ms(32)));
        assert!(matches!(
            d.on_pointer(&PointerEvent::up(p, ms(48))),
            Some(GestureEvent::Release { .. })
        ));
    }

    #[test]
    fn sub_pixel_jitter_after_scrolling_is_dropped() {
        let mut d = detector();
        d.on_pointer(&PointerEvent::down(Point::new(0.0, 0.0), ms(0)));
        d.on_pointer(&PointerEvent::moved(Point::new(20.0, 0.0), ms(16)));
        assert_eq!(
            d.on_pointer(&PointerEvent::moved(Point::new(20.5, 0.2), ms(32))),
            None
        );
    }

    #[test]
    fn holding_still_becomes_a_long_press() {
        let mut d = detector();
        let p = Point::new(10.0, 10.0);
        d.on_pointer(&PointerEvent::down(p, ms(0)));
        assert_eq!(
            d.on_pointer(&PointerEvent::moved(p, ms(450))),
            Some(GestureEvent::LongPress { position: p })
        );
        // No scroll and no tap after a long press.
        assert_eq!(
            d.on_pointer(&PointerEvent::moved(Point::new(200.0, 10.0), ms(470))),
            None
        );
        assert_eq!(d.on_pointer(&PointerEvent::up(p, ms(500))), None);
    }

    #[test]
    fn slow_lift_is_a_long_press() {
        let mut d = detector();
        let p = Point::new(10.0, 10.0);
        d.on_pointer(&PointerEvent::down(p, ms(0)));
        assert_eq!(
            d.on_pointer(&PointerEvent::up(p, ms(400))),
            Some(GestureEvent::LongPress { position: p })
        );
    }

    #[test]
    fn no_timeout_means_no_long_press() {
        let mut d = GestureDetector::new(2.0, None);
        let p = Point::new(10.0, 10.0);
        d.on_pointer(&PointerEvent::down(p, ms(0)));
        assert_eq!(
            d.on_pointer(&PointerEvent::up(p, ms(5_000))),
            Some(GestureEvent::SingleTapUp { position: p })
        );
    }

    #[test]
    fn cancel_forgets_the_press() {
        let mut d = detector();
        d.on_pointer(&PointerEvent::down(Point::ORIGIN, ms(0)));
        assert_eq!(d.on_pointer(&PointerEvent::cancel(Point::ORIGIN, ms(5))), None);
        assert_eq!(d.on_pointer(&PointerEvent::up(Point::ORIGIN, ms(10))), None);
    }

    #[test]
    fn stray_moves_and_nan_samples_are_ignored() {
        let mut d = detector();
        assert_eq!(
            d.on_pointer(&PointerEvent::moved(Point::new(5.0, 5.0), ms(0))),
            None
        );
        assert_eq!(
            d.on_pointer(&PointerEvent::down(Point::new(f64::NAN, 0.0), ms(0))),
            None
        );
        assert!(!d.is_pressed());
    }
}
