// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Gesture records always carry origin and delta slots; they are zero for
//! every gesture other than a scroll.

use std::time::Duration;

use kurbo::{Point, Vec2};
use pageflip_core::gesture::{GestureEvent, PointerKind};
use pageflip_core::state::Direction;
use pageflip_core::time::FrameTime;
use pageflip_core::trace::{
    DirectionEvent, DirectionSource, FrameEvent, GestureTraceEvent, Rejected, TraceSink,
    TurnStartEvent, TurnStopEvent,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_GESTURE: u8 = 1;
const TAG_DIRECTION: u8 = 2;
const TAG_TURN_START: u8 = 3;
const TAG_FRAME: u8 = 4;
const TAG_TURN_STOP: u8 = 5;
const TAG_REJECTED: u8 = 6;

const GESTURE_DOWN: u8 = 0;
const GESTURE_SCROLL: u8 = 1;
const GESTURE_TAP: u8 = 2;
const GESTURE_LONG_PRESS: u8 = 3;
const GESTURE_RELEASE: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_vec(&mut self, v: Vec2) {
        self.write_f64(v.x);
        self.write_f64(v.y);
    }

    fn write_direction(&mut self, d: Direction) {
        self.write_u8(match d {
            Direction::None => 0,
            Direction::Prev => 1,
            Direction::Next => 2,
        });
    }

    fn write_pointer_kind(&mut self, k: PointerKind) {
        self.write_u8(match k {
            PointerKind::Down => 0,
            PointerKind::Move => 1,
            PointerKind::Up => 2,
            PointerKind::Cancel => 3,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        let (kind, origin, delta) = match e.gesture {
            GestureEvent::Down { .. } => (GESTURE_DOWN, Point::ORIGIN, Vec2::ZERO),
            GestureEvent::Scroll { origin, delta, .. } => (GESTURE_SCROLL, origin, delta),
            GestureEvent::SingleTapUp { .. } => (GESTURE_TAP, Point::ORIGIN, Vec2::ZERO),
            GestureEvent::LongPress { .. } => (GESTURE_LONG_PRESS, Point::ORIGIN, Vec2::ZERO),
            GestureEvent::Release { .. } => (GESTURE_RELEASE, Point::ORIGIN, Vec2::ZERO),
        };
        self.write_u8(TAG_GESTURE);
        self.write_u64(e.time.as_micros());
        self.write_u8(kind);
        self.write_point(e.gesture.position());
        self.write_point(origin);
        self.write_vec(delta);
        self.write_bool(e.handled);
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        self.write_u8(TAG_DIRECTION);
        self.write_direction(e.direction);
        self.write_u8(match e.source {
            DirectionSource::Tap => 0,
            DirectionSource::Drag => 1,
            DirectionSource::Programmatic => 2,
        });
        self.write_bool(e.available);
    }

    fn on_turn_start(&mut self, e: &TurnStartEvent) {
        self.write_u8(TAG_TURN_START);
        self.write_direction(e.direction);
        self.write_bool(e.cancelled);
        self.write_point(e.from);
        self.write_vec(e.delta);
        self.write_u64(u64::try_from(e.duration.as_micros()).unwrap_or(u64::MAX));
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.write_u8(TAG_FRAME);
        self.write_u64(e.now.as_micros());
        self.write_point(e.position);
    }

    fn on_turn_stop(&mut self, e: &TurnStopEvent) {
        self.write_u8(TAG_TURN_STOP);
        self.write_u64(e.now.as_micros());
        self.write_direction(e.direction);
        self.write_bool(e.cancelled);
        self.write_point(e.position);
        self.write_u32(e.frames);
    }

    fn on_rejected(&mut self, e: &Rejected) {
        self.write_u8(TAG_REJECTED);
        match *e {
            Rejected::Pointer(kind) => {
                self.write_u8(0);
                self.write_pointer_kind(kind);
            }
            Rejected::Start(direction) => {
                self.write_u8(1);
                self.write_direction(direction);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`GestureTraceEvent`].
    Gesture(GestureTraceEvent),
    /// A [`DirectionEvent`].
    Direction(DirectionEvent),
    /// A [`TurnStartEvent`].
    TurnStart(TurnStartEvent),
    /// A [`FrameEvent`].
    Frame(FrameEvent),
    /// A [`TurnStopEvent`].
    TurnStop(TurnStopEvent),
    /// A [`Rejected`] input.
    Rejected(Rejected),
}

impl RecordedEvent {
    /// The event's own timestamp, if it carries one.
    #[must_use]
    pub fn time(&self) -> Option<FrameTime> {
        match self {
            Self::Gesture(e) => Some(e.time),
            Self::Frame(e) => Some(e.now),
            Self::TurnStop(e) => Some(e.now),
            Self::Direction(_) | Self::TurnStart(_) | Self::Rejected(_) => None,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|v| v != 0)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_le_bytes)
    }

    fn read_time(&mut self) -> Option<FrameTime> {
        self.read_u64().map(FrameTime)
    }

    fn read_point(&mut self) -> Option<Point> {
        Some(Point::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_vec(&mut self) -> Option<Vec2> {
        Some(Vec2::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_direction(&mut self) -> Option<Direction> {
        Some(match self.read_u8()? {
            0 => Direction::None,
            1 => Direction::Prev,
            _ => Direction::Next,
        })
    }

    fn read_pointer_kind(&mut self) -> Option<PointerKind> {
        Some(match self.read_u8()? {
            0 => PointerKind::Down,
            1 => PointerKind::Move,
            2 => PointerKind::Up,
            _ => PointerKind::Cancel,
        })
    }

    fn decode_gesture(&mut self) -> Option<RecordedEvent> {
        let time = self.read_time()?;
        let kind = self.read_u8()?;
        let position = self.read_point()?;
        let origin = self.read_point()?;
        let delta = self.read_vec()?;
        let handled = self.read_bool()?;
        let gesture = match kind {
            GESTURE_DOWN => GestureEvent::Down { position },
            GESTURE_SCROLL => GestureEvent::Scroll {
                origin,
                position,
                delta,
            },
            GESTURE_TAP => GestureEvent::SingleTapUp { position },
            GESTURE_LONG_PRESS => GestureEvent::LongPress { position },
            _ => GestureEvent::Release { position },
        };
        Some(RecordedEvent::Gesture(GestureTraceEvent {
            time,
            gesture,
            handled,
        }))
    }

    fn decode_direction(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Direction(DirectionEvent {
            direction: self.read_direction()?,
            source: match self.read_u8()? {
                0 => DirectionSource::Tap,
                1 => DirectionSource::Drag,
                _ => DirectionSource::Programmatic,
            },
            available: self.read_bool()?,
        }))
    }

    fn decode_turn_start(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TurnStart(TurnStartEvent {
            direction: self.read_direction()?,
            cancelled: self.read_bool()?,
            from: self.read_point()?,
            delta: self.read_vec()?,
            duration: Duration::from_micros(self.read_u64()?),
        }))
    }

    fn decode_frame(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Frame(FrameEvent {
            now: self.read_time()?,
            position: self.read_point()?,
        }))
    }

    fn decode_turn_stop(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TurnStop(TurnStopEvent {
            now: self.read_time()?,
            direction: self.read_direction()?,
            cancelled: self.read_bool()?,
            position: self.read_point()?,
            frames: self.read_u32()?,
        }))
    }

    fn decode_rejected(&mut self) -> Option<RecordedEvent> {
        let rejected = match self.read_u8()? {
            0 => Rejected::Pointer(self.read_pointer_kind()?),
            _ => Rejected::Start(self.read_direction()?),
        };
        Some(RecordedEvent::Rejected(rejected))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_GESTURE => self.decode_gesture(),
            TAG_DIRECTION => self.decode_direction(),
            TAG_TURN_START => self.decode_turn_start(),
            TAG_FRAME => self.decode_frame(),
            TAG_TURN_STOP => self.decode_turn_stop(),
            TAG_REJECTED => self.decode_rejected(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
