// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use kurbo::{Point, Vec2};
use pageflip_core::time::FrameTime;
use pageflip_core::trace::{
    DirectionEvent, DirectionSource, FrameEvent, GestureTraceEvent, Rejected, TraceSink,
    TurnStartEvent, TurnStopEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn ms(t: FrameTime) -> f64 {
    t.as_micros() as f64 / 1000.0
}

fn pt(p: Point) -> (f64, f64) {
    (p.x, p.y)
}

fn vec(v: Vec2) -> (f64, f64) {
    (v.x, v.y)
}

fn source_name(source: DirectionSource) -> &'static str {
    match source {
        DirectionSource::Tap => "tap",
        DirectionSource::Drag => "drag",
        DirectionSource::Programmatic => "start",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        let handled = if e.handled { "handled" } else { "ignored" };
        let _ = writeln!(
            self.writer,
            "[gesture] t={:.3}ms {} at {:?} {handled}",
            ms(e.time),
            e.gesture.name(),
            pt(e.gesture.position()),
        );
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        let available = if e.available { "ok" } else { "BOUNDARY" };
        let _ = writeln!(
            self.writer,
            "[direction] {} via {} {available}",
            e.direction.as_str(),
            source_name(e.source),
        );
    }

    fn on_turn_start(&mut self, e: &TurnStartEvent) {
        let _ = writeln!(
            self.writer,
            "[turn:start] {} from {:?} by {:?} over {}ms cancelled={}",
            e.direction.as_str(),
            pt(e.from),
            vec(e.delta),
            e.duration.as_millis(),
            e.cancelled,
        );
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        let _ = writeln!(
            self.writer,
            "[frame] t={:.3}ms at {:?}",
            ms(e.now),
            pt(e.position),
        );
    }

    fn on_turn_stop(&mut self, e: &TurnStopEvent) {
        let _ = writeln!(
            self.writer,
            "[turn:stop] t={:.3}ms {} at {:?} frames={} cancelled={}",
            ms(e.now),
            e.direction.as_str(),
            pt(e.position),
            e.frames,
            e.cancelled,
        );
    }

    fn on_rejected(&mut self, e: &Rejected) {
        let _ = match e {
            Rejected::Pointer(kind) => writeln!(self.writer, "[rejected] pointer {kind:?}"),
            Rejected::Start(direction) => {
                writeln!(self.writer, "[rejected] start {}", direction.as_str())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageflip_core::gesture::GestureEvent;
    use pageflip_core::state::Direction;

    #[test]
    fn pretty_print_gesture() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_gesture(&GestureTraceEvent {
            time: FrameTime::from_millis(12),
            gesture: GestureEvent::SingleTapUp {
                position: Point::new(800.0, 1000.0),
            },
            handled: true,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert!(output.starts_with("[gesture]"), "got: {output}");
        assert!(output.contains("t=12.000ms"), "got: {output}");
        assert!(output.contains("tap at (800.0, 1000.0) handled"), "got: {output}");
    }

    #[test]
    fn boundary_is_flagged() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_direction(&DirectionEvent {
            direction: Direction::Prev,
            source: DirectionSource::Drag,
            available: false,
        });
        sink.on_rejected(&Rejected::Start(Direction::Next));
        let output = String::from_utf8(sink.into_writer()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, ["[direction] prev via drag BOUNDARY", "[rejected] start next"]);
    }
}
