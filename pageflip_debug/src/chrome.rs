// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Each turn becomes a `Turn` duration slice from its start to its stop, the
//! animated touch position becomes a counter track, and gestures, direction
//! decisions and rejected input become instant events. Events that carry no
//! timestamp of their own are placed at the most recent timestamp seen.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use pageflip_core::time::FrameTime;
use pageflip_core::trace::Rejected;

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut last = FrameTime::ZERO;

    for recorded in decode(bytes) {
        if let Some(t) = recorded.time() {
            last = t;
        }
        let ts = us(last);
        match recorded {
            RecordedEvent::Gesture(e) => {
                let p = e.gesture.position();
                events.push(json!({
                    "ph": "i",
                    "name": e.gesture.name(),
                    "cat": "Gesture",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "x": p.x,
                        "y": p.y,
                        "handled": e.handled,
                    }
                }));
            }
            RecordedEvent::Direction(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Direction",
                    "cat": "Gesture",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "direction": e.direction.as_str(),
                        "source": format!("{:?}", e.source),
                        "available": e.available,
                    }
                }));
            }
            RecordedEvent::TurnStart(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": "Turn",
                    "cat": "Turn",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "args": {
                        "direction": e.direction.as_str(),
                        "cancelled": e.cancelled,
                        "from": [e.from.x, e.from.y],
                        "delta": [e.delta.x, e.delta.y],
                        "duration_ms": u64::try_from(e.duration.as_millis()).unwrap_or(u64::MAX),
                    }
                }));
            }
            RecordedEvent::Frame(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "Touch",
                    "cat": "Turn",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "args": {
                        "x": e.position.x,
                        "y": e.position.y,
                    }
                }));
            }
            RecordedEvent::TurnStop(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": "Turn",
                    "cat": "Turn",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "args": {
                        "frames": e.frames,
                        "x": e.position.x,
                        "y": e.position.y,
                    }
                }));
            }
            RecordedEvent::Rejected(r) => {
                let what = match r {
                    Rejected::Pointer(kind) => format!("pointer {kind:?}"),
                    Rejected::Start(direction) => format!("start {}", direction.as_str()),
                };
                events.push(json!({
                    "ph": "i",
                    "name": "Rejected",
                    "cat": "Gesture",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "what": what,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn us(t: FrameTime) -> u64 {
    t.as_micros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use kurbo::{Point, Vec2};
    use pageflip_core::gesture::GestureEvent;
    use pageflip_core::state::Direction;
    use pageflip_core::trace::{GestureTraceEvent, TraceSink, TurnStartEvent, TurnStopEvent};
    use std::time::Duration;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_gesture(&GestureTraceEvent {
            time: FrameTime::from_millis(40),
            gesture: GestureEvent::SingleTapUp {
                position: Point::new(800.0, 1000.0),
            },
            handled: true,
        });
        rec.on_turn_start(&TurnStartEvent {
            direction: Direction::Next,
            cancelled: false,
            from: Point::new(800.0, 1000.0),
            delta: Vec2::new(-800.0, 0.0),
            duration: Duration::from_millis(240),
        });
        rec.on_turn_stop(&TurnStopEvent {
            now: FrameTime::from_millis(300),
            direction: Direction::Next,
            cancelled: false,
            position: Point::new(0.0, 1000.0),
            frames: 16,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["ph"], "i");
        assert_eq!(parsed[0]["name"], "tap");
        assert_eq!(parsed[0]["ts"], 40_000);

        // The turn start has no timestamp and inherits the tap's.
        assert_eq!(parsed[1]["ph"], "B");
        assert_eq!(parsed[1]["ts"], 40_000);
        assert_eq!(parsed[1]["args"]["duration_ms"], 240);

        assert_eq!(parsed[2]["ph"], "E");
        assert_eq!(parsed[2]["ts"], 300_000);
        assert_eq!(parsed[2]["args"]["frames"], 16);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
