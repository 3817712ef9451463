// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for pageflip.
//!
//! This crate connects a [`PageTurner`](pageflip_core::PageTurner) to
//! browser APIs:
//!
//! - [`pointer_event`]: `PointerEvent` to [`PointerEvent`](pageflip_core::PointerEvent)
//!   conversion, with [`pointer_kind`] mapping DOM event types.
//! - [`config_for_pointer`]: picks the touch or mouse configuration from the
//!   event's `pointerType`.
//! - [`RafLoop`]: `requestAnimationFrame` frame source.
//! - [`now`]: the current time from `performance.now()`.
//!
//! All times are on the `performance.now()` clock, which is also the clock
//! of DOM event timestamps, so pointer samples and frames can be compared
//! directly.

#![no_std]

extern crate alloc;

mod raf;

pub use raf::RafLoop;

use kurbo::Point;
use pageflip_core::config::TurnConfig;
use pageflip_core::gesture::{PointerEvent, PointerKind};
use pageflip_core::time::FrameTime;

/// Returns the current time from `performance.now()`.
#[must_use]
pub fn now() -> FrameTime {
    from_timestamp_ms(raf::performance_now())
}

/// Converts a `DOMHighResTimeStamp` (milliseconds) to a [`FrameTime`].
///
/// Negative and non-finite stamps map to [`FrameTime::ZERO`].
#[must_use]
pub fn from_timestamp_ms(ms: f64) -> FrameTime {
    if !ms.is_finite() || ms <= 0.0 {
        return FrameTime::ZERO;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "timestamp is positive and finite; µs fits in u64 and saturates otherwise"
    )]
    let us = (ms * 1000.0) as u64;
    FrameTime(us)
}

/// Maps a DOM pointer event type to a [`PointerKind`].
///
/// `pointerleave` and `pointerout` are not mapped; hosts that want a leave to
/// end a gesture should capture the pointer instead.
#[must_use]
pub fn pointer_kind(event_type: &str) -> Option<PointerKind> {
    match event_type {
        "pointerdown" => Some(PointerKind::Down),
        "pointermove" => Some(PointerKind::Move),
        "pointerup" => Some(PointerKind::Up),
        "pointercancel" => Some(PointerKind::Cancel),
        _ => None,
    }
}

/// Converts a DOM `PointerEvent` to a core pointer sample.
///
/// The position is relative to the event target's padding edge, which is
/// the viewport the turner should be sized to.
#[must_use]
pub fn pointer_event(event: &web_sys::PointerEvent, kind: PointerKind) -> PointerEvent {
    let position = Point::new(f64::from(event.offset_x()), f64::from(event.offset_y()));
    PointerEvent::new(kind, position, from_timestamp_ms(event.time_stamp()))
}

/// Configuration suited to the device that produced `event`.
#[must_use]
pub fn config_for_pointer(event: &web_sys::PointerEvent) -> TurnConfig {
    config_for_pointer_type(&event.pointer_type())
}

/// Configuration for a `pointerType` string: `"mouse"` and `"pen"` use
/// [`TurnConfig::mouse`], everything else [`TurnConfig::touch`].
#[must_use]
pub fn config_for_pointer_type(pointer_type: &str) -> TurnConfig {
    match pointer_type {
        "mouse" | "pen" => TurnConfig::mouse(),
        _ => TurnConfig::touch(),
    }
}
