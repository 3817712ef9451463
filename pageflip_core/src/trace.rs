// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for gestures and turns.
//!
//! [`TraceSink`] has one method per event the controller emits. All of them
//! default to no-ops, so a sink only overrides what it cares about.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and installed sinks are
//! dropped. When **on**, each method performs a single `Option` branch before
//! dispatching.
//!
//! Sinks that the caller wants to inspect afterwards can be shared as
//! `Rc<RefCell<S>>`, which implements [`TraceSink`] by forwarding.
//!
//! # Crate features
//!
//! - `trace` enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::gesture::{GestureEvent, PointerKind};
use crate::state::Direction;
use crate::time::FrameTime;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// How a direction was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectionSource {
    /// Tap position relative to the viewport midpoint.
    Tap,
    /// Sign of the first horizontally dominant drag sample.
    Drag,
    /// [`PageTurner::start`](crate::turner::PageTurner::start).
    Programmatic,
}

/// Emitted for every recognized gesture step the controller accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTraceEvent {
    /// Timestamp of the pointer sample.
    pub time: FrameTime,
    /// The recognized step.
    pub gesture: GestureEvent,
    /// What the controller reported back to the host.
    pub handled: bool,
}

/// Emitted when a direction is resolved and the host has been asked for the
/// page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionEvent {
    /// Resolved direction.
    pub direction: Direction,
    /// What resolved it.
    pub source: DirectionSource,
    /// Whether the host has a page in that direction. `false` means the
    /// gesture ran into the boundary.
    pub available: bool,
}

/// Emitted when an effect starts the settle animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnStartEvent {
    /// Committed direction.
    pub direction: Direction,
    /// Whether the pointer was retracting at commit.
    pub cancelled: bool,
    /// Where the animation starts.
    pub from: Point,
    /// How far it travels.
    pub delta: Vec2,
    /// How long it takes.
    pub duration: Duration,
}

/// Emitted for every frame poll that advances an animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameEvent {
    /// Poll timestamp.
    pub now: FrameTime,
    /// Animated touch position after the poll.
    pub position: Point,
}

/// Emitted once per turn, after the effect's stop hook ran.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnStopEvent {
    /// Poll timestamp.
    pub now: FrameTime,
    /// Direction the turn moved in.
    pub direction: Direction,
    /// Whether the turn was committed while retracting.
    pub cancelled: bool,
    /// Final touch position.
    pub position: Point,
    /// Number of frames that advanced the animation.
    pub frames: u32,
}

/// Input refused because a turn is already in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejected {
    /// A pointer sample of this kind.
    Pointer(PointerKind),
    /// A programmatic start in this direction.
    Start(Direction),
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the turn controller.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called for each accepted gesture step.
    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        _ = e;
    }

    /// Called when a direction is resolved.
    fn on_direction(&mut self, e: &DirectionEvent) {
        _ = e;
    }

    /// Called when an effect starts the settle animation.
    fn on_turn_start(&mut self, e: &TurnStartEvent) {
        _ = e;
    }

    /// Called for each frame that advances the animation.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called once when a turn finishes.
    fn on_turn_stop(&mut self, e: &TurnStopEvent) {
        _ = e;
    }

    /// Called when input is refused because a turn is in flight.
    fn on_rejected(&mut self, e: &Rejected) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_gesture(&mut self, e: &GestureTraceEvent) {
        self.borrow_mut().on_gesture(e);
    }

    fn on_direction(&mut self, e: &DirectionEvent) {
        self.borrow_mut().on_direction(e);
    }

    fn on_turn_start(&mut self, e: &TurnStartEvent) {
        self.borrow_mut().on_turn_start(e);
    }

    fn on_frame(&mut self, e: &FrameEvent) {
        self.borrow_mut().on_frame(e);
    }

    fn on_turn_stop(&mut self, e: &TurnStopEvent) {
        self.borrow_mut().on_turn_stop(e);
    }

    fn on_rejected(&mut self, e: &Rejected) {
        self.borrow_mut().on_rejected(e);
    }
}

// ---------------------------------------------------------------------------
// Tracer
// ---------------------------------------------------------------------------

/// Owner of an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
#[derive(Default)]
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Emits a [`GestureTraceEvent`].
    #[inline]
    pub fn gesture(&mut self, e: &GestureTraceEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_gesture(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DirectionEvent`].
    #[inline]
    pub fn direction(&mut self, e: &DirectionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_direction(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TurnStartEvent`].
    #[inline]
    pub fn turn_start(&mut self, e: &TurnStartEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_turn_start(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TurnStopEvent`].
    #[inline]
    pub fn turn_stop(&mut self, e: &TurnStopEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_turn_stop(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`Rejected`] event.
    #[inline]
    pub fn rejected(&mut self, e: &Rejected) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
