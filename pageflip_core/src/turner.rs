// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-turn controller.
//!
//! [`PageTurner`] owns one [`TurnCore`] (touch points, state, snapshot,
//! settle animation) and one active [`PageEffect`]. They are separate fields
//! so the controller can hand the effect `&mut TurnCore` from inside its own
//! methods.
//!
//! The host drives the controller from two places:
//!
//! - its input callback, through
//!   [`on_touch_event`](PageTurner::on_touch_event);
//! - its render loop, by calling [`poll_frame`](PageTurner::poll_frame) once
//!   per frame and then painting with [`draw`](PageTurner::draw) whenever
//!   [`take_redraw_request`](PageTurner::take_redraw_request) says so.

use core::time::Duration;

use kurbo::{Point, Size, Vec2};

use crate::config::TurnConfig;
use crate::effect::PageEffect;
use crate::error::ConfigError;
use crate::gesture::GestureDetector;
use crate::host::PageHost;
use crate::scroller::{self, Scroller};
use crate::state::{Direction, TurnFlags, TurnState};
use crate::time::FrameTime;
use crate::touch::TouchPoints;
use crate::trace::{
    DirectionEvent, DirectionSource, FrameEvent, Rejected, TurnStartEvent, TurnStopEvent, Tracer,
};

// ---------------------------------------------------------------------------
// TurnCore
// ---------------------------------------------------------------------------

/// Everything about a turn except the effect.
///
/// Effects receive this in their hooks. They can read all of it, move the
/// start point, request redraws and start the settle animation.
#[derive(Debug)]
pub struct TurnCore<S> {
    config: TurnConfig,
    viewport: Size,
    touch: TouchPoints,
    pub(crate) state: TurnState,
    pub(crate) snapshot: Option<S>,
    scroller: Scroller,
    needs_redraw: bool,
    pub(crate) tracer: Tracer,
    frames: u32,
}

impl<S> TurnCore<S> {
    fn new(config: TurnConfig) -> Self {
        Self {
            config,
            viewport: Size::ZERO,
            touch: TouchPoints::new(),
            state: TurnState::new(),
            snapshot: None,
            scroller: Scroller::new(config.interpolator),
            needs_redraw: false,
            tracer: Tracer::none(),
            frames: 0,
        }
    }

    /// Active configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &TurnConfig {
        &self.config
    }

    /// Viewport size in logical pixels.
    #[inline]
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Where the gesture or turn began.
    #[inline]
    #[must_use]
    pub const fn start_point(&self) -> Point {
        self.touch.start()
    }

    /// The latest touch or animated position.
    #[inline]
    #[must_use]
    pub const fn touch_point(&self) -> Point {
        self.touch.current()
    }

    /// Both touch points.
    #[inline]
    #[must_use]
    pub const fn touch(&self) -> &TouchPoints {
        &self.touch
    }

    /// Turn state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &TurnState {
        &self.state
    }

    /// Direction of the current (or most recent) turn.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.state.direction()
    }

    /// Flat boolean view of the state.
    #[inline]
    #[must_use]
    pub const fn flags(&self) -> TurnFlags {
        self.state.flags()
    }

    /// The adjacent page captured for this turn.
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Option<&S> {
        self.snapshot.as_ref()
    }

    /// The settle animation.
    #[inline]
    #[must_use]
    pub const fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Whether a repaint is pending.
    #[inline]
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Asks the host to repaint.
    #[inline]
    pub fn invalidate(&mut self) {
        self.needs_redraw = true;
    }

    /// Moves the start point. Non-finite points are ignored.
    pub fn set_start(&mut self, p: Point, invalidate: bool) {
        if self.touch.set_start(p) && invalidate {
            self.invalidate();
        }
    }

    /// Settle duration for `distance` at the configured base duration.
    #[must_use]
    pub fn duration_for(&self, distance: f64) -> Duration {
        scroller::duration_for(distance, self.viewport.width, self.config.base_duration)
    }

    /// Commits the turn and animates the touch point by `delta` over
    /// `duration`, starting from where it is now.
    ///
    /// Returns `false` and does nothing when a turn is already committed, no
    /// direction is resolved, or `delta` is not finite.
    pub fn start_glide(&mut self, delta: Vec2, duration: Duration) -> bool {
        if !delta.is_finite() || !self.state.commit() {
            return false;
        }
        let from = self.touch.current();
        self.scroller.start_scroll(from, delta, duration);
        self.frames = 0;
        self.invalidate();
        self.tracer.turn_start(&TurnStartEvent {
            direction: self.state.direction(),
            cancelled: self.state.is_cancel(),
            from,
            delta,
            duration,
        });
        true
    }

    /// Updates the current point without notifying the effect.
    pub(crate) fn set_current(&mut self, p: Point, invalidate: bool) -> bool {
        let accepted = self.touch.set_current(p);
        if accepted && invalidate {
            self.invalidate();
        }
        accepted
    }

    /// Captures the page `direction` reveals and records whether it exists.
    ///
    /// Returns `false` (and sets the boundary flag) when the host has no page
    /// there. The previous snapshot never outlives a new resolution.
    pub(crate) fn resolve<H>(&mut self, host: &H, direction: Direction, source: DirectionSource) -> bool
    where
        H: PageHost<Snapshot = S> + ?Sized,
    {
        self.state.resolve(direction);
        let available = host.has_page(direction);
        self.tracer.direction(&DirectionEvent {
            direction,
            source,
            available,
        });
        if available {
            self.snapshot = host.snapshot(direction);
        } else {
            self.snapshot = None;
            self.state.block();
        }
        available
    }

    /// Abandons a gesture that never committed.
    pub(crate) fn abandon(&mut self) {
        if self.state.is_started() {
            return;
        }
        self.state.reset_gesture();
        self.snapshot = None;
        self.invalidate();
    }

    fn finish(&mut self, now: FrameTime) {
        let direction = self.state.direction();
        let cancelled = self.state.is_cancel();
        self.state.stop();
        self.snapshot = None;
        self.invalidate();
        self.tracer.turn_stop(&TurnStopEvent {
            now,
            direction,
            cancelled,
            position: self.touch.current(),
            frames: self.frames,
        });
    }
}

// ---------------------------------------------------------------------------
// PageTurner
// ---------------------------------------------------------------------------

/// Touch-driven, frame-polled page-turn controller.
///
/// `S` is the host's snapshot type and `E` the active effect.
#[derive(Debug)]
pub struct PageTurner<S, E> {
    pub(crate) core: TurnCore<S>,
    pub(crate) effect: E,
    pub(crate) detector: GestureDetector,
}

impl<S, E: PageEffect<S>> PageTurner<S, E> {
    /// Creates an idle controller with an empty viewport.
    ///
    /// `config` is expected to pass [`TurnConfig::validate`]; use
    /// [`try_new`](Self::try_new) for configuration from outside the program.
    #[must_use]
    pub fn new(config: TurnConfig, effect: E) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid turn config: {config:?}");
        Self {
            core: TurnCore::new(config),
            effect,
            detector: GestureDetector::new(config.touch_slop, config.long_press_timeout),
        }
    }

    /// Creates an idle controller after validating `config`.
    pub fn try_new(config: TurnConfig, effect: E) -> Result<Self, ConfigError> {
        Ok(Self::new(config.validate()?, effect))
    }

    /// Installs a tracer.
    pub fn set_tracer(&mut self, tracer: Tracer) {
        self.core.tracer = tracer;
    }

    /// Read access to the turn.
    #[inline]
    #[must_use]
    pub const fn core(&self) -> &TurnCore<S> {
        &self.core
    }

    /// The active effect.
    #[inline]
    #[must_use]
    pub const fn effect(&self) -> &E {
        &self.effect
    }

    /// Mutable access to the active effect.
    #[inline]
    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    /// Replaces the active effect and returns the old one.
    ///
    /// A turn in flight finishes with the new effect's hooks.
    pub fn set_effect(&mut self, effect: E) -> E {
        core::mem::replace(&mut self.effect, effect)
    }

    /// Updates the viewport after a resize and requests a redraw.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.core.viewport = Size::new(width, height);
        self.core.invalidate();
    }

    /// Moves the start point.
    pub fn set_start(&mut self, p: Point, invalidate: bool) {
        self.core.set_start(p, invalidate);
    }

    /// Moves the touch point and runs the effect's
    /// [`on_scroll`](PageEffect::on_scroll) hook, whether or not a redraw is
    /// requested. Non-finite points are ignored.
    pub fn set_touch(&mut self, p: Point, invalidate: bool) {
        if self.core.set_current(p, invalidate) {
            self.effect.on_scroll(&mut self.core);
        }
    }

    /// Advances the settle animation to `now`.
    ///
    /// While the animation moves, the touch point follows it. On the first
    /// poll after it ends, the touch point snaps to the end, the effect's
    /// [`on_scroll_stop`](PageEffect::on_scroll_stop) runs and the controller
    /// goes idle. Polling while idle does nothing.
    pub fn poll_frame(&mut self, now: FrameTime) {
        if self.core.scroller.compute_scroll_offset(now) {
            let position = self.core.scroller.current_position();
            self.core.frames = self.core.frames.saturating_add(1);
            self.core.tracer.frame(&FrameEvent { now, position });
            self.set_touch(position, true);
        } else if self.core.state.is_started() {
            let end = self.core.scroller.final_position();
            self.set_touch(end, false);
            self.effect.on_scroll_stop(&mut self.core);
            self.core.finish(now);
        }
    }

    /// Cuts a running settle animation short. The next
    /// [`poll_frame`](Self::poll_frame) completes the turn.
    pub fn abort(&mut self) {
        if !self.core.scroller.is_finished() {
            self.core.scroller.abort_animation();
        }
    }

    /// Turns a page without a gesture, e.g. from a key press or auto-paging.
    ///
    /// Does nothing while a turn is in flight or for [`Direction::None`].
    /// Otherwise any pointer gesture in progress is dropped and the touch
    /// points move to the bottom corner the page leaves from. If the host has
    /// no page in `direction` the turn goes no further.
    pub fn start<H>(&mut self, host: &H, direction: Direction)
    where
        H: PageHost<Snapshot = S> + ?Sized,
    {
        if self.core.state.is_started() {
            self.core.tracer.rejected(&Rejected::Start(direction));
            return;
        }
        let Size { width, height } = self.core.viewport;
        let corner = match direction {
            Direction::Next => Point::new(width, height),
            Direction::Prev => Point::new(0.0, height),
            Direction::None => return,
        };
        self.detector.reset();
        self.core.state.reset_gesture();
        self.core.snapshot = None;
        self.set_start(corner, false);
        self.set_touch(corner, false);
        if self
            .core
            .resolve(host, direction, DirectionSource::Programmatic)
        {
            self.hand_off();
        }
    }

    /// Hands a resolved turn to the effect. A turn the effect does not commit
    /// lets go of its snapshot.
    pub(crate) fn hand_off(&mut self) {
        self.effect.on_scroll_start(&mut self.core);
        if !self.core.state.is_started() {
            self.core.snapshot = None;
        }
    }

    /// Paints through the active effect.
    pub fn draw(&mut self, surface: &mut E::Surface) {
        self.effect.on_draw(&self.core, surface);
    }

    /// Returns whether a repaint was requested since the last call, and
    /// clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        core::mem::take(&mut self.core.needs_redraw)
    }

    /// Turn state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &TurnState {
        &self.core.state
    }

    /// Direction of the current (or most recent) turn.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.core.direction()
    }

    /// Whether a turn is committed and has not finished.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.core.state.is_started()
    }

    /// The adjacent page captured for the current turn.
    #[inline]
    #[must_use]
    pub const fn snapshot(&self) -> Option<&S> {
        self.core.snapshot()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
