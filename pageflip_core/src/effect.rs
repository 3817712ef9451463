// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The lifecycle a visual page-turn effect implements.
//!
//! The controller never paints. It calls into one active [`PageEffect`] at
//! four points of a turn:
//!
//! ```text
//!   on_scroll_start ─► on_scroll* ─► on_scroll_stop
//!                  └── on_draw (whenever the host paints) ──┘
//! ```
//!
//! `on_scroll_start` is where an effect decides where the turn comes to rest
//! and starts the settle animation with
//! [`TurnCore::start_glide`]. If it does not, the turn never commits.

use alloc::boxed::Box;

use crate::turner::TurnCore;

/// A visual page-turn effect (slide, curl, cover, ...).
///
/// `S` is the host's snapshot type. `Surface` is whatever the host paints
/// into.
pub trait PageEffect<S> {
    /// Paint target passed to [`on_draw`](Self::on_draw).
    type Surface: ?Sized;

    /// A turn is about to animate: after a tap, a released drag or a
    /// programmatic start. Called at most once per commit.
    fn on_scroll_start(&mut self, turn: &mut TurnCore<S>);

    /// The touch point moved, either under the pointer or under the settle
    /// animation.
    fn on_scroll(&mut self, turn: &mut TurnCore<S>) {
        _ = turn;
    }

    /// Paints the current state of the turn.
    fn on_draw(&mut self, turn: &TurnCore<S>, surface: &mut Self::Surface);

    /// The settle animation finished. Called exactly once per committed turn,
    /// before the controller returns to idle and drops the snapshot.
    fn on_scroll_stop(&mut self, turn: &mut TurnCore<S>);
}

impl<S, E: PageEffect<S> + ?Sized> PageEffect<S> for Box<E> {
    type Surface = E::Surface;

    fn on_scroll_start(&mut self, turn: &mut TurnCore<S>) {
        (**self).on_scroll_start(turn);
    }

    fn on_scroll(&mut self, turn: &mut TurnCore<S>) {
        (**self).on_scroll(turn);
    }

    fn on_draw(&mut self, turn: &TurnCore<S>, surface: &mut Self::Surface) {
        (**self).on_draw(turn, surface);
    }

    fn on_scroll_stop(&mut self, turn: &mut TurnCore<S>) {
        (**self).on_scroll_stop(turn);
    }
}
