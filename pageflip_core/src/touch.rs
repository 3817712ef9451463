// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start and current touch coordinates.
//!
//! [`TouchPoints`] is the raw storage behind the turn controller's tracker.
//! The controller wraps these setters so that a redraw can be requested and
//! the active effect's `on_scroll` hook runs after every touch update; this
//! type only stores values.

use kurbo::{Point, Vec2};

/// The gesture origin and the latest touch sample.
///
/// Both points start at the origin and are reset implicitly by the next
/// pointer-down. Coordinates outside the viewport are accepted; effects are
/// expected to clamp when drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchPoints {
    start: Point,
    current: Point,
}

impl TouchPoints {
    /// Creates a tracker with both points at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: Point::ORIGIN,
            current: Point::ORIGIN,
        }
    }

    /// Where the current gesture or turn began.
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Point {
        self.start
    }

    /// The latest touch (or animated) position.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Point {
        self.current
    }

    /// Displacement from the start point to the current point.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.current - self.start
    }

    /// Replaces the start point. Returns `false` and leaves the point
    /// untouched if `p` is not finite.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !p.is_finite() {
            return false;
        }
        self.start = p;
        true
    }

    /// Replaces the current point. Returns `false` and leaves the point
    /// untouched if `p` is not finite.
    pub fn set_current(&mut self, p: Point) -> bool {
        if !p.is_finite() {
            return false;
        }
        self.current = p;
        true
    }
}
