// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn direction and the single-flight turn state machine.
//!
//! A turn moves through these phases:
//!
//! ```text
//!            drag locks           release / tap
//!   Idle ──────────────► Tracking ◄──────► Cancelling
//!    ▲  \                    │                 │
//!    │   \  on_scroll_start  │  on_scroll_start│
//!    │    └──────────────────┴────────┬────────┘
//!    │                                ▼
//!    └──────── frame poll ──────  Committed
//! ```
//!
//! [`TurnState`] keeps the phase, the [`Direction`] and the orthogonal
//! `no_next` boundary flag together, so that combinations such as "started but
//! not running" cannot be represented. [`TurnFlags`] is the flat boolean view
//! of the same information; converting flags back into a state rejects every
//! combination no phase produces.

use crate::error::InvalidTurnFlags;

/// Which way a turn moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// No direction resolved yet. Initial value and the value after a reset.
    #[default]
    None,
    /// Toward the previous page.
    Prev,
    /// Toward the next page.
    Next,
}

impl Direction {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }

    /// Returns `true` for [`Prev`](Self::Prev) and [`Next`](Self::Next).
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Resolves a direction from a horizontal drag delta.
    ///
    /// Negative deltas resolve to [`Prev`](Self::Prev), everything else to
    /// [`Next`](Self::Next).
    #[inline]
    #[must_use]
    pub fn from_drag(dx: f64) -> Self {
        if dx < 0.0 { Self::Prev } else { Self::Next }
    }

    /// Whether a horizontal sample `dx` retracts a drag committed to `self`.
    ///
    /// `Next` retracts on negative samples and `Prev` on positive ones. Zero
    /// never retracts, and nothing retracts an unresolved direction.
    #[inline]
    #[must_use]
    pub fn is_retraction(self, dx: f64) -> bool {
        match self {
            Self::Next => dx < 0.0,
            Self::Prev => dx > 0.0,
            Self::None => false,
        }
    }
}

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// No drag in progress and no animation started.
    #[default]
    Idle,
    /// A drag has locked a direction and follows the pointer.
    Tracking,
    /// A locked drag is moving back against its direction.
    Cancelling,
    /// An effect started the settle animation; the turn is in flight.
    Committed {
        /// The pointer was retracting when the turn committed.
        cancelled: bool,
        /// The turn came from a drag rather than a tap or a programmatic
        /// start.
        dragged: bool,
    },
}

/// Flat boolean view of a [`TurnState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TurnFlags {
    /// Resolved direction.
    pub direction: Direction,
    /// A turn has been committed and not yet stopped.
    pub is_started: bool,
    /// A turn is in motion, either following a drag or animating.
    pub is_running: bool,
    /// The drag is moving against the committed direction.
    pub is_cancel: bool,
    /// The drag crossed the axis-lock threshold this gesture.
    pub is_moved: bool,
    /// The adjacent page in the resolved direction does not exist.
    pub no_next: bool,
}

/// Phase, direction and boundary flag of the turn controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TurnState {
    phase: TurnPhase,
    direction: Direction,
    no_next: bool,
}

impl TurnState {
    /// Idle, with no direction and no boundary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: TurnPhase::Idle,
            direction: Direction::None,
            no_next: false,
        }
    }

    /// Current phase.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Resolved direction. Survives a stop until the next pointer-down.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the gesture ran into a missing page.
    #[inline]
    #[must_use]
    pub const fn no_next(&self) -> bool {
        self.no_next
    }

    /// A turn has been committed and has not stopped yet.
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self.phase, TurnPhase::Committed { .. })
    }

    /// A drag is being followed or a turn is animating.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        !matches!(self.phase, TurnPhase::Idle)
    }

    /// The pointer is moving (or was moving at commit) against the direction.
    #[inline]
    #[must_use]
    pub const fn is_cancel(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Cancelling | TurnPhase::Committed { cancelled: true, .. }
        )
    }

    /// The current gesture locked a direction by dragging.
    #[inline]
    #[must_use]
    pub const fn is_moved(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Tracking | TurnPhase::Cancelling | TurnPhase::Committed { dragged: true, .. }
        )
    }

    /// Returns the flat boolean view.
    #[must_use]
    pub const fn flags(&self) -> TurnFlags {
        TurnFlags {
            direction: self.direction,
            is_started: self.is_started(),
            is_running: self.is_running(),
            is_cancel: self.is_cancel(),
            is_moved: self.is_moved(),
            no_next: self.no_next,
        }
    }

    // -- transitions -------------------------------------------------------

    /// Clears everything for a fresh gesture.
    pub(crate) fn reset_gesture(&mut self) {
        *self = Self::new();
    }

    /// Records the direction a tap or programmatic start resolved.
    pub(crate) fn resolve(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Marks the resolved direction as having no page.
    pub(crate) fn block(&mut self) {
        self.no_next = true;
    }

    /// Follows one drag sample. `cancel` selects between tracking and
    /// cancelling. Ignored without a resolved direction or once committed.
    pub(crate) fn track(&mut self, cancel: bool) -> bool {
        if !self.direction.is_resolved() || self.is_started() || self.no_next {
            return false;
        }
        self.phase = if cancel {
            TurnPhase::Cancelling
        } else {
            TurnPhase::Tracking
        };
        true
    }

    /// Commits the turn. Returns `false` when already committed or when no
    /// direction has been resolved.
    pub(crate) fn commit(&mut self) -> bool {
        if self.is_started() || !self.direction.is_resolved() {
            return false;
        }
        self.phase = TurnPhase::Committed {
            cancelled: self.is_cancel(),
            dragged: self.is_moved(),
        };
        true
    }

    /// Returns to idle. Direction and boundary flag are kept for effects that
    /// still draw the finished turn.
    pub(crate) fn stop(&mut self) {
        self.phase = TurnPhase::Idle;
    }
}

impl TryFrom<TurnFlags> for TurnState {
    type Error = InvalidTurnFlags;

    fn try_from(f: TurnFlags) -> Result<Self, Self::Error> {
        let resolved = f.direction.is_resolved();
        if f.no_next && !resolved {
            return Err(InvalidTurnFlags::BoundaryWithoutDirection);
        }
        if f.no_next && f.is_running {
            return Err(InvalidTurnFlags::RunningAtBoundary);
        }
        if f.is_running && !resolved {
            return Err(InvalidTurnFlags::RunningWithoutDirection);
        }

        let phase = match (f.is_started, f.is_running, f.is_cancel, f.is_moved) {
            (false, false, false, false) => TurnPhase::Idle,
            (false, true, false, true) => TurnPhase::Tracking,
            (false, true, true, true) => TurnPhase::Cancelling,
            (true, true, cancelled, dragged) => TurnPhase::Committed { cancelled, dragged },
            (true, false, ..) => return Err(InvalidTurnFlags::StartedButNotRunning),
            (false, true, _, false) => return Err(InvalidTurnFlags::RunningWithoutMove),
            (false, false, ..) => return Err(InvalidTurnFlags::StaleGestureFlags),
        };

        Ok(Self {
            phase,
            direction: f.direction,
            no_next: f.no_next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_sign_resolves_direction() {
        assert_eq!(Direction::from_drag(-300.0), Direction::Prev);
        assert_eq!(Direction::from_drag(12.0), Direction::Next);
    }

    #[test]
    fn retraction_is_against_the_direction() {
        assert!(Direction::Next.is_retraction(-1.0));
        assert!(!Direction::Next.is_retraction(1.0));
        assert!(Direction::Prev.is_retraction(1.0));
        assert!(!Direction::Prev.is_retraction(-1.0));
        assert!(!Direction::None.is_retraction(-1.0));
        assert!(!Direction::Next.is_retraction(0.0));
    }

    #[test]
    fn drag_then_commit_keeps_cancel_and_move() {
        let mut s = TurnState::new();
        s.resolve(Direction::Next);
        assert!(s.track(false));
        assert!(s.track(true));
        assert_eq!(s.phase(), TurnPhase::Cancelling);
        assert!(s.commit());

        let f = s.flags();
        assert!(f.is_started && f.is_running && f.is_cancel && f.is_moved);
        assert!(!s.commit(), "second commit is rejected");
    }

    #[test]
    fn tap_commit_is_not_moved() {
        let mut s = TurnState::new();
        s.resolve(Direction::Prev);
        assert!(s.commit());
        assert_eq!(
            s.phase(),
            TurnPhase::Committed {
                cancelled: false,
                dragged: false
            }
        );
    }

    #[test]
    fn commit_needs_a_direction() {
        let mut s = TurnState::new();
        assert!(!s.commit());
        assert!(!s.is_started());
    }

    #[test]
    fn blocked_gesture_does_not_track() {
        let mut s = TurnState::new();
        s.resolve(Direction::Prev);
        s.block();
        assert!(!s.track(false));
        assert_eq!(s.phase(), TurnPhase::Idle);
    }

    #[test]
    fn stop_keeps_direction_until_reset() {
        let mut s = TurnState::new();
        s.resolve(Direction::Next);
        s.commit();
        s.stop();
        assert!(!s.is_started() && !s.is_running());
        assert_eq!(s.direction(), Direction::Next);
        s.reset_gesture();
        assert_eq!(s.direction(), Direction::None);
    }

    #[test]
    fn flags_round_trip_for_reachable_states() {
        let mut s = TurnState::new();
        s.resolve(Direction::Next);
        s.track(true);
        assert_eq!(TurnState::try_from(s.flags()), Ok(s));
        s.commit();
        assert_eq!(TurnState::try_from(s.flags()), Ok(s));
    }

    #[test]
    fn impossible_flag_combinations_are_rejected() {
        let started_idle = TurnFlags {
            direction: Direction::Next,
            is_started: true,
            ..TurnFlags::default()
        };
        assert_eq!(
            TurnState::try_from(started_idle),
            Err(InvalidTurnFlags::StartedButNotRunning)
        );

        let blind_run = TurnFlags {
            is_running: true,
            is_moved: true,
            ..TurnFlags::default()
        };
        assert_eq!(
            TurnState::try_from(blind_run),
            Err(InvalidTurnFlags::RunningWithoutDirection)
        );

        let boundary = TurnFlags {
            no_next: true,
            ..TurnFlags::default()
        };
        assert_eq!(
            TurnState::try_from(boundary),
            Err(InvalidTurnFlags::BoundaryWithoutDirection)
        );

        let stale = TurnFlags {
            direction: Direction::Prev,
            is_cancel: true,
            ..TurnFlags::default()
        };
        assert_eq!(
            TurnState::try_from(stale),
            Err(InvalidTurnFlags::StaleGestureFlags)
        );
    }
}
