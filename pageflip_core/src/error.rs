// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! Turning is boundary-driven rather than error-driven: a missing page, a
//! second start while a turn is in flight, or a poll with nothing animating are
//! all silent no-ops. The errors here only cover construction-time
//! validation.

use core::fmt;

/// A [`TurnConfig`](crate::config::TurnConfig) value that cannot drive a turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The touch slop is negative or not finite.
    InvalidTouchSlop(f64),
    /// The full-width animation duration is zero.
    ZeroBaseDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTouchSlop(slop) => {
                write!(f, "touch slop must be finite and non-negative, got {slop}")
            }
            Self::ZeroBaseDuration => f.write_str("base turn duration must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A [`TurnFlags`](crate::state::TurnFlags) combination that no turn phase
/// produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidTurnFlags {
    /// `is_started` without `is_running`.
    StartedButNotRunning,
    /// `is_running` before any drag locked a direction.
    RunningWithoutMove,
    /// `is_running` with [`Direction::None`](crate::state::Direction::None).
    RunningWithoutDirection,
    /// `no_next` with [`Direction::None`](crate::state::Direction::None).
    BoundaryWithoutDirection,
    /// `no_next` together with `is_running`.
    RunningAtBoundary,
    /// `is_cancel` or `is_moved` left set on an idle controller.
    StaleGestureFlags,
}

impl fmt::Display for InvalidTurnFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StartedButNotRunning => "turn is started but not running",
            Self::RunningWithoutMove => "turn is running without a locked drag",
            Self::RunningWithoutDirection => "turn is running without a direction",
            Self::BoundaryWithoutDirection => "boundary flag set without a direction",
            Self::RunningAtBoundary => "turn is running toward a missing page",
            Self::StaleGestureFlags => "gesture flags set while idle",
        })
    }
}

impl core::error::Error for InvalidTurnFlags {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            ConfigError::InvalidTouchSlop(-1.0).to_string(),
            "touch slop must be finite and non-negative, got -1"
        );
        assert_eq!(
            InvalidTurnFlags::StartedButNotRunning.to_string(),
            "turn is started but not running"
        );
    }
}
