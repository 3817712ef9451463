// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn controller configuration.

use core::time::Duration;

use crate::error::ConfigError;
use crate::scroller::Interpolator;

/// Tuning for gesture recognition and the settle animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurnConfig {
    /// Animation duration for a settle distance of one full viewport width.
    /// Shorter and longer distances scale linearly.
    pub base_duration: Duration,
    /// Timing curve for the settle animation.
    pub interpolator: Interpolator,
    /// Distance in logical pixels the pointer may wander from the down point
    /// before a press stops being a tap and becomes a drag.
    pub touch_slop: f64,
    /// How long a press must stay inside the slop circle to count as a long
    /// press (which suppresses the tap). `None` disables long presses.
    pub long_press_timeout: Option<Duration>,
}

impl TurnConfig {
    /// Defaults for finger input.
    #[must_use]
    pub const fn touch() -> Self {
        Self {
            base_duration: Duration::from_millis(300),
            interpolator: Interpolator::EaseOut,
            touch_slop: 8.0,
            long_press_timeout: Some(Duration::from_millis(400)),
        }
    }

    /// Defaults for mouse and pen input: tighter slop and no long press.
    #[must_use]
    pub const fn mouse() -> Self {
        Self {
            base_duration: Duration::from_millis(300),
            interpolator: Interpolator::EaseOut,
            touch_slop: 2.0,
            long_press_timeout: None,
        }
    }

    /// Checks that the configuration can drive a turn and hands it back.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop(self.touch_slop));
        }
        if self.base_duration.is_zero() {
            return Err(ConfigError::ZeroBaseDuration);
        }
        Ok(self)
    }
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self::touch()
    }
}
