// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable scaffolding for driving a [`PageTurner`](pageflip_core::PageTurner)
//! without a real reader.
//!
//! - [`host::ScriptedHost`]: a page container with switchable neighbours that
//!   counts captures.
//! - [`effect::RecordingEffect`]: a slide-style effect that logs every hook
//!   call and settles to the page edge (or back to the start when
//!   cancelled).
//! - [`script::GestureScript`]: timed pointer sequences (taps, drags) and
//!   [`script::run_to_idle`] to play a turn out on a fixed frame clock.

#![no_std]

extern crate alloc;

pub mod effect;
pub mod host;
pub mod script;

#[cfg(test)]
mod scenarios;
