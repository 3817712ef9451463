// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-driven, frame-polled page-turn controller.
//!
//! `pageflip_core` interprets raw pointer input as page-turn intent, drives
//! the settle animation once the pointer lets go, and decides when the
//! adjacent page is captured. It never paints: a [`PageEffect`] does that,
//! and the host owns the pages behind the [`PageHost`] trait. It is `no_std`
//! compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   PointerEvent ──► GestureDetector ──► PageTurner::on_touch_event
//!                                              │
//!                      TouchPoints ◄───────────┤──► TurnState
//!                          │                   │
//!                          ▼                   ▼
//!                 PageEffect::on_scroll   PageEffect::on_scroll_start
//!                                              │  TurnCore::start_glide
//!                                              ▼
//!   render loop ──► PageTurner::poll_frame ──► Scroller ──► on_scroll_stop
//! ```
//!
//! **[`gesture`]**: Single-pointer recognizer producing down, scroll, tap,
//! long-press and release steps.
//!
//! **[`interpret`]**: Maps recognized steps onto the turn: tap halves, drag
//! axis lock, cancel detection, release.
//!
//! **[`state`]**: [`Direction`](state::Direction) and the tagged
//! [`TurnState`](state::TurnState), with a checked conversion from the flat
//! boolean [`TurnFlags`](state::TurnFlags).
//!
//! **[`scroller`]**: Time-based settle animation and the distance-to-duration
//! rule.
//!
//! **[`turner`]**: [`PageTurner`] and the [`TurnCore`](turner::TurnCore)
//! effects operate on.
//!
//! **[`effect`]**: The [`PageEffect`] lifecycle.
//!
//! **[`host`]**: The [`PageHost`] contract for page availability and
//! snapshots.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) and the zero-overhead
//! [`Tracer`](trace::Tracer).
//!
//! # Example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use pageflip_core::{
//!     Direction, FrameTime, PageEffect, PageHost, PageSlot, PageTurner, PointerEvent,
//!     TurnConfig, TurnCore,
//! };
//!
//! struct Book;
//!
//! impl PageHost for Book {
//!     type Page = u32;
//!     type Snapshot = u32;
//!     fn has_next(&self) -> bool { true }
//!     fn has_prev(&self) -> bool { false }
//!     fn page(&self, slot: PageSlot) -> Option<&u32> {
//!         (slot == PageSlot::Next).then_some(&2)
//!     }
//!     fn capture(&self, page: &u32) -> u32 { *page }
//! }
//!
//! struct Slide;
//!
//! impl PageEffect<u32> for Slide {
//!     type Surface = ();
//!     fn on_scroll_start(&mut self, turn: &mut TurnCore<u32>) {
//!         let dx = -turn.touch_point().x;
//!         let duration = turn.duration_for(dx);
//!         turn.start_glide(Vec2::new(dx, 0.0), duration);
//!     }
//!     fn on_draw(&mut self, _turn: &TurnCore<u32>, _surface: &mut ()) {}
//!     fn on_scroll_stop(&mut self, _turn: &mut TurnCore<u32>) {}
//! }
//!
//! let mut turner = PageTurner::new(TurnConfig::touch(), Slide);
//! turner.set_viewport_size(1000.0, 2000.0);
//!
//! let tap = Point::new(800.0, 1000.0);
//! turner.on_touch_event(&Book, &PointerEvent::down(tap, FrameTime::from_millis(0)));
//! turner.on_touch_event(&Book, &PointerEvent::up(tap, FrameTime::from_millis(40)));
//! assert_eq!(turner.direction(), Direction::Next);
//!
//! let mut now = FrameTime::from_millis(48);
//! while turner.is_started() {
//!     turner.poll_frame(now);
//!     now = FrameTime(now.0 + 16_000);
//! }
//! assert_eq!(turner.snapshot(), None);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod effect;
pub mod error;
pub mod gesture;
pub mod host;
pub mod interpret;
pub mod scroller;
pub mod state;
pub mod time;
pub mod touch;
pub mod trace;
pub mod turner;

pub use config::TurnConfig;
pub use effect::PageEffect;
pub use error::{ConfigError, InvalidTurnFlags};
pub use gesture::{GestureEvent, PointerEvent, PointerKind};
pub use host::{PageHost, PageSlot};
pub use scroller::Interpolator;
pub use state::{Direction, TurnFlags, TurnPhase, TurnState};
pub use time::FrameTime;
pub use touch::TouchPoints;
pub use turner::{PageTurner, TurnCore};
