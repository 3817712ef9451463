// Copyright 2026 the Pageflip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end turns on a 1000×2000 viewport.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use pageflip_core::config::TurnConfig;
use pageflip_core::state::{Direction, TurnPhase};
use pageflip_core::time::FrameTime;
use pageflip_core::turner::PageTurner;

use crate::effect::{HookCall, RecordingEffect};
use crate::host::{PageShot, ScriptedHost};
use crate::script::{FRAME, GestureScript, run_to_idle};

fn turner() -> PageTurner<PageShot, RecordingEffect> {
    let mut t = PageTurner::new(TurnConfig::touch(), RecordingEffect::new());
    t.set_viewport_size(1000.0, 2000.0);
    t
}

fn ms(v: u64) -> FrameTime {
    FrameTime::from_millis(v)
}

#[test]
fn tap_right_half_turns_to_next_and_settles() {
    let mut t = turner();
    let host = ScriptedHost::new(4);
    let script = GestureScript::tap(Point::new(800.0, 1000.0), ms(0));

    assert_eq!(script.play(&mut t, &host), [true, true]);
    assert_eq!(t.direction(), Direction::Next);
    assert_eq!(t.core().touch_point(), Point::new(800.0, 1000.0));

    let starts: Vec<_> = t.effect().starts().copied().collect();
    assert_eq!(
        starts,
        [HookCall::ScrollStart {
            direction: Direction::Next,
            cancelled: false,
            snapshot: Some(PageShot { page: 5, serial: 1 }),
            touch: Point::new(800.0, 1000.0),
        }]
    );
    // 800 px of a 1000 px viewport at 300 ms per width.
    assert_eq!(t.core().scroller().duration(), Duration::from_millis(240));

    let report = run_to_idle(&mut t, script.end_time()).expect("turn finishes");
    assert!(report.polls > 1, "the glide takes several frames");

    let stops: Vec<_> = t.effect().stops().copied().collect();
    assert_eq!(
        stops,
        [HookCall::ScrollStop {
            direction: Direction::Next,
            snapshot: Some(PageShot { page: 5, serial: 1 }),
            touch: Point::new(0.0, 1000.0),
        }]
    );
    assert!(!t.is_started());
    assert!(!t.state().is_running());
    assert_eq!(t.snapshot(), None);
}

#[test]
fn tap_toward_missing_page_never_starts() {
    for (x, host) in [
        (800.0, ScriptedHost::new(9).with_next(false)),
        (200.0, ScriptedHost::at_start()),
    ] {
        let mut t = turner();
        let script = GestureScript::tap(Point::new(x, 1000.0), ms(0));
        assert_eq!(script.play(&mut t, &host), [true, true]);
        assert_eq!(t.effect().starts().count(), 0, "tap at x={x}");
        assert!(!t.is_started());
        assert_eq!(host.captures(), 0);
    }
}

#[test]
fn drag_into_missing_prev_sets_boundary() {
    let mut t = turner();
    let host = ScriptedHost::at_start();
    let script = GestureScript::drag(Point::new(500.0, 1000.0), Point::new(200.0, 1000.0), 1, ms(0));

    assert_eq!(script.play(&mut t, &host), [true, true, false]);
    assert!(t.state().no_next());
    assert_eq!(t.direction(), Direction::Prev);
    assert_eq!(t.effect().starts().count(), 0);
    assert!(!t.is_started());
    assert_eq!(run_to_idle(&mut t, script.end_time()).map(|r| r.polls), Some(1));
}

#[test]
fn retracted_drag_settles_back_and_stops_once() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    let script = GestureScript::new(ms(0))
        .down(Point::new(500.0, 1000.0))
        .move_to(Point::new(700.0, 1000.0))
        .move_to(Point::new(400.0, 1000.0))
        .up(Point::new(400.0, 1000.0));

    script.play(&mut t, &host);
    assert_eq!(t.direction(), Direction::Next);
    assert_eq!(
        t.state().phase(),
        TurnPhase::Committed {
            cancelled: true,
            dragged: true
        }
    );

    run_to_idle(&mut t, script.end_time()).expect("turn finishes");
    // Back to where the drag started.
    assert_eq!(t.core().touch_point(), Point::new(500.0, 1000.0));
    assert_eq!(t.effect().stops().count(), 1);
    assert_eq!(t.snapshot(), None);

    // Later polls do nothing.
    t.effect_mut().clear();
    t.poll_frame(ms(5_000));
    assert!(t.effect().calls().is_empty());
}

#[test]
fn vertical_drags_never_commit() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    let script = GestureScript::drag(Point::new(500.0, 500.0), Point::new(560.0, 1500.0), 8, ms(0));

    let handled = script.play(&mut t, &host);
    assert!(handled[1..].iter().all(|h| !h), "got {handled:?}");
    assert_eq!(t.direction(), Direction::None);
    assert!(!t.is_started());
    assert_eq!(host.captures(), 0);
}

#[test]
fn start_while_started_is_a_no_op() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    t.start(&host, Direction::Prev);
    assert!(t.is_started());
    assert_eq!(t.core().start_point(), Point::new(0.0, 2000.0));

    t.start(&host, Direction::Next);
    assert_eq!(t.direction(), Direction::Prev);
    assert_eq!(t.effect().starts().count(), 1);
    assert_eq!(host.captures(), 1);

    run_to_idle(&mut t, ms(0)).expect("turn finishes");
    assert_eq!(t.core().touch_point(), Point::new(1000.0, 2000.0));
}

#[test]
fn pointer_input_is_refused_mid_turn() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    t.start(&host, Direction::Next);
    let script = GestureScript::drag(Point::new(900.0, 1000.0), Point::new(100.0, 1000.0), 4, ms(0));
    assert!(script.play(&mut t, &host).iter().all(|h| !h));
    assert_eq!(t.direction(), Direction::Next);
}

#[test]
fn abort_completes_on_the_next_poll() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    t.start(&host, Direction::Next);
    t.poll_frame(ms(0));
    t.poll_frame(ms(16));
    t.abort();
    assert!(t.is_started());

    t.poll_frame(ms(32));
    assert!(!t.is_started());
    assert_eq!(t.core().touch_point(), Point::new(0.0, 2000.0));
    assert_eq!(t.effect().stops().count(), 1);
}

#[test]
fn cancelled_pointer_abandons_the_gesture() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    let script = GestureScript::new(ms(0))
        .down(Point::new(500.0, 1000.0))
        .move_to(Point::new(650.0, 1000.0))
        .cancel(Point::new(650.0, 1000.0))
        .up(Point::new(650.0, 1000.0));

    script.play(&mut t, &host);
    assert_eq!(t.state().phase(), TurnPhase::Idle);
    assert_eq!(t.snapshot(), None);
    assert_eq!(t.effect().starts().count(), 0);
}

#[test]
fn long_press_is_not_a_tap() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    let p = Point::new(800.0, 1000.0);
    let script = GestureScript::new(ms(0))
        .down(p)
        .wait(Duration::from_millis(600))
        .up(p);

    assert_eq!(script.play(&mut t, &host), [true, false]);
    assert_eq!(t.effect().starts().count(), 0);
}

#[test]
fn passive_effect_leaves_the_turn_uncommitted() {
    let mut t = turner();
    t.effect_mut().passive = true;
    let host = ScriptedHost::new(2);
    GestureScript::tap(Point::new(900.0, 1000.0), ms(0)).play(&mut t, &host);

    assert_eq!(t.effect().starts().count(), 1);
    assert!(!t.is_started());
    assert_eq!(run_to_idle(&mut t, ms(100)).map(|r| r.polls), Some(1));
    assert_eq!(t.effect().stops().count(), 0);
}

#[test]
fn draw_paints_the_live_touch_point() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    GestureScript::new(ms(0))
        .down(Point::new(500.0, 1000.0))
        .move_to(Point::new(620.0, 1010.0))
        .play(&mut t, &host);

    assert!(t.take_redraw_request());
    let mut surface = Vec::new();
    t.draw(&mut surface);
    assert_eq!(surface, [Point::new(620.0, 1010.0)]);
    assert!(!t.take_redraw_request());
}

#[test]
fn mouse_preset_drags_with_less_travel() {
    let mut t = PageTurner::new(TurnConfig::mouse(), RecordingEffect::new());
    t.set_viewport_size(1000.0, 2000.0);
    let host = ScriptedHost::new(2);
    let script = GestureScript::drag(Point::new(500.0, 1000.0), Point::new(496.0, 1000.0), 1, ms(0));

    assert_eq!(script.play(&mut t, &host), [true, true, true]);
    assert_eq!(t.direction(), Direction::Prev);
    assert!(t.is_started());
}

#[test]
fn blocked_start_drops_the_dragged_page() {
    let mut t = turner();
    let host = ScriptedHost::new(2).with_prev(false);
    GestureScript::new(ms(0))
        .down(Point::new(500.0, 1000.0))
        .move_to(Point::new(700.0, 1000.0))
        .play(&mut t, &host);
    assert_eq!(t.snapshot(), Some(&PageShot { page: 3, serial: 1 }));

    t.start(&host, Direction::Prev);
    assert_eq!(t.direction(), Direction::Prev);
    assert!(t.state().no_next());
    assert_eq!(t.state().phase(), TurnPhase::Idle);
    assert_eq!(t.snapshot(), None);
}

#[test]
fn uncommitted_turns_let_go_of_the_snapshot() {
    let mut t = turner();
    t.effect_mut().passive = true;
    let host = ScriptedHost::new(2);

    GestureScript::tap(Point::new(900.0, 1000.0), ms(0)).play(&mut t, &host);
    assert_eq!(t.effect().starts().count(), 1);
    assert_eq!(t.snapshot(), None);

    GestureScript::drag(Point::new(500.0, 1000.0), Point::new(300.0, 1000.0), 2, ms(100))
        .play(&mut t, &host);
    assert_eq!(t.effect().starts().count(), 2);
    assert_eq!(t.snapshot(), None);

    t.start(&host, Direction::Next);
    assert_eq!(t.effect().starts().count(), 3);
    assert_eq!(t.snapshot(), None);
}

#[test]
fn programmatic_start_ends_the_pointer_gesture() {
    let mut t = turner();
    let host = ScriptedHost::new(2);
    GestureScript::new(ms(0))
        .down(Point::new(500.0, 1000.0))
        .move_to(Point::new(650.0, 1000.0))
        .play(&mut t, &host);

    t.start(&host, Direction::Prev);
    let report = run_to_idle(&mut t, ms(100)).expect("turn finishes");

    // The finger that was down before the turn no longer drives a drag.
    let late = GestureScript::new(report.finished_at + FRAME).move_to(Point::new(900.0, 1000.0));
    assert_eq!(late.play(&mut t, &host), [false]);
    assert_eq!(t.direction(), Direction::Prev);
    assert_eq!(t.effect().starts().count(), 1);
}
