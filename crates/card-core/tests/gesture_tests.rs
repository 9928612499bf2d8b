// Host-side tests for the gesture engine.

use card_core::constants::FRAME_MS;
use card_core::{ConfigError, GestureConfig, GestureEngine, GestureHandler, GestureState, PointerSample};
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

#[derive(Default)]
struct Recorder {
    starts: u32,
    moves: u32,
    ends: u32,
    pinches: Vec<f32>,
    rotations: Vec<f32>,
    pans: Vec<Vec2>,
    long_presses: Vec<Vec2>,
}

impl GestureHandler for Recorder {
    fn on_start(&mut self, _state: &GestureState) {
        self.starts += 1;
    }
    fn on_move(&mut self, _state: &GestureState) {
        self.moves += 1;
    }
    fn on_end(&mut self, _state: &GestureState) {
        self.ends += 1;
    }
    fn on_pinch(&mut self, scale: f32) {
        self.pinches.push(scale);
    }
    fn on_rotate(&mut self, angle: f32) {
        self.rotations.push(angle);
    }
    fn on_pan(&mut self, delta: Vec2) {
        self.pans.push(delta);
    }
    fn on_long_press(&mut self, position: Vec2) {
        self.long_presses.push(position);
    }
}

fn engine() -> GestureEngine<Recorder> {
    GestureEngine::new(GestureConfig::default(), Recorder::default()).unwrap()
}

fn engine_with(config: GestureConfig) -> GestureEngine<Recorder> {
    GestureEngine::new(config, Recorder::default()).unwrap()
}

fn p(id: i32, x: f32, y: f32, t: f64) -> PointerSample {
    PointerSample::new(id, x, y, t)
}

#[test]
fn pinch_from_100_to_200_px_reports_double_scale() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, 100.0, 0.0, 10.0));
    assert_eq!(g.state().pinch_scale, Some(1.0));

    g.on_pointer_move(&[p(1, 200.0, 0.0, 50.0)]);
    let scale = g.state().pinch_scale.unwrap();
    assert!((scale - 2.0).abs() < 1e-5);
    let reported = *g.handler().pinches.last().unwrap();
    assert!((reported - 2.0).abs() < 1e-5);
    assert!(g.handler().pans.is_empty(), "primary pointer did not move");
}

#[test]
fn two_pointer_rotation_is_reported_in_radians() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, 100.0, 0.0, 0.0));
    g.on_pointer_move(&[p(1, 0.0, 100.0, 16.0)]);
    let angle = *g.handler().rotations.last().unwrap();
    assert!((angle - FRAC_PI_2).abs() < 1e-4);
    assert_eq!(g.state().rotation_angle, Some(angle));
}

#[test]
fn rotation_across_the_atan2_seam_stays_small() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, -100.0, 1.0, 0.0)); // just under +π
    g.on_pointer_move(&[p(1, -100.0, -1.0, 16.0)]); // just over -π
    let angle = g.state().rotation_angle.unwrap();
    assert!(angle.abs() < 0.05, "got {angle}");
}

#[test]
fn single_pointer_has_no_pinch_or_rotation() {
    let mut g = engine();
    g.on_pointer_down(p(0, 10.0, 10.0, 0.0));
    g.on_pointer_move(&[p(0, 50.0, 10.0, 16.0)]);
    assert_eq!(g.state().pinch_scale, None);
    assert_eq!(g.state().rotation_angle, None);
    assert!(g.handler().pinches.is_empty());
    assert!(g.handler().rotations.is_empty());
}

#[test]
fn coincident_pointers_do_not_produce_a_scale() {
    let mut g = engine();
    g.on_pointer_down(p(0, 5.0, 5.0, 0.0));
    g.on_pointer_down(p(1, 5.0, 5.0, 0.0));
    assert_eq!(g.state().pinch_scale, None);
    g.on_pointer_move(&[p(1, 55.0, 5.0, 16.0)]);
    // the first non-degenerate layout becomes the baseline
    assert_eq!(g.state().pinch_scale, Some(1.0));
    assert!(g.handler().pinches.is_empty());
}

#[test]
fn pan_fires_only_beyond_min_distance() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 5.0, 0.0, 16.0)]);
    assert!(g.handler().pans.is_empty());

    g.on_pointer_move(&[p(0, 15.0, 0.0, 32.0)]);
    assert_eq!(g.handler().pans, vec![Vec2::new(10.0, 0.0)]);
    assert!((g.state().distance - 15.0).abs() < 1e-5);
    assert_eq!(g.handler().moves, 2);
}

#[test]
fn velocity_is_delta_over_sample_interval() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 20.0, -10.0, 10.0)]);
    let st = g.state();
    assert_eq!(st.delta, Vec2::new(20.0, -10.0));
    assert_eq!(st.velocity, Vec2::new(2.0, -1.0));
    assert_eq!(st.direction, Vec2::new(1.0, -1.0));
    assert_eq!(st.elapsed_time, 10.0);
}

#[test]
fn long_press_fires_exactly_once_when_held_still() {
    let mut g = engine();
    g.on_pointer_down(p(0, 30.0, 40.0, 0.0));
    g.tick(250.0);
    assert!(g.handler().long_presses.is_empty());
    g.tick(500.0);
    g.tick(750.0);
    g.tick(1500.0);
    assert_eq!(g.handler().long_presses, vec![Vec2::new(30.0, 40.0)]);
}

#[test]
fn movement_before_the_delay_cancels_long_press() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 1.0, 0.0, 100.0)]);
    assert!(!g.long_press_pending());
    g.tick(600.0);
    assert!(g.handler().long_presses.is_empty());
}

#[test]
fn release_before_the_delay_cancels_long_press() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_up(p(0, 0.0, 0.0, 200.0));
    g.tick(600.0);
    assert!(g.handler().long_presses.is_empty());
}

#[test]
fn long_press_can_be_disabled() {
    let mut g = engine_with(GestureConfig {
        enable_long_press: false,
        ..GestureConfig::default()
    });
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.tick(1000.0);
    assert!(g.handler().long_presses.is_empty());
}

fn fling(g: &mut GestureEngine<Recorder>) {
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 100.0, 0.0, 10.0)]); // 10 px/ms
    g.on_pointer_up(p(0, 100.0, 0.0, 10.0));
}

#[test]
fn momentum_decays_monotonically_and_terminates() {
    let mut g = engine();
    fling(&mut g);
    assert!(g.momentum_active());
    assert_eq!(g.handler().ends, 1);
    g.handler_mut().pans.clear();

    for k in 1..=400 {
        g.tick(10.0 + k as f64 * FRAME_MS);
    }
    let pans = &g.handler().pans;
    assert!(pans.len() > 10, "expected a momentum tail, got {}", pans.len());
    assert!(pans.len() < 200, "momentum ran for {} ticks", pans.len());
    let first = pans[0];
    assert!((first.x - 10.0 * 0.95 * 0.95).abs() < 1e-3, "first = {first:?}");
    for w in pans.windows(2) {
        assert!(w[1].length() < w[0].length());
    }
    assert!(!g.momentum_active());
}

#[test]
fn momentum_decay_is_frame_rate_independent() {
    let mut fast = engine();
    let mut slow = engine();
    fling(&mut fast);
    fling(&mut slow);

    // 120 Hz versus 30 Hz over the same 200 ms
    for k in 1..=24 {
        fast.tick(10.0 + k as f64 * FRAME_MS / 2.0);
    }
    for k in 1..=6 {
        slow.tick(10.0 + k as f64 * FRAME_MS * 2.0);
    }
    let a = fast.handler().pans.last().unwrap().length();
    let b = slow.handler().pans.last().unwrap().length();
    assert!((a - b).abs() < 1e-3, "{a} vs {b}");
}

#[test]
fn short_drags_and_disabled_momentum_do_not_coast() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 5.0, 0.0, 10.0)]);
    g.on_pointer_up(p(0, 5.0, 0.0, 10.0));
    assert!(!g.momentum_active());

    let mut g = engine_with(GestureConfig {
        momentum: false,
        ..GestureConfig::default()
    });
    fling(&mut g);
    assert!(!g.momentum_active());
}

#[test]
fn new_gesture_cancels_running_momentum() {
    let mut g = engine();
    fling(&mut g);
    g.tick(10.0 + FRAME_MS);
    g.on_pointer_down(p(3, 0.0, 0.0, 40.0));
    assert!(!g.momentum_active());
    let pans = g.handler().pans.len();
    g.tick(40.0 + FRAME_MS);
    g.tick(40.0 + 2.0 * FRAME_MS);
    assert_eq!(g.handler().pans.len(), pans);
}

#[test]
fn cancel_pending_clears_timers_and_momentum() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    assert!(g.long_press_pending());
    g.cancel_pending();
    g.tick(1000.0);
    assert!(g.handler().long_presses.is_empty());

    let mut g = engine();
    fling(&mut g);
    g.cancel_pending();
    let pans = g.handler().pans.len();
    g.tick(100.0);
    assert_eq!(g.handler().pans.len(), pans);
}

#[test]
fn events_while_inactive_are_ignored() {
    let mut g = engine();
    g.on_pointer_move(&[p(0, 50.0, 50.0, 10.0)]);
    g.on_pointer_up(p(0, 50.0, 50.0, 20.0));
    g.on_pointer_cancel(p(0, 50.0, 50.0, 20.0));
    let h = g.handler();
    assert_eq!((h.starts, h.moves, h.ends), (0, 0, 0));
    assert!(!g.is_active());
}

#[test]
fn gesture_ends_when_the_last_pointer_lifts() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, 100.0, 0.0, 0.0));
    assert_eq!(g.handler().starts, 1);

    g.on_pointer_up(p(1, 100.0, 0.0, 20.0));
    assert!(g.is_active());
    assert_eq!(g.state().pinch_scale, None);
    assert_eq!(g.handler().ends, 0);

    g.on_pointer_cancel(p(0, 0.0, 0.0, 30.0));
    assert!(!g.is_active());
    assert_eq!(g.handler().ends, 1);
    assert!(g.state().pointers.is_empty());
}

#[test]
fn second_finger_after_a_lift_sets_a_new_baseline() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, 100.0, 0.0, 0.0));
    g.on_pointer_up(p(1, 100.0, 0.0, 10.0));
    g.on_pointer_down(p(2, 50.0, 0.0, 20.0));
    assert_eq!(g.state().pinch_scale, Some(1.0));
    g.on_pointer_move(&[p(2, 100.0, 0.0, 30.0)]);
    assert!((g.state().pinch_scale.unwrap() - 2.0).abs() < 1e-5);
}

#[test]
fn small_pinches_below_min_scale_are_not_reported() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(1, 100.0, 0.0, 0.0));
    g.on_pointer_move(&[p(1, 105.0, 0.0, 16.0)]);
    assert!(g.handler().pinches.is_empty());
    assert!((g.state().pinch_scale.unwrap() - 1.05).abs() < 1e-5);
}

#[test]
fn invalid_configuration_is_rejected() {
    let bad_decay = GestureConfig {
        momentum_decay: 1.5,
        ..GestureConfig::default()
    };
    assert_eq!(
        GestureEngine::new(bad_decay, ()).err(),
        Some(ConfigError::OutOfUnitRange {
            name: "momentum_decay",
            value: 1.5
        })
    );

    let negative = GestureConfig {
        min_distance: -1.0,
        ..GestureConfig::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(ConfigError::NegativeThreshold { name: "min_distance", .. })
    ));

    let zero_delay = GestureConfig {
        long_press_delay_ms: 0.0,
        ..GestureConfig::default()
    };
    assert!(matches!(
        zero_delay.validate(),
        Err(ConfigError::NonPositive { .. })
    ));
    assert!(GestureConfig::default().validate().is_ok());
}

#[test]
fn lifting_the_primary_finger_does_not_jump_movement() {
    let mut g = engine();
    g.on_pointer_down(p(1, 0.0, 0.0, 0.0));
    g.on_pointer_down(p(2, 300.0, 0.0, 0.0));
    g.on_pointer_up(p(1, 0.0, 0.0, 10.0));
    assert_eq!(g.state().current_position, Vec2::new(300.0, 0.0));
    assert_eq!(g.state().movement, Vec2::ZERO);

    g.on_pointer_move(&[p(2, 301.0, 0.0, 20.0)]);
    assert_eq!(g.state().delta, Vec2::new(1.0, 0.0));
    assert!((g.state().distance - 1.0).abs() < 1e-5);
    assert!(g.handler().pans.is_empty());

    g.on_pointer_up(p(2, 301.0, 0.0, 30.0));
    assert!(!g.momentum_active());
}

#[test]
fn cancel_ends_the_gesture_like_a_release() {
    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_cancel(p(0, 0.0, 0.0, 100.0));
    assert!(!g.is_active());
    assert_eq!(g.handler().ends, 1);
    assert!(!g.long_press_pending());
    g.tick(600.0);
    assert!(g.handler().long_presses.is_empty());
    g.on_pointer_cancel(p(0, 0.0, 0.0, 700.0));
    assert_eq!(g.handler().ends, 1);

    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 100.0, 0.0, 10.0)]);
    g.on_pointer_cancel(p(0, 100.0, 0.0, 10.0));
    assert!(g.momentum_active());
    g.handler_mut().pans.clear();
    g.tick(10.0 + FRAME_MS);
    assert_eq!(g.handler().pans.len(), 1);

    let mut g = engine();
    g.on_pointer_down(p(0, 0.0, 0.0, 0.0));
    g.on_pointer_move(&[p(0, 4.0, 0.0, 10.0)]);
    g.on_pointer_cancel(p(0, 4.0, 0.0, 10.0));
    assert!(!g.momentum_active());
}
