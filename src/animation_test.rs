#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn opening(from: f64) -> Animation {
    Animation::new(AnimationId(1), Side::Left, from, 1.0, ms(300))
}

// =============================================================
// Easing
// =============================================================

#[test]
fn easing_endpoints_are_fixed() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
}

#[test]
fn ease_in_out_is_symmetric_at_midpoint() {
    assert!(approx_eq(ease_in_out(0.5), 0.5));
    assert!(approx_eq(ease_in_out(0.25) + ease_in_out(0.75), 1.0));
}

#[test]
fn easing_clamps_time() {
    assert_eq!(ease_in_out(-1.0), 0.0);
    assert_eq!(ease_in_out(2.0), 1.0);
}

#[test]
fn ease_in_out_is_monotone() {
    let mut last = 0.0;
    for i in 0..=100 {
        let v = ease_in_out(f64::from(i) / 100.0);
        assert!(v >= last);
        last = v;
    }
}

// =============================================================
// AnimationId
// =============================================================

#[test]
fn animation_id_next_increases() {
    assert!(AnimationId(3).next() > AnimationId(3));
    assert_eq!(AnimationId::default(), AnimationId(0));
}

// =============================================================
// Animation
// =============================================================

#[test]
fn new_animation_reads_start_value() {
    let a = opening(0.3);
    assert!(approx_eq(a.current(), 0.3));
    assert!(!a.is_finished());
    assert!(a.is_opening());
}

#[test]
fn advance_reaches_target_at_duration() {
    let mut a = opening(0.0);
    let tick = a.advance(ms(300));
    assert_eq!(tick, AnimationTick { progress: 1.0, finished: true });
}

#[test]
fn advance_past_duration_clamps() {
    let mut a = opening(0.0);
    let tick = a.advance(ms(5_000));
    assert!(tick.finished);
    assert_eq!(tick.progress, 1.0);
}

#[test]
fn sweep_is_eased() {
    let mut a = opening(0.0);
    assert!(approx_eq(a.advance(ms(75)).progress, 0.156_25));
    assert!(approx_eq(a.advance(ms(75)).progress, 0.5));
}

#[test]
fn closing_sweep_heads_to_zero() {
    let mut a = Animation::new(AnimationId(2), Side::Right, 1.0, 0.0, ms(200));
    assert!(!a.is_opening());
    let mid = a.advance(ms(100)).progress;
    assert!(mid < 1.0 && mid > 0.0);
    assert_eq!(a.advance(ms(100)).progress, 0.0);
}

#[test]
fn zero_duration_finishes_on_first_advance() {
    let mut a = Animation::new(AnimationId(1), Side::Left, 0.0, 1.0, Duration::ZERO);
    assert!(a.is_finished());
    assert_eq!(a.advance(Duration::ZERO), AnimationTick { progress: 1.0, finished: true });
}

#[test]
fn current_does_not_advance() {
    let mut a = opening(0.0);
    a.advance(ms(100));
    let first = a.current();
    assert_eq!(a.current(), first);
}

#[test]
fn opening_is_non_decreasing_per_frame() {
    let mut a = opening(0.2);
    let mut last = a.current();
    while !a.is_finished() {
        let p = a.advance(ms(16)).progress;
        assert!(p >= last);
        last = p;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn accessors_report_construction() {
    let a = Animation::new(AnimationId(9), Side::Right, 0.0, 1.0, ms(10));
    assert_eq!(a.id(), AnimationId(9));
    assert_eq!(a.side(), Side::Right);
    assert_eq!(a.target(), 1.0);
}
