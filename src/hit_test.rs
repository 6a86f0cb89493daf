use super::*;
use crate::options::PanelOptions;

fn bounds() -> Size {
    Size::new(400.0, 800.0)
}

fn edges() -> GestureEnablement {
    GestureEnablement { left_edge: true, right_edge: true, ..Default::default() }
}

fn main_active() -> GestureEnablement {
    GestureEnablement::main_active(&PanelOptions::default())
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// --- drag_target: edges ---

#[test]
fn left_strip_maps_to_left_edge() {
    let a = GestureArbiter::default();
    assert_eq!(drag_target(pt(5.0, 100.0), bounds(), &edges(), &a, false), Some(Recognizer::LeftEdge));
}

#[test]
fn right_strip_maps_to_right_edge() {
    let a = GestureArbiter::default();
    assert_eq!(drag_target(pt(395.0, 100.0), bounds(), &edges(), &a, false), Some(Recognizer::RightEdge));
}

#[test]
fn middle_of_screen_starts_nothing_when_closed() {
    let a = GestureArbiter::default();
    assert_eq!(drag_target(pt(200.0, 100.0), bounds(), &edges(), &a, false), None);
}

#[test]
fn disabled_edge_does_not_match() {
    let a = GestureArbiter::default();
    let e = GestureEnablement { left_edge: false, right_edge: true, ..Default::default() };
    assert_eq!(drag_target(pt(5.0, 100.0), bounds(), &e, &a, false), None);
}

#[test]
fn edge_blocked_by_partner() {
    let mut a = GestureArbiter::default();
    a.claim(Recognizer::LeftEdge);
    assert_eq!(drag_target(pt(395.0, 100.0), bounds(), &edges(), &a, false), None);
}

#[test]
fn point_outside_container_misses() {
    let a = GestureArbiter::default();
    assert_eq!(drag_target(pt(-5.0, 100.0), bounds(), &edges(), &a, false), None);
    assert_eq!(drag_target(pt(5.0, 900.0), bounds(), &edges(), &a, false), None);
}

// --- drag_target: visible side ---

#[test]
fn anywhere_maps_to_main_pan_when_visible() {
    let a = GestureArbiter::default();
    assert_eq!(drag_target(pt(200.0, 100.0), bounds(), &main_active(), &a, true), Some(Recognizer::MainPan));
    assert_eq!(drag_target(pt(5.0, 100.0), bounds(), &main_active(), &a, true), Some(Recognizer::MainPan));
}

#[test]
fn pass_through_overlay_starts_nothing() {
    let a = GestureArbiter::default();
    let opts = PanelOptions::builder().always_interaction_enabled(true).build().unwrap();
    let e = GestureEnablement::main_active(&opts);
    assert_eq!(drag_target(pt(200.0, 100.0), bounds(), &e, &a, true), None);
}

// --- tap_target ---

#[test]
fn tap_hits_overlay_when_visible() {
    let a = GestureArbiter::default();
    assert_eq!(tap_target(pt(200.0, 100.0), bounds(), &main_active(), &a), Some(Recognizer::MainTap));
}

#[test]
fn tap_misses_when_closed() {
    let a = GestureArbiter::default();
    assert_eq!(tap_target(pt(200.0, 100.0), bounds(), &edges(), &a), None);
}

#[test]
fn tap_loses_to_pan() {
    let mut a = GestureArbiter::default();
    a.claim(Recognizer::MainPan);
    assert_eq!(tap_target(pt(200.0, 100.0), bounds(), &main_active(), &a), None);
}
