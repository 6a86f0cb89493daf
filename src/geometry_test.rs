#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// --- Size ---

#[test]
fn size_new() {
    let s = Size::new(400.0, 800.0);
    assert_eq!(s.width, 400.0);
    assert_eq!(s.height, 800.0);
}

// --- Rect ---

#[test]
fn rect_from_size_sits_at_origin() {
    let r = Rect::from_size(Size::new(400.0, 800.0));
    assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 800.0));
}

#[test]
fn rect_min_and_max_x() {
    let r = Rect::new(-44.0, 0.0, 132.0, 800.0);
    assert_eq!(r.min_x(), -44.0);
    assert_eq!(r.max_x(), 88.0);
}

#[test]
fn rect_contains_interior_point() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(r.contains(Point::new(50.0, 30.0)));
}

#[test]
fn rect_contains_top_left_corner() {
    let r = Rect::new(10.0, 10.0, 100.0, 50.0);
    assert!(r.contains(Point::new(10.0, 10.0)));
}

#[test]
fn rect_excludes_right_and_bottom_edges() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(!r.contains(Point::new(100.0, 10.0)));
    assert!(!r.contains(Point::new(10.0, 50.0)));
}

#[test]
fn rect_excludes_outside_point() {
    let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(!r.contains(Point::new(-1.0, 10.0)));
}

#[test]
fn rect_with_x_keeps_size() {
    let r = Rect::new(0.0, 5.0, 100.0, 50.0).with_x(-20.0);
    assert_eq!(r, Rect::new(-20.0, 5.0, 100.0, 50.0));
}

#[test]
fn rect_serializes_all_fields() {
    let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(json["x"], 1.0);
    assert_eq!(json["width"], 3.0);
    assert_eq!(json["height"], 4.0);
}
