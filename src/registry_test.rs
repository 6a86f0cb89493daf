#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::options::Position;

// =============================================================
// Helpers
// =============================================================

fn panel(content: &'static str) -> Panel<&'static str> {
    Panel::new(content, PanelOptions::default(), Uuid::nil())
}

// =============================================================
// Side
// =============================================================

#[test]
fn side_sign() {
    assert_eq!(Side::Left.sign(), 1.0);
    assert_eq!(Side::Right.sign(), -1.0);
}

#[test]
fn side_all_is_left_then_right() {
    assert_eq!(Side::ALL, [Side::Left, Side::Right]);
}

#[test]
fn side_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Side::Right).unwrap(), "\"right\"");
}

// =============================================================
// Panel
// =============================================================

#[test]
fn panel_exposes_content_and_owner() {
    let owner = Uuid::new_v4();
    let p = Panel::new("menu", PanelOptions::default(), owner);
    assert_eq!(*p.content(), "menu");
    assert_eq!(p.owner(), owner);
}

#[test]
fn panel_style_follows_position() {
    let opts = PanelOptions::builder().position(Position::Front).build().unwrap();
    let bounds = Size::new(400.0, 800.0);
    let p = Panel::new((), opts, Uuid::nil());
    assert_eq!(p.render(Side::Left, bounds, 0.5).position, Position::Front);
    assert_eq!(panel("x").render(Side::Left, bounds, 0.5).position, Position::Back);
}

#[test]
fn panel_width_uses_bounds() {
    let p = panel("x");
    assert!((p.width(Size::new(400.0, 10.0)) - 132.0).abs() < 1e-9);
}

#[test]
fn panel_render_matches_free_function() {
    let p = panel("x");
    let bounds = Size::new(400.0, 800.0);
    assert_eq!(
        p.render(Side::Left, bounds, 0.5),
        crate::presentation::render(Side::Left, p.options(), bounds, 0.5)
    );
}

#[test]
fn panel_into_content_returns_handle() {
    assert_eq!(panel("menu").into_content(), "menu");
}

// =============================================================
// SideRegistry
// =============================================================

#[test]
fn registry_starts_empty() {
    let r: SideRegistry<&str> = SideRegistry::new();
    assert!(!r.contains(Side::Left));
    assert_eq!(r.iter().count(), 0);
    assert!(r.get(Side::Right).is_none());
}

#[test]
fn insert_fills_only_that_side() {
    let mut r = SideRegistry::new();
    assert!(r.insert(Side::Left, panel("menu")).is_none());
    assert!(r.contains(Side::Left));
    assert!(!r.contains(Side::Right));
}

#[test]
fn insert_returns_replaced_panel() {
    let mut r = SideRegistry::new();
    r.insert(Side::Right, panel("old"));
    let old = r.insert(Side::Right, panel("new")).map(Panel::into_content);
    assert_eq!(old, Some("old"));
    assert_eq!(r.get(Side::Right).map(|p| *p.content()), Some("new"));
}

#[test]
fn remove_empties_slot() {
    let mut r = SideRegistry::new();
    r.insert(Side::Left, panel("menu"));
    assert_eq!(r.remove(Side::Left).map(Panel::into_content), Some("menu"));
    assert!(r.remove(Side::Left).is_none());
    assert!(!r.contains(Side::Left));
}

#[test]
fn iter_yields_left_first() {
    let mut r = SideRegistry::new();
    r.insert(Side::Right, panel("r"));
    r.insert(Side::Left, panel("l"));
    let order: Vec<_> = r.iter().map(|(side, p)| (side, *p.content())).collect();
    assert_eq!(order, vec![(Side::Left, "l"), (Side::Right, "r")]);
}
