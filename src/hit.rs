#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::EDGE_ZONE;
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{GestureArbiter, GestureEnablement, Recognizer};

/// Which drag recognizer (if any) a pointer-down at `pt` belongs to.
///
/// While the main surface is active (a side has settled open) the whole
/// container is overlay, so any point maps to the main pan. Otherwise only the
/// edge strips start a drag. Disabled recognizers and recognizers blocked by
/// the arbiter never match.
#[must_use]
pub fn drag_target(
    pt: Point,
    bounds: Size,
    enablement: &GestureEnablement,
    arbiter: &GestureArbiter,
    main_active: bool,
) -> Option<Recognizer> {
    let frame = Rect::from_size(bounds);
    if !frame.contains(pt) {
        return None;
    }
    let candidate = if main_active {
        overlay_accepts(enablement).then_some(Recognizer::MainPan)?
    } else if pt.x < frame.min_x() + EDGE_ZONE {
        Recognizer::LeftEdge
    } else if pt.x >= frame.max_x() - EDGE_ZONE {
        Recognizer::RightEdge
    } else {
        return None;
    };
    usable(candidate, enablement, arbiter).then_some(candidate)
}

/// Whether a tap at `pt` reaches the tap recognizer.
#[must_use]
pub fn tap_target(pt: Point, bounds: Size, enablement: &GestureEnablement, arbiter: &GestureArbiter) -> Option<Recognizer> {
    if !Rect::from_size(bounds).contains(pt) || !overlay_accepts(enablement) {
        return None;
    }
    usable(Recognizer::MainTap, enablement, arbiter).then_some(Recognizer::MainTap)
}

fn overlay_accepts(enablement: &GestureEnablement) -> bool {
    enablement.overlay_hit_testing
}

fn usable(recognizer: Recognizer, enablement: &GestureEnablement, arbiter: &GestureArbiter) -> bool {
    enablement.is_enabled(recognizer) && !arbiter.is_blocked(recognizer)
}
