//! Shared numeric constants for the side navigation crate.

// ── Gestures ────────────────────────────────────────────────────

/// Release velocity (units/second) at or above which a drag counts as a swipe.
pub const SWIPE_VELOCITY: f64 = 600.0;

/// Progress strictly above which a slow release commits to fully shown.
pub const COMMIT_PROGRESS: f64 = 0.5;

/// Width of the screen-edge strip that starts an edge drag, in points.
pub const EDGE_ZONE: f64 = 20.0;

// ── Presentation ────────────────────────────────────────────────

/// A back-style panel starts offscreen by `panel_width / PARALLAX_DIVISOR`.
pub const PARALLAX_DIVISOR: f64 = 3.0;

// ── Option defaults ─────────────────────────────────────────────

pub const DEFAULT_WIDTH_PERCENT: f64 = 0.33;
pub const DEFAULT_ANIMATION_SECS: f64 = 0.3;
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.5;
pub const DEFAULT_SHADOW_OPACITY: f64 = 0.5;
pub const DEFAULT_SCALE: f64 = 1.0;
