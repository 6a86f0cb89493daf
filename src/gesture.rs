//! Gesture model: recognizers, enablement policy, arbitration and release decisions.
//!
//! This module defines the types consumed by the controller's input path.
//! `Recognizer` names the four gesture sources, `GestureEnablement` says which
//! of them may fire in the current state, `GestureArbiter` makes the edge
//! recognizers (and tap vs pan) mutually exclusive within one gesture
//! sequence, and `DragSession` carries the context captured at drag-begin.
//! The free functions hold the progress math and the commit/cancel rule so
//! they can be tested without a controller.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::consts::{COMMIT_PROGRESS, SWIPE_VELOCITY};
use crate::options::PanelOptions;
use crate::registry::{Side, SideRegistry};

/// A gesture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recognizer {
    /// Drag starting at the container's left edge.
    LeftEdge,
    /// Drag starting at the container's right edge.
    RightEdge,
    /// Drag anywhere over the overlay while a side is visible.
    MainPan,
    /// Tap over the overlay while a side is visible.
    MainTap,
}

impl Recognizer {
    /// Side this recognizer leans toward before the drag direction is known.
    #[must_use]
    pub fn preferred_side(self) -> Option<Side> {
        match self {
            Self::LeftEdge => Some(Side::Left),
            Self::RightEdge => Some(Side::Right),
            Self::MainPan | Self::MainTap => None,
        }
    }

    /// The recognizer that must fail before this one may begin, if any.
    #[must_use]
    pub fn exclusive_with(self) -> Option<Self> {
        match self {
            Self::LeftEdge => Some(Self::RightEdge),
            Self::RightEdge => Some(Self::LeftEdge),
            Self::MainTap => Some(Self::MainPan),
            Self::MainPan => None,
        }
    }
}

/// Lifecycle phase of a drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One horizontal drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    /// Horizontal translation since the drag began.
    pub translation: f64,
    /// Horizontal velocity in units/second (positive = rightward).
    pub velocity: f64,
}

impl DragSample {
    #[must_use]
    pub fn new(translation: f64, velocity: f64) -> Self {
        Self { translation, velocity }
    }
}

/// Which recognizers may fire, plus overlay hit-testing.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GestureEnablement {
    pub left_edge: bool,
    pub right_edge: bool,
    pub main_pan: bool,
    pub main_tap: bool,
    /// When false, touches fall through the overlay to the main content.
    pub overlay_hit_testing: bool,
}

impl GestureEnablement {
    /// Policy while no side is visible: only edge drags, each gated by its panel's `panning_enabled`.
    #[must_use]
    pub fn edges_active<C>(registry: &SideRegistry<C>) -> Self {
        let pans = |side| registry.get(side).is_some_and(|p| p.options().panning_enabled());
        Self { left_edge: pans(Side::Left), right_edge: pans(Side::Right), ..Self::default() }
    }

    /// Policy while a side is visible: tap always, pan per options, edges off.
    #[must_use]
    pub fn main_active(options: &PanelOptions) -> Self {
        Self {
            left_edge: false,
            right_edge: false,
            main_pan: options.panning_enabled(),
            main_tap: true,
            overlay_hit_testing: !options.always_interaction_enabled(),
        }
    }

    #[must_use]
    pub fn is_enabled(&self, recognizer: Recognizer) -> bool {
        match recognizer {
            Recognizer::LeftEdge => self.left_edge,
            Recognizer::RightEdge => self.right_edge,
            Recognizer::MainPan => self.main_pan,
            Recognizer::MainTap => self.main_tap,
        }
    }
}

/// Owner of the current gesture sequence.
///
/// Only one recognizer may own a sequence. A recognizer whose exclusive
/// partner already owns it is rejected, which gives the edge pair
/// "require the other to fail" semantics and makes a tap lose to a pan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureArbiter {
    owner: Option<Recognizer>,
}

impl GestureArbiter {
    /// Try to take ownership of the sequence. Re-claiming by the owner succeeds.
    pub fn claim(&mut self, recognizer: Recognizer) -> bool {
        match self.owner {
            None => {
                self.owner = Some(recognizer);
                true
            }
            Some(owner) => owner == recognizer,
        }
    }

    /// Whether `recognizer` is currently blocked by its exclusive partner.
    #[must_use]
    pub fn is_blocked(&self, recognizer: Recognizer) -> bool {
        self.owner.is_some_and(|owner| Some(owner) == recognizer.exclusive_with())
    }

    /// End the sequence.
    pub fn release(&mut self) {
        self.owner = None;
    }
}

/// Context captured at drag-begin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub recognizer: Recognizer,
    /// Signed reveal offset when the drag began; translations are added to it.
    pub start_offset: f64,
    /// Side the drag is driving, once known.
    pub side: Option<Side>,
}

impl DragSession {
    #[must_use]
    pub fn new(recognizer: Recognizer, start_offset: f64, side: Option<Side>) -> Self {
        Self { recognizer, start_offset, side }
    }

    /// Offset the drag has reached after `translation`.
    #[must_use]
    pub fn raw_offset(&self, translation: f64) -> f64 {
        self.start_offset + translation
    }
}

/// Outcome of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Animate to fully shown.
    Commit,
    /// Animate to hidden.
    Cancel,
}

impl Decision {
    /// A tap while a side is visible always closes it.
    #[must_use]
    pub fn for_tap() -> Self {
        Self::Cancel
    }
}

/// Side to drive when none is visible: left for a rightward pull, right for a leftward one.
#[must_use]
pub fn choose_side(raw_offset: f64, has_left: bool, has_right: bool) -> Option<Side> {
    if raw_offset > 0.0 && has_left {
        Some(Side::Left)
    } else if raw_offset < 0.0 && has_right {
        Some(Side::Right)
    } else {
        None
    }
}

/// Progress of `side` for a drag at `raw_offset`.
///
/// `min(|offset|, width) / width`, except that an offset on the wrong side of
/// zero for `side` clamps to 0 instead of crossing to the other side. A
/// non-finite offset reads as hidden.
#[must_use]
pub fn drag_progress(raw_offset: f64, side: Side, panel_width: f64) -> f64 {
    if panel_width <= 0.0 {
        return 0.0;
    }
    let toward = raw_offset * side.sign();
    if !toward.is_finite() || toward <= 0.0 {
        return 0.0;
    }
    toward.min(panel_width) / panel_width
}

/// Commit when past halfway, or when released at swipe speed in the opening direction.
#[must_use]
pub fn decide_release(progress: f64, velocity: f64, side: Side) -> Decision {
    let opening_velocity = velocity * side.sign();
    if progress > COMMIT_PROGRESS || opening_velocity >= SWIPE_VELOCITY {
        Decision::Commit
    } else {
        Decision::Cancel
    }
}
