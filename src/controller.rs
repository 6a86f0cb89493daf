//! The side navigation state machine.
//!
//! DESIGN
//! ======
//! `SideNavigation` is the only writer of [`NavigationState`]. Every public
//! entry point (programmatic show/close, attach/detach, drag samples, taps,
//! animation ticks, resizes) is an explicit transition function that updates
//! the state and returns the visual effects as [`Action`]s in the same call.
//! The host applies the actions to its views; nothing is observed implicitly.
//!
//! Only one driver owns progress at a time: either a drag session or an
//! animation. Starting either one first stops the other, adopting its
//! current progress, so there is never a jump and a superseded animation can
//! never run its completion.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::animation::{Animation, AnimationId};
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{
    Decision, DragPhase, DragSample, DragSession, GestureArbiter, GestureEnablement, Recognizer, choose_side,
    decide_release, drag_progress,
};
use crate::hit;
use crate::options::{PanelOptions, Position};
use crate::presentation::{Layout, clamp_progress, hidden_pose};
use crate::registry::{ContainerId, Panel, Side, SideRegistry};

/// Where content lives in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Main,
    Side(Side),
}

/// Stacking position for attached content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    /// Bottom of the main surface, beneath the overlay.
    MainSurface,
    /// Beneath the main surface (back-style panels).
    BelowMain,
    /// Above the main surface and its overlay (front-style panels).
    AboveMain,
}

impl From<Position> for Depth {
    fn from(position: Position) -> Self {
        match position {
            Position::Back => Self::BelowMain,
            Position::Front => Self::AboveMain,
        }
    }
}

/// Effects returned from transitions for the host to apply, in order.
#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action<C> {
    /// Insert the content now registered for `slot` into the view hierarchy.
    ContentAttached { slot: Slot, depth: Depth },
    /// Remove `content` from the view hierarchy; ownership returns to the host.
    ContentDetached { slot: Slot, content: C },
    /// Apply main surface, panel, overlay and shadow geometry.
    Layout(Layout),
    /// Position a panel without touching the main surface.
    PanelFrame { side: Side, frame: Rect },
    /// A drag matched no panel: put the main surface back at offset zero.
    ResetMain,
    /// Show or hide a side panel's view.
    PanelHidden { side: Side, hidden: bool },
    /// Recognizer enablement changed.
    GesturesChanged(GestureEnablement),
    /// Dismiss any active text editing before a side appears.
    EndEditing,
    /// A show (`visible = true`) or close transition settled.
    TransitionFinished { side: Side, visible: bool },
}

/// Who is driving progress right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Idle,
    Dragging,
    Animating,
}

/// The container's navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct NavigationState {
    /// Side currently shown or being shown. `None` implies `progress == 0`.
    pub visible_side: Option<Side>,
    /// Reveal progress of `visible_side`: 0 hidden, 1 fully shown.
    pub progress: f64,
    pub control_mode: ControlMode,
    /// Side the current drag will own, as far as it is known.
    pub committed_direction: Option<Side>,
}

/// Coarse state-machine view of [`NavigationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "side", rename_all = "lowercase")]
pub enum NavPhase {
    Closed,
    Opening(Side),
    Open(Side),
    Closing(Side),
    Dragging(Side),
}

/// A drawer-style container: main content plus up to two side panels.
#[derive(Debug)]
pub struct SideNavigation<C> {
    id: ContainerId,
    bounds: Size,
    main: Option<C>,
    sides: SideRegistry<C>,
    state: NavigationState,
    enablement: GestureEnablement,
    arbiter: GestureArbiter,
    drag: Option<DragSession>,
    animation: Option<Animation>,
    last_animation: AnimationId,
}

impl<C> SideNavigation<C> {
    /// An empty container of the given size.
    #[must_use]
    pub fn new(bounds: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            bounds,
            main: None,
            sides: SideRegistry::new(),
            state: NavigationState::default(),
            enablement: GestureEnablement::default(),
            arbiter: GestureArbiter::default(),
            drag: None,
            animation: None,
            last_animation: AnimationId::default(),
        }
    }

    /// A container that starts with `main` in the main slot.
    #[must_use]
    pub fn with_main(main: C, bounds: Size) -> Self {
        let mut nav = Self::new(bounds);
        nav.main = Some(main);
        nav
    }

    // --- Queries ---

    /// Identity handed to every panel attached here.
    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    #[must_use]
    pub fn visible_side(&self) -> Option<Side> {
        self.state.visible_side
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    #[must_use]
    pub fn phase(&self) -> NavPhase {
        let Some(side) = self.state.visible_side else {
            return NavPhase::Closed;
        };
        match self.state.control_mode {
            ControlMode::Dragging => NavPhase::Dragging(side),
            ControlMode::Animating => match &self.animation {
                Some(anim) if !anim.is_opening() => NavPhase::Closing(side),
                _ => NavPhase::Opening(side),
            },
            ControlMode::Idle => NavPhase::Open(side),
        }
    }

    #[must_use]
    pub fn panel(&self, side: Side) -> Option<&Panel<C>> {
        self.sides.get(side)
    }

    #[must_use]
    pub fn main_content(&self) -> Option<&C> {
        self.main.as_ref()
    }

    /// The visible side's content, or the main content when no side is visible.
    #[must_use]
    pub fn visible_content(&self) -> Option<&C> {
        match self.state.visible_side.and_then(|side| self.sides.get(side)) {
            Some(panel) => Some(panel.content()),
            None => self.main.as_ref(),
        }
    }

    #[must_use]
    pub fn enablement(&self) -> GestureEnablement {
        self.enablement
    }

    /// Generation of the in-flight animation, if any.
    #[must_use]
    pub fn animation_id(&self) -> Option<AnimationId> {
        self.animation.as_ref().map(Animation::id)
    }

    /// Current layout of the visible side.
    #[must_use]
    pub fn layout(&self) -> Option<Layout> {
        let side = self.state.visible_side?;
        let panel = self.sides.get(side)?;
        Some(panel.render(side, self.bounds, self.state.progress))
    }

    // --- Main content ---

    /// Replace the main content, detaching the previous one.
    pub fn set_main_content(&mut self, main: C) -> Vec<Action<C>> {
        let mut actions = Vec::new();
        if let Some(old) = self.main.replace(main) {
            actions.push(Action::ContentDetached { slot: Slot::Main, content: old });
        }
        actions.push(Action::ContentAttached { slot: Slot::Main, depth: Depth::MainSurface });
        actions
    }

    /// Remove the main content without replacing it.
    pub fn take_main_content(&mut self) -> Option<C> {
        self.main.take()
    }

    // --- Side registry ---

    pub fn attach_left(&mut self, content: C, options: PanelOptions) -> Vec<Action<C>> {
        self.attach_side(Side::Left, content, options)
    }

    pub fn attach_right(&mut self, content: C, options: PanelOptions) -> Vec<Action<C>> {
        self.attach_side(Side::Right, content, options)
    }

    /// Attach `content` to `side`, replacing any panel already there.
    ///
    /// A replaced panel that is visible is closed without animation before it
    /// is detached. The new panel starts hidden, in its hidden pose.
    pub fn attach_side(&mut self, side: Side, content: C, options: PanelOptions) -> Vec<Action<C>> {
        let mut actions = Vec::new();
        self.release_side(side, &mut actions);

        let panel = Panel::new(content, options, self.id);
        let depth = Depth::from(panel.options().position());
        let frame = hidden_pose(side, panel.options(), self.bounds).panel;
        self.sides.insert(side, panel);
        tracing::debug!(?side, ?depth, "side attached");

        actions.push(Action::ContentAttached { slot: Slot::Side(side), depth });
        actions.push(Action::PanelHidden { side, hidden: true });
        actions.push(Action::PanelFrame { side, frame });
        self.refresh_edge_gestures(&mut actions);
        actions
    }

    /// Detach the panel on `side`, closing it first if visible. No-op when empty.
    pub fn detach_side(&mut self, side: Side) -> Vec<Action<C>> {
        let mut actions = Vec::new();
        if self.release_side(side, &mut actions) {
            tracing::debug!(?side, "side detached");
            self.refresh_edge_gestures(&mut actions);
        }
        actions
    }

    // --- Programmatic transitions ---

    pub fn show_left(&mut self, animated: bool) -> Vec<Action<C>> {
        self.show_side(Side::Left, animated)
    }

    pub fn show_right(&mut self, animated: bool) -> Vec<Action<C>> {
        self.show_side(Side::Right, animated)
    }

    /// Reveal `side` fully. Silently does nothing when no panel is attached there.
    pub fn show_side(&mut self, side: Side, animated: bool) -> Vec<Action<C>> {
        if !self.sides.contains(side) {
            tracing::debug!(?side, "show ignored: no panel attached");
            return Vec::new();
        }
        let mut actions = Vec::new();
        self.interrupt();
        if self.state.visible_side.is_some_and(|visible| visible != side) {
            self.close_now(&mut actions);
        }
        self.open(side, animated, &mut actions);
        actions
    }

    /// Hide whichever side is visible. No-op when none is.
    pub fn close_visible_side(&mut self, animated: bool) -> Vec<Action<C>> {
        let Some(side) = self.state.visible_side else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        self.interrupt();
        self.animate_to(side, 0.0, animated, &mut actions);
        actions
    }

    /// Advance the in-flight animation by `dt`.
    pub fn advance(&mut self, dt: Duration) -> Vec<Action<C>> {
        let Some(anim) = self.animation.as_mut() else {
            return Vec::new();
        };
        let tick = anim.advance(dt);
        let (side, target) = (anim.side(), anim.target());
        tracing::trace!(?side, progress = tick.progress, "animation tick");

        let mut actions = Vec::new();
        self.apply_progress(side, tick.progress, &mut actions);
        if tick.finished {
            self.animation = None;
            self.finish(side, target, &mut actions);
        }
        actions
    }

    // --- Viewport ---

    /// Update container bounds and re-layout every attached panel.
    pub fn set_bounds(&mut self, bounds: Size) -> Vec<Action<C>> {
        self.bounds = bounds;
        let mut actions = Vec::new();
        for (side, panel) in self.sides.iter() {
            if self.state.visible_side == Some(side) {
                actions.push(Action::Layout(panel.render(side, bounds, self.state.progress)));
            } else {
                actions.push(Action::PanelFrame { side, frame: hidden_pose(side, panel.options(), bounds).panel });
            }
        }
        actions
    }

    // --- Input events ---

    /// Recognizer a drag starting at `pt` would belong to.
    #[must_use]
    pub fn recognizer_at(&self, pt: Point) -> Option<Recognizer> {
        let main_active = self.enablement.main_tap;
        hit::drag_target(pt, self.bounds, &self.enablement, &self.arbiter, main_active)
    }

    /// Feed one drag sample from `recognizer`.
    pub fn on_drag(&mut self, recognizer: Recognizer, phase: DragPhase, sample: DragSample) -> Vec<Action<C>> {
        match phase {
            DragPhase::Began => {
                self.begin_drag(recognizer);
                Vec::new()
            }
            DragPhase::Changed => self.update_drag(recognizer, sample),
            DragPhase::Ended | DragPhase::Cancelled => self.end_drag(recognizer, sample),
        }
    }

    /// A tap over the overlay at `pt`.
    pub fn on_tap_at(&mut self, pt: Point) -> Vec<Action<C>> {
        if hit::tap_target(pt, self.bounds, &self.enablement, &self.arbiter).is_none() {
            return Vec::new();
        }
        self.on_tap()
    }

    /// A tap over the overlay: closes the visible side.
    pub fn on_tap(&mut self) -> Vec<Action<C>> {
        let Some(side) = self.state.visible_side else {
            return Vec::new();
        };
        if !self.enablement.main_tap || !self.arbiter.claim(Recognizer::MainTap) {
            return Vec::new();
        }
        self.arbiter.release();

        let mut actions = Vec::new();
        self.interrupt();
        tracing::debug!(?side, decision = ?Decision::for_tap(), "tap");
        self.settle(side, Decision::for_tap(), &mut actions);
        actions
    }

    fn begin_drag(&mut self, recognizer: Recognizer) {
        if !self.enablement.is_enabled(recognizer) || !self.arbiter.claim(recognizer) {
            return;
        }
        if let Some(anim) = self.animation.take() {
            self.state.progress = clamp_progress(anim.current());
            tracing::debug!(id = ?anim.id(), progress = self.state.progress, "animation interrupted by drag");
        }
        let start_offset = self.layout().map_or(0.0, |l| l.reveal_offset());
        let visible = self.state.visible_side;
        self.drag = Some(DragSession::new(recognizer, start_offset, visible));
        self.state.control_mode = ControlMode::Dragging;
        self.state.committed_direction = visible.or(recognizer.preferred_side());
        tracing::debug!(?recognizer, start_offset, "drag began");
    }

    fn update_drag(&mut self, recognizer: Recognizer, sample: DragSample) -> Vec<Action<C>> {
        let Some(mut session) = self.drag.filter(|s| s.recognizer == recognizer) else {
            return Vec::new();
        };
        let raw = session.raw_offset(sample.translation);
        let side = session
            .side
            .or_else(|| choose_side(raw, self.sides.contains(Side::Left), self.sides.contains(Side::Right)));
        let Some(side) = side else {
            return vec![Action::ResetMain];
        };
        let Some(width) = self.sides.get(side).map(|p| p.width(self.bounds)) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if session.side.is_none() {
            session.side = Some(side);
            self.drag = Some(session);
            self.state.committed_direction = Some(side);
            self.make_visible(side, &mut actions);
        }
        let progress = drag_progress(raw, side, width);
        tracing::trace!(?side, raw, progress, "drag changed");
        self.apply_progress(side, progress, &mut actions);
        actions
    }

    fn end_drag(&mut self, recognizer: Recognizer, sample: DragSample) -> Vec<Action<C>> {
        let Some(session) = self.drag.filter(|s| s.recognizer == recognizer) else {
            return Vec::new();
        };
        self.drag = None;
        self.arbiter.release();
        self.state.control_mode = ControlMode::Idle;
        self.state.committed_direction = None;

        let Some(side) = session.side else {
            return Vec::new();
        };
        let decision = decide_release(self.state.progress, sample.velocity, side);
        tracing::debug!(?side, progress = self.state.progress, velocity = sample.velocity, ?decision, "drag ended");

        let mut actions = Vec::new();
        self.settle(side, decision, &mut actions);
        actions
    }

    // --- Transition internals ---

    /// Stop whichever driver owns progress, keeping the progress it reached.
    fn interrupt(&mut self) {
        if let Some(anim) = self.animation.take() {
            self.state.progress = clamp_progress(anim.current());
            tracing::debug!(id = ?anim.id(), progress = self.state.progress, "animation superseded");
        }
        if self.drag.take().is_some() {
            self.arbiter.release();
            self.state.committed_direction = None;
        }
        self.state.control_mode = ControlMode::Idle;
    }

    fn settle(&mut self, side: Side, decision: Decision, actions: &mut Vec<Action<C>>) {
        match decision {
            Decision::Commit => self.open(side, true, actions),
            Decision::Cancel => self.animate_to(side, 0.0, true, actions),
        }
    }

    fn open(&mut self, side: Side, animated: bool, actions: &mut Vec<Action<C>>) {
        self.make_visible(side, actions);
        actions.push(Action::EndEditing);
        self.animate_to(side, 1.0, animated, actions);
    }

    /// Close the visible side immediately, with no animation.
    fn close_now(&mut self, actions: &mut Vec<Action<C>>) {
        if let Some(side) = self.state.visible_side {
            self.interrupt();
            self.animate_to(side, 0.0, false, actions);
        }
    }

    /// Close `side` if visible, then detach its panel. Returns whether a panel was removed.
    fn release_side(&mut self, side: Side, actions: &mut Vec<Action<C>>) -> bool {
        if self.state.visible_side == Some(side) {
            self.close_now(actions);
        }
        match self.sides.remove(side) {
            Some(old) => {
                actions.push(Action::ContentDetached { slot: Slot::Side(side), content: old.into_content() });
                true
            }
            None => false,
        }
    }

    fn make_visible(&mut self, side: Side, actions: &mut Vec<Action<C>>) {
        if self.state.visible_side != Some(side) {
            self.state.visible_side = Some(side);
            actions.push(Action::PanelHidden { side, hidden: false });
        }
    }

    /// Sweep `side` to `target`, or jump there when not animated or already there.
    fn animate_to(&mut self, side: Side, target: f64, animated: bool, actions: &mut Vec<Action<C>>) {
        let Some(duration) = self.sides.get(side).map(|p| p.options().animation_duration()) else {
            return;
        };
        let from = self.state.progress;
        if !animated || duration.is_zero() || (from - target).abs() < f64::EPSILON {
            self.apply_progress(side, target, actions);
            self.finish(side, target, actions);
            return;
        }
        self.last_animation = self.last_animation.next();
        let anim = Animation::new(self.last_animation, side, from, target, duration);
        tracing::debug!(id = ?anim.id(), ?side, from, target, "animation started");
        self.animation = Some(anim);
        self.state.control_mode = ControlMode::Animating;
    }

    fn apply_progress(&mut self, side: Side, progress: f64, actions: &mut Vec<Action<C>>) {
        let Some(panel) = self.sides.get(side) else {
            return;
        };
        self.state.progress = clamp_progress(progress);
        actions.push(Action::Layout(panel.render(side, self.bounds, self.state.progress)));
    }

    /// Settle a transition: fully shown hands input to the main surface,
    /// fully hidden hands it back to the edges.
    fn finish(&mut self, side: Side, target: f64, actions: &mut Vec<Action<C>>) {
        self.state.control_mode = ControlMode::Idle;
        if target >= 1.0 {
            self.state.progress = 1.0;
            if let Some(panel) = self.sides.get(side) {
                self.set_enablement(GestureEnablement::main_active(panel.options()), actions);
            }
            tracing::debug!(?side, "side shown");
            actions.push(Action::TransitionFinished { side, visible: true });
        } else {
            self.state.progress = 0.0;
            self.state.visible_side = None;
            actions.push(Action::PanelHidden { side, hidden: true });
            self.set_enablement(GestureEnablement::edges_active(&self.sides), actions);
            tracing::debug!(?side, "side closed");
            actions.push(Action::TransitionFinished { side, visible: false });
        }
    }

    /// Recompute edge recognizers after the registry changed, unless a side owns input.
    fn refresh_edge_gestures(&mut self, actions: &mut Vec<Action<C>>) {
        if self.state.visible_side.is_none() {
            self.set_enablement(GestureEnablement::edges_active(&self.sides), actions);
        }
    }

    fn set_enablement(&mut self, enablement: GestureEnablement, actions: &mut Vec<Action<C>>) {
        if self.enablement != enablement {
            self.enablement = enablement;
            actions.push(Action::GesturesChanged(enablement));
        }
    }
}
