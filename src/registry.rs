//! Side slots and the panels attached to them.
//!
//! A container has at most one panel per [`Side`]. Each [`Panel`] pairs the
//! caller's content handle with its immutable options, the presentation style
//! chosen when it was attached, and the id of the container that owns it.
//! [`SideRegistry`] is plain storage: replacing a panel hands the old one back
//! so the controller can close and detach it first.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Size;
use crate::options::PanelOptions;
use crate::presentation::{Layout, PresentationStyle};

/// Identifies one side navigation container.
pub type ContainerId = Uuid;

/// A drawer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Direction the main surface moves to reveal this side: `+1` for left, `-1` for right.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Content attached to one side plus its presentation configuration.
#[derive(Debug)]
pub struct Panel<C> {
    content: C,
    options: PanelOptions,
    style: &'static dyn PresentationStyle,
    owner: ContainerId,
}

impl<C> Panel<C> {
    /// Wrap `content` for the container `owner`. The style is fixed from `options.position()`.
    #[must_use]
    pub fn new(content: C, options: PanelOptions, owner: ContainerId) -> Self {
        let style = options.position().style();
        Self { content, options, style, owner }
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Consume the panel, returning the caller's content.
    #[must_use]
    pub fn into_content(self) -> C {
        self.content
    }

    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// The container this panel was attached to.
    #[must_use]
    pub fn owner(&self) -> ContainerId {
        self.owner
    }

    /// Panel width for the given container bounds.
    #[must_use]
    pub fn width(&self, bounds: Size) -> f64 {
        self.options.panel_width(bounds.width)
    }

    /// Layout of this panel on `side` at `progress`.
    #[must_use]
    pub fn render(&self, side: Side, bounds: Size, progress: f64) -> Layout {
        self.style.render(side, &self.options, bounds, progress)
    }
}

/// At most one panel per side.
#[derive(Debug)]
pub struct SideRegistry<C> {
    left: Option<Panel<C>>,
    right: Option<Panel<C>>,
}

impl<C> Default for SideRegistry<C> {
    fn default() -> Self {
        Self { left: None, right: None }
    }
}

impl<C> SideRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, side: Side) -> Option<&Panel<C>> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    #[must_use]
    pub fn contains(&self, side: Side) -> bool {
        self.get(side).is_some()
    }

    /// Store `panel` on `side`, returning the panel it replaced.
    pub fn insert(&mut self, side: Side, panel: Panel<C>) -> Option<Panel<C>> {
        self.slot(side).replace(panel)
    }

    pub fn remove(&mut self, side: Side) -> Option<Panel<C>> {
        self.slot(side).take()
    }

    /// Attached panels, left first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &Panel<C>)> {
        Side::ALL.into_iter().filter_map(|side| self.get(side).map(|p| (side, p)))
    }

    fn slot(&mut self, side: Side) -> &mut Option<Panel<C>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
