//! Presentation: maps a side's reveal progress to panel and main-surface geometry.
//!
//! This module is pure. It receives read-only options, the container bounds
//! and a progress value and produces a [`Layout`]; it never mutates
//! navigation state. Panel width is recomputed from the bounds on every call,
//! so a resize or rotation is picked up by simply rendering again.
//!
//! Two strategies exist, selected once per panel from [`Position`]:
//! [`BackStyle`] (panel beneath the main surface, which slides and optionally
//! scales away while the panel parallaxes in) and [`FrontStyle`] (panel above
//! a fixed main surface, sliding in from offscreen).

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use std::fmt;

use serde::Serialize;

use crate::consts::PARALLAX_DIVISOR;
use crate::geometry::{Rect, Size};
use crate::options::{Color, PanelOptions, Position};
use crate::registry::Side;

/// Dimming layer between the main content and whatever covers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub color: Color,
    pub opacity: f64,
}

/// Shadow cast by the main surface's visual layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f64,
}

/// Geometry and decoration for one side at one progress value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub side: Side,
    pub position: Position,
    /// Reveal progress this layout was rendered for, clamped to [0, 1].
    pub progress: f64,
    /// Main surface frame.
    pub main: Rect,
    /// Uniform scale applied to the main surface around its center.
    pub main_scale: f64,
    /// Side panel frame.
    pub panel: Rect,
    pub overlay: Overlay,
    pub shadow: Shadow,
}

impl Layout {
    /// Signed distance the drawer is pulled open: positive for left, negative for right.
    ///
    /// Equals the main surface offset in back style; front style keeps the main
    /// surface fixed but uses the same value as the drag origin.
    #[must_use]
    pub fn reveal_offset(&self) -> f64 {
        self.side.sign() * self.panel.width * self.progress
    }
}

/// Strategy for laying out one presentation position.
pub trait PresentationStyle: fmt::Debug + Sync {
    /// Position this style implements.
    fn position(&self) -> Position;

    /// Main surface frame and scale at `progress`.
    fn main(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> (Rect, f64);

    /// Panel frame at `progress`.
    fn panel(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> Rect;

    /// Full layout at `progress`. Progress outside [0, 1] is clamped.
    fn render(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> Layout {
        let progress = clamp_progress(progress);
        let (main, main_scale) = self.main(side, options, bounds, progress);
        Layout {
            side,
            position: self.position(),
            progress,
            main,
            main_scale,
            panel: self.panel(side, options, bounds, progress),
            overlay: overlay(options, progress),
            shadow: shadow(options, progress),
        }
    }
}

/// Panel beneath the main surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackStyle;

impl PresentationStyle for BackStyle {
    fn position(&self) -> Position {
        Position::Back
    }

    fn main(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> (Rect, f64) {
        let width = options.panel_width(bounds.width);
        let main = Rect::from_size(bounds).with_x(side.sign() * width * progress);
        let scale = 1.0 - (1.0 - options.scale()) * progress;
        (main, scale)
    }

    fn panel(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> Rect {
        let width = options.panel_width(bounds.width);
        let parallax = width / PARALLAX_DIVISOR;
        let x = match side {
            Side::Left => parallax * progress - parallax,
            Side::Right => (bounds.width - width) + parallax * (1.0 - progress),
        };
        Rect::new(x, 0.0, width, bounds.height)
    }
}

/// Panel above the main surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontStyle;

impl PresentationStyle for FrontStyle {
    fn position(&self) -> Position {
        Position::Front
    }

    fn main(&self, _side: Side, _options: &PanelOptions, bounds: Size, _progress: f64) -> (Rect, f64) {
        (Rect::from_size(bounds), 1.0)
    }

    fn panel(&self, side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> Rect {
        let width = options.panel_width(bounds.width);
        let x = match side {
            Side::Left => -width + width * progress,
            Side::Right => bounds.width - width * progress,
        };
        Rect::new(x, 0.0, width, bounds.height)
    }
}

/// Layout for `side` at `progress`, using the style its options select.
#[must_use]
pub fn render(side: Side, options: &PanelOptions, bounds: Size, progress: f64) -> Layout {
    options.position().style().render(side, options, bounds, progress)
}

/// Fully hidden pose, used for freshly attached panels and hidden panels on resize.
#[must_use]
pub fn hidden_pose(side: Side, options: &PanelOptions, bounds: Size) -> Layout {
    render(side, options, bounds, 0.0)
}

/// Clamp into [0, 1]; NaN reads as hidden.
#[must_use]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) }
}

fn overlay(options: &PanelOptions, progress: f64) -> Overlay {
    Overlay { color: options.overlay_color(), opacity: options.overlay_opacity() * progress }
}

fn shadow(options: &PanelOptions, progress: f64) -> Shadow {
    let opacity = if progress > 0.0 { options.shadow_opacity() } else { 0.0 };
    Shadow { color: options.shadow_color(), opacity }
}
