//! Panel configuration: presentation position, colours and validated options.
//!
//! DESIGN
//! ======
//! `PanelOptions` is immutable once built. Every construction path (the
//! builder, `Default`, serde) funnels through one validator, so an invalid
//! value is rejected at the API boundary and never reaches the gesture path.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ANIMATION_SECS, DEFAULT_OVERLAY_OPACITY, DEFAULT_SCALE, DEFAULT_SHADOW_OPACITY, DEFAULT_WIDTH_PERCENT,
};
use crate::presentation::{BackStyle, FrontStyle, PresentationStyle};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error returned when a colour string is not `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour '{0}' (expected #RRGGBB or #RRGGBBAA)")]
pub struct ColorParseError(pub String);

/// Error returned when panel options fall outside their valid ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("width percent must be in (0, 1], got {0}")]
    WidthPercent(f64),
    #[error("animation duration must be a finite number of seconds >= 0, got {0}")]
    AnimationDuration(f64),
    #[error("overlay opacity must be in [0, 1], got {0}")]
    OverlayOpacity(f64),
    #[error("shadow opacity must be in [0, 1], got {0}")]
    ShadowOpacity(f64),
    #[error("scale must be in (0, 1], got {0}")]
    Scale(f64),
}

// =============================================================================
// POSITION
// =============================================================================

/// Whether a panel is drawn beneath or above the main surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Panel sits above the main surface and slides over it.
    Front,
    /// Panel sits beneath the main surface, which slides away to reveal it.
    #[default]
    Back,
}

impl Position {
    /// The presentation strategy for this position.
    #[must_use]
    pub fn style(self) -> &'static dyn PresentationStyle {
        match self {
            Self::Front => &FrontStyle,
            Self::Back => &BackStyle,
        }
    }
}

// =============================================================================
// COLOR
// =============================================================================

/// An sRGB colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const CLEAR: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a })
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

// =============================================================================
// PANEL OPTIONS
// =============================================================================

/// Presentation configuration for one side panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPanelOptions", into = "RawPanelOptions")]
pub struct PanelOptions {
    width_percent: f64,
    animation_secs: f64,
    overlay_color: Color,
    overlay_opacity: f64,
    shadow_color: Color,
    shadow_opacity: f64,
    scale: f64,
    always_interaction_enabled: bool,
    panning_enabled: bool,
    position: Position,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            width_percent: DEFAULT_WIDTH_PERCENT,
            animation_secs: DEFAULT_ANIMATION_SECS,
            overlay_color: Color::BLACK,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
            shadow_color: Color::BLACK,
            shadow_opacity: DEFAULT_SHADOW_OPACITY,
            scale: DEFAULT_SCALE,
            always_interaction_enabled: false,
            panning_enabled: true,
            position: Position::Back,
        }
    }
}

impl PanelOptions {
    /// Start from the defaults and override fields fluently.
    #[must_use]
    pub fn builder() -> PanelOptionsBuilder {
        PanelOptionsBuilder::default()
    }

    /// Parse and validate options from a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` for malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Fraction of the container width occupied by the panel.
    #[must_use]
    pub fn width_percent(&self) -> f64 {
        self.width_percent
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_secs_f64(self.animation_secs)
    }

    #[must_use]
    pub fn overlay_color(&self) -> Color {
        self.overlay_color
    }

    /// Overlay opacity at full reveal.
    #[must_use]
    pub fn overlay_opacity(&self) -> f64 {
        self.overlay_opacity
    }

    #[must_use]
    pub fn shadow_color(&self) -> Color {
        self.shadow_color
    }

    #[must_use]
    pub fn shadow_opacity(&self) -> f64 {
        self.shadow_opacity
    }

    /// Main-surface scale at full reveal (back style only). `1.0` disables scaling.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// When set, touches pass through the overlay to the main content while the panel is open.
    #[must_use]
    pub fn always_interaction_enabled(&self) -> bool {
        self.always_interaction_enabled
    }

    #[must_use]
    pub fn panning_enabled(&self) -> bool {
        self.panning_enabled
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Panel width for a container of the given width.
    #[must_use]
    pub fn panel_width(&self, container_width: f64) -> f64 {
        container_width * self.width_percent
    }

    fn validate(self) -> Result<Self, OptionsError> {
        if !(self.width_percent > 0.0 && self.width_percent <= 1.0) {
            return Err(OptionsError::WidthPercent(self.width_percent));
        }
        if Duration::try_from_secs_f64(self.animation_secs).is_err() {
            return Err(OptionsError::AnimationDuration(self.animation_secs));
        }
        if !unit_interval(self.overlay_opacity) {
            return Err(OptionsError::OverlayOpacity(self.overlay_opacity));
        }
        if !unit_interval(self.shadow_opacity) {
            return Err(OptionsError::ShadowOpacity(self.shadow_opacity));
        }
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(OptionsError::Scale(self.scale));
        }
        Ok(self)
    }
}

/// NaN fails every comparison, so it is rejected here too.
fn unit_interval(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

// =============================================================================
// BUILDER
// =============================================================================

/// Fluent builder for [`PanelOptions`]; validation happens in [`PanelOptionsBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct PanelOptionsBuilder {
    raw: RawPanelOptions,
}

impl PanelOptionsBuilder {
    #[must_use]
    pub fn width_percent(mut self, value: f64) -> Self {
        self.raw.width_percent = value;
        self
    }

    /// Animation duration in seconds.
    #[must_use]
    pub fn animation_duration(mut self, secs: f64) -> Self {
        self.raw.animation_duration = secs;
        self
    }

    #[must_use]
    pub fn overlay_color(mut self, color: Color) -> Self {
        self.raw.overlay_color = color;
        self
    }

    #[must_use]
    pub fn overlay_opacity(mut self, value: f64) -> Self {
        self.raw.overlay_opacity = value;
        self
    }

    #[must_use]
    pub fn shadow_color(mut self, color: Color) -> Self {
        self.raw.shadow_color = color;
        self
    }

    #[must_use]
    pub fn shadow_opacity(mut self, value: f64) -> Self {
        self.raw.shadow_opacity = value;
        self
    }

    #[must_use]
    pub fn scale(mut self, value: f64) -> Self {
        self.raw.scale = value;
        self
    }

    #[must_use]
    pub fn always_interaction_enabled(mut self, value: bool) -> Self {
        self.raw.always_interaction_enabled = value;
        self
    }

    #[must_use]
    pub fn panning_enabled(mut self, value: bool) -> Self {
        self.raw.panning_enabled = value;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.raw.position = position;
        self
    }

    /// Validate and freeze the options.
    ///
    /// # Errors
    ///
    /// Returns the first [`OptionsError`] found, checking fields in declaration order.
    pub fn build(self) -> Result<PanelOptions, OptionsError> {
        PanelOptions::try_from(self.raw)
    }
}

// =============================================================================
// SERDE MIRROR
// =============================================================================

/// Wire shape of [`PanelOptions`]: durations in seconds, every field optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct RawPanelOptions {
    width_percent: f64,
    animation_duration: f64,
    overlay_color: Color,
    overlay_opacity: f64,
    shadow_color: Color,
    shadow_opacity: f64,
    scale: f64,
    always_interaction_enabled: bool,
    panning_enabled: bool,
    position: Position,
}

impl Default for RawPanelOptions {
    fn default() -> Self {
        PanelOptions::default().into()
    }
}

impl TryFrom<RawPanelOptions> for PanelOptions {
    type Error = OptionsError;

    fn try_from(raw: RawPanelOptions) -> Result<Self, Self::Error> {
        Self {
            width_percent: raw.width_percent,
            animation_secs: raw.animation_duration,
            overlay_color: raw.overlay_color,
            overlay_opacity: raw.overlay_opacity,
            shadow_color: raw.shadow_color,
            shadow_opacity: raw.shadow_opacity,
            scale: raw.scale,
            always_interaction_enabled: raw.always_interaction_enabled,
            panning_enabled: raw.panning_enabled,
            position: raw.position,
        }
        .validate()
    }
}

impl From<PanelOptions> for RawPanelOptions {
    fn from(options: PanelOptions) -> Self {
        Self {
            width_percent: options.width_percent,
            animation_duration: options.animation_secs,
            overlay_color: options.overlay_color,
            overlay_opacity: options.overlay_opacity,
            shadow_color: options.shadow_color,
            shadow_opacity: options.shadow_opacity,
            scale: options.scale,
            always_interaction_enabled: options.always_interaction_enabled,
            panning_enabled: options.panning_enabled,
            position: options.position,
        }
    }
}
