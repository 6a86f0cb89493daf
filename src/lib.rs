//! Headless drawer-style side navigation.
//!
//! This crate owns the logic of a side-navigation container: a main content
//! surface flanked by up to two dismissible side panels. It translates raw
//! drag samples, taps and programmatic calls into a single reveal progress per
//! side, decides whether a released gesture commits or cancels, and maps that
//! progress to panel/main-surface geometry. The host view system is
//! responsible only for wiring input events to the controller and applying the
//! returned [`controller::Action`]s to its views.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The [`controller::SideNavigation`] state machine and its action protocol |
//! | [`registry`] | Side slots and the panels attached to them |
//! | [`options`] | Panel configuration, validation and colours |
//! | [`presentation`] | Back/front presentation styles mapping progress to layout |
//! | [`gesture`] | Recognizers, enablement policy, arbitration and release decisions |
//! | [`hit`] | Mapping pointer-down locations to recognizers |
//! | [`animation`] | Cancellable progress sweeps |
//! | [`geometry`] | Point, size and rectangle value types |
//! | [`consts`] | Shared numeric constants (swipe velocity, thresholds, edge zone) |

pub mod animation;
pub mod consts;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod hit;
pub mod options;
pub mod presentation;
pub mod registry;

pub use controller::{Action, Depth, NavPhase, NavigationState, SideNavigation, Slot};
pub use options::{Color, OptionsError, PanelOptions, Position};
pub use registry::{ContainerId, Panel, Side};
