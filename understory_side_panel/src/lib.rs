// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_side_panel --heading-base-level=0

//! Understory Side Panel: the state machine behind slide-out navigation.
//!
//! A slide-out container shows center content with an auxiliary panel on each
//! side. Tapping a control or dragging the center content reveals a panel;
//! tapping again, or dragging back, hides it. This crate decides **which
//! panel is expanded** and **which transition to request**. It does not draw,
//! animate, or recognize gestures.
//!
//! The core type is [`PanelStateController`]. It owns a [`PanelState`]
//! (`BothCollapsed`, `LeftExpanded` or `RightExpanded`) and drives a
//! [`PanelHost`], the capability set your rendering layer implements:
//!
//! - attach and detach panel content ([`PanelHost::materialize_panel`],
//!   [`PanelHost::release_panel`]),
//! - move the center content ([`PanelHost::animate`] with a [`TransitionRequest`]),
//! - toggle the expanded-state shadow ([`PanelHost::set_shadow_visible`]).
//!
//! ## Tap-driven example
//!
//! ```rust
//! use understory_side_panel::{
//!     HostCall, PanelConfig, PanelSide, PanelState, PanelStateController, RecordingHost,
//!     TransitionRequest,
//! };
//!
//! let config = PanelConfig::new(300.0, 90.0);
//! let mut panels = PanelStateController::with_config(config, RecordingHost::new()).unwrap();
//!
//! // Expanding takes effect immediately.
//! panels.request_toggle(PanelSide::Left);
//! assert_eq!(panels.state(), PanelState::LeftExpanded);
//! assert_eq!(
//!     panels.host().animations().last(),
//!     Some(&TransitionRequest::expand(PanelSide::Left, 210.0))
//! );
//!
//! // Collapsing waits for the host to finish animating.
//! panels.request_toggle(PanelSide::Left);
//! assert_eq!(panels.state(), PanelState::LeftExpanded);
//! panels.on_transition_completed(true);
//! assert_eq!(panels.state(), PanelState::BothCollapsed);
//! assert_eq!(panels.host().calls().last(), Some(&HostCall::Shadow(false)));
//! ```
//!
//! ## Drag-driven example
//!
//! A drag starts from the collapsed state; the sign of the initial velocity
//! picks the panel. Updates move the center content directly, and releasing
//! the gesture settles it open or closed depending on how far it travelled.
//!
//! ```rust
//! use understory_side_panel::{PanelSide, PanelState, PanelStateController, RecordingHost};
//!
//! let mut panels = PanelStateController::new(RecordingHost::new());
//!
//! assert!(panels.begin_drag(0.0, 5.0));
//! assert!(panels.is_materialized(PanelSide::Left));
//!
//! panels.update_drag(120.0);
//! panels.update_drag(60.0);
//!
//! // The dragged content's center ended past the container's right edge.
//! panels.end_drag(340.0, 320.0);
//! assert_eq!(panels.state(), PanelState::LeftExpanded);
//! ```
//!
//! Hosts whose pointer events carry absolute positions can drive the same
//! gesture with [`PanelStateController::begin_pointer_drag`] and
//! [`PanelStateController::drag_pointer_to`], which take `kurbo` points.
//!
//! ## Completion
//!
//! A collapse is only final once the host says so. Hosts that animate call
//! [`PanelStateController::on_transition_completed`] when the animation ends;
//! hosts that apply transitions instantly return [`Animation::Finished`] from
//! [`PanelHost::animate`] and the controller completes the collapse before
//! returning. Input that would start another transition while a collapse is
//! pending is ignored, or queued with [`Contention::Queue`].
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `tracing`: emit `tracing` events for transitions and ignored input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

mod config;
mod controller;
mod drag;
mod host;
mod request;
mod state;

pub use config::{
    ConfigError, Contention, DEFAULT_EXPANDED_OFFSET_MARGIN, DEFAULT_PANEL_WIDTH, PanelConfig,
};
pub use controller::PanelStateController;
pub use drag::DragSession;
pub use host::{Animation, HostCall, PanelHost, RecordedPanel, RecordingHost};
pub use request::{TransitionKind, TransitionRequest};
pub use state::{PanelSide, PanelState};
