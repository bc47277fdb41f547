// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability set a rendering layer provides to the controller.
//!
//! The controller never renders anything. It asks a [`PanelHost`] to attach
//! panel content, move the center content, and toggle the expanded-state
//! shadow. The host owns whatever those mean in its toolkit.
//!
//! [`RecordingHost`] is a host that performs nothing and records every call,
//! which is what tests and headless demos need.
//!
//! ```
//! use understory_side_panel::{HostCall, PanelSide, PanelStateController, RecordingHost};
//!
//! let mut panels = PanelStateController::new(RecordingHost::new());
//! panels.request_toggle(PanelSide::Right);
//!
//! let calls = panels.host().calls();
//! assert_eq!(calls[0], HostCall::Materialize(PanelSide::Right));
//! ```

use alloc::vec::Vec;

use crate::request::TransitionRequest;
use crate::state::PanelSide;

/// What the host did with a settle or follow request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    /// The transition runs over time. For collapse requests the host reports
    /// the end through
    /// [`PanelStateController::on_transition_completed`](crate::PanelStateController::on_transition_completed).
    #[default]
    Pending,
    /// The transition was applied before `animate` returned.
    Finished,
}

/// Rendering collaborator driven by a
/// [`PanelStateController`](crate::PanelStateController).
pub trait PanelHost {
    /// Host-side token for attached panel content.
    ///
    /// The controller holds it while the panel is materialized and hands it
    /// back on release; it never looks inside.
    type Handle;

    /// Instantiates and attaches the content for `side`.
    ///
    /// Called at most once per expansion cycle.
    fn materialize_panel(&mut self, side: PanelSide) -> Self::Handle;

    /// Detaches and destroys content previously returned by
    /// [`materialize_panel`](Self::materialize_panel).
    fn release_panel(&mut self, side: PanelSide, handle: Self::Handle);

    /// Moves the center content toward `request.target_offset`.
    fn animate(&mut self, request: &TransitionRequest) -> Animation;

    /// Shows or hides the shadow marking an expanded state.
    ///
    /// Only called when visibility actually changes.
    fn set_shadow_visible(&mut self, visible: bool);
}

impl<H: PanelHost + ?Sized> PanelHost for &mut H {
    type Handle = H::Handle;

    fn materialize_panel(&mut self, side: PanelSide) -> Self::Handle {
        (**self).materialize_panel(side)
    }

    fn release_panel(&mut self, side: PanelSide, handle: Self::Handle) {
        (**self).release_panel(side, handle);
    }

    fn animate(&mut self, request: &TransitionRequest) -> Animation {
        (**self).animate(request)
    }

    fn set_shadow_visible(&mut self, visible: bool) {
        (**self).set_shadow_visible(visible);
    }
}

/// One call received by a [`RecordingHost`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostCall {
    /// [`PanelHost::materialize_panel`].
    Materialize(PanelSide),
    /// [`PanelHost::release_panel`].
    Release(PanelSide),
    /// [`PanelHost::animate`].
    Animate(TransitionRequest),
    /// [`PanelHost::set_shadow_visible`].
    Shadow(bool),
}

/// Handle produced by [`RecordingHost`]: a per-host serial number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordedPanel(pub u32);

/// A [`PanelHost`] that records calls instead of rendering.
#[derive(Clone, Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    live: Vec<(PanelSide, RecordedPanel)>,
    next_serial: u32,
    finish_immediately: bool,
}

impl RecordingHost {
    /// Creates a host whose animations stay pending until reported.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: Vec::new(),
            live: Vec::new(),
            next_serial: 0,
            finish_immediately: false,
        }
    }

    /// Creates a host that finishes every animation synchronously.
    #[must_use]
    pub const fn finishing_immediately() -> Self {
        Self {
            calls: Vec::new(),
            live: Vec::new(),
            next_serial: 0,
            finish_immediately: true,
        }
    }

    /// Every call received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Returns and forgets the calls received so far.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        core::mem::take(&mut self.calls)
    }

    /// Every animation request received so far, oldest first.
    pub fn animations(&self) -> impl Iterator<Item = &TransitionRequest> + '_ {
        self.calls.iter().filter_map(|call| match call {
            HostCall::Animate(request) => Some(request),
            _ => None,
        })
    }

    /// Number of materialize calls received for `side`.
    #[must_use]
    pub fn materialized_count(&self, side: PanelSide) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == HostCall::Materialize(side))
            .count()
    }

    /// Number of release calls received for `side`.
    #[must_use]
    pub fn released_count(&self, side: PanelSide) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == HostCall::Release(side))
            .count()
    }

    /// Returns `true` if content for `side` is attached.
    #[must_use]
    pub fn is_attached(&self, side: PanelSide) -> bool {
        self.live.iter().any(|(s, _)| *s == side)
    }
}

impl PanelHost for RecordingHost {
    type Handle = RecordedPanel;

    fn materialize_panel(&mut self, side: PanelSide) -> RecordedPanel {
        let handle = RecordedPanel(self.next_serial);
        self.next_serial = self.next_serial.wrapping_add(1);
        self.live.push((side, handle));
        self.calls.push(HostCall::Materialize(side));
        handle
    }

    fn release_panel(&mut self, side: PanelSide, handle: RecordedPanel) {
        self.live.retain(|entry| *entry != (side, handle));
        self.calls.push(HostCall::Release(side));
    }

    fn animate(&mut self, request: &TransitionRequest) -> Animation {
        self.calls.push(HostCall::Animate(*request));
        if self.finish_immediately {
            Animation::Finished
        } else {
            Animation::Pending
        }
    }

    fn set_shadow_visible(&mut self, visible: bool) {
        self.calls.push(HostCall::Shadow(visible));
    }
}
