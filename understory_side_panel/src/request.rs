// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition requests handed to the host.

use crate::state::PanelSide;

/// What a [`TransitionRequest`] asks the host to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Settle with the panel fully expanded.
    Expand,
    /// Settle with both panels collapsed.
    ///
    /// The host must report completion through
    /// [`PanelStateController::on_transition_completed`](crate::PanelStateController::on_transition_completed)
    /// unless it finishes synchronously.
    Collapse,
    /// Move the center content to the pointer-driven offset without animating.
    Follow,
}

/// A visual transition requested by the controller.
///
/// Requests are transient: the controller produces one per effective call and
/// never stores it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitionRequest {
    /// The panel the transition concerns.
    pub side: Option<PanelSide>,
    /// Horizontal offset of the center content once the transition is applied.
    pub target_offset: f64,
    /// Whether this settles expanded, settles collapsed, or follows the pointer.
    pub kind: TransitionKind,
}

impl TransitionRequest {
    /// A settle request that expands `side` to `target_offset`.
    #[must_use]
    pub const fn expand(side: PanelSide, target_offset: f64) -> Self {
        Self {
            side: Some(side),
            target_offset,
            kind: TransitionKind::Expand,
        }
    }

    /// A settle request that collapses `side` back to offset zero.
    #[must_use]
    pub const fn collapse(side: PanelSide) -> Self {
        Self {
            side: Some(side),
            target_offset: 0.0,
            kind: TransitionKind::Collapse,
        }
    }

    /// A direct-manipulation update tracking the pointer.
    #[must_use]
    pub const fn follow(side: PanelSide, offset: f64) -> Self {
        Self {
            side: Some(side),
            target_offset: offset,
            kind: TransitionKind::Follow,
        }
    }

    /// Returns `true` for requests that end in a stable state.
    #[must_use]
    pub const fn is_settle(&self) -> bool {
        !matches!(self.kind, TransitionKind::Follow)
    }

    /// Returns `true` when the controller waits for completion of this request.
    #[must_use]
    pub const fn awaits_completion(&self) -> bool {
        matches!(self.kind, TransitionKind::Collapse)
    }
}
