// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical panel states and the sides they belong to.

/// One of the two auxiliary panels that slide in from a screen edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelSide {
    /// The panel revealed by moving the center content to the right.
    Left,
    /// The panel revealed by moving the center content to the left.
    Right,
}

impl PanelSide {
    /// Returns the state in which this side's panel is fully expanded.
    #[must_use]
    pub const fn expanded_state(self) -> PanelState {
        match self {
            Self::Left => PanelState::LeftExpanded,
            Self::Right => PanelState::RightExpanded,
        }
    }

    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the side revealed by a horizontal gesture velocity.
    ///
    /// A positive velocity moves left-to-right and reveals the left panel.
    /// Anything else, including zero, reveals the right panel.
    #[must_use]
    pub fn from_velocity(velocity_x: f64) -> Self {
        if velocity_x > 0.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Which panel, if any, is expanded.
///
/// Exactly one variant is active at a time, so a state with both panels
/// expanded is not representable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanelState {
    /// Neither panel is expanded; the center content rests at offset zero.
    #[default]
    BothCollapsed,
    /// The left panel is expanded.
    LeftExpanded,
    /// The right panel is expanded.
    RightExpanded,
}

impl PanelState {
    /// Returns the expanded side, or `None` when both panels are collapsed.
    #[must_use]
    pub const fn expanded_side(self) -> Option<PanelSide> {
        match self {
            Self::BothCollapsed => None,
            Self::LeftExpanded => Some(PanelSide::Left),
            Self::RightExpanded => Some(PanelSide::Right),
        }
    }

    /// Returns `true` when neither panel is expanded.
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::BothCollapsed)
    }
}
