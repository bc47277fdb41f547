// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration and validation.

use core::fmt;

use crate::state::PanelSide;

/// Width used by [`PanelConfig::default`].
pub const DEFAULT_PANEL_WIDTH: f64 = 320.0;

/// Portion of the center content left on screen when a panel is expanded.
pub const DEFAULT_EXPANDED_OFFSET_MARGIN: f64 = 90.0;

/// How the controller treats a toggle that arrives while another transition
/// blocks it.
///
/// A toggle is blocked while a collapse is still animating, and when the
/// opposite panel is expanded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Contention {
    /// Drop the toggle.
    #[default]
    Ignore,
    /// Remember the most recent blocked toggle and replay it once the pending
    /// collapse completes. Toggling the opposite panel starts that collapse.
    Queue,
}

/// Error returned when a [`PanelConfig`] cannot produce a usable controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The panel width is not finite or not positive.
    InvalidPanelWidth(f64),
    /// The expanded offset margin is not finite or is negative.
    InvalidMargin(f64),
    /// The margin is larger than the panel width, so an expanded panel would
    /// move the center content the wrong way.
    MarginExceedsWidth {
        /// The configured panel width.
        width: f64,
        /// The configured margin.
        margin: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPanelWidth(width) => {
                write!(f, "panel width must be finite and positive, got {width}")
            }
            Self::InvalidMargin(margin) => {
                write!(
                    f,
                    "expanded offset margin must be finite and non-negative, got {margin}"
                )
            }
            Self::MarginExceedsWidth { width, margin } => {
                write!(
                    f,
                    "expanded offset margin {margin} exceeds panel width {width}"
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Geometry and policy for a [`PanelStateController`](crate::PanelStateController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Width of the container the center content slides within.
    pub panel_width: f64,
    /// How much of the center content stays visible when a panel is expanded.
    pub expanded_offset_margin: f64,
    /// Policy for blocked toggles.
    pub contention: Contention,
    /// Allow a drag to start while a panel is already expanded, so the user
    /// can push it closed or pull it back open.
    pub drag_expanded_panels: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_width: DEFAULT_PANEL_WIDTH,
            expanded_offset_margin: DEFAULT_EXPANDED_OFFSET_MARGIN,
            contention: Contention::Ignore,
            drag_expanded_panels: false,
        }
    }
}

impl PanelConfig {
    /// Creates a configuration with the given geometry and default policies.
    #[must_use]
    pub fn new(panel_width: f64, expanded_offset_margin: f64) -> Self {
        Self {
            panel_width,
            expanded_offset_margin,
            ..Self::default()
        }
    }

    /// Sets the contention policy.
    #[must_use]
    pub fn with_contention(mut self, contention: Contention) -> Self {
        self.contention = contention;
        self
    }

    /// Enables or disables dragging from an expanded state.
    #[must_use]
    pub fn with_drag_expanded_panels(mut self, enabled: bool) -> Self {
        self.drag_expanded_panels = enabled;
        self
    }

    /// Checks that the geometry describes a reachable expanded position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.panel_width;
        let margin = self.expanded_offset_margin;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidPanelWidth(width));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::InvalidMargin(margin));
        }
        if margin > width {
            return Err(ConfigError::MarginExceedsWidth { width, margin });
        }
        Ok(())
    }

    /// The resting offset of the center content while `side` is expanded.
    ///
    /// Positive for the left panel, negative for the right.
    #[must_use]
    pub fn expanded_offset(&self, side: PanelSide) -> f64 {
        let reach = self.panel_width - self.expanded_offset_margin;
        match side {
            PanelSide::Left => reach,
            PanelSide::Right => -reach,
        }
    }
}
