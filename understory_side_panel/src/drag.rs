// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-gesture drag bookkeeping.
//!
//! A [`DragSession`] lives from `begin_drag` to `end_drag` (or `cancel_drag`)
//! on the controller. It remembers which panel the gesture is revealing and
//! where the center content sits while it follows the pointer.

use crate::state::PanelSide;

/// Transient state for one drag gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// The panel this gesture reveals or hides.
    pub side: PanelSide,
    /// Pointer position along the horizontal axis when the gesture began.
    pub origin_x: f64,
    /// Offset of the center content when the gesture began.
    pub start_offset: f64,
    /// Offset of the center content after the most recent update.
    pub offset: f64,
    /// Pointer position along the horizontal axis after the most recent update.
    pub pointer_x: f64,
    /// Whether the panel was already expanded when the gesture began.
    pub began_expanded: bool,
}

impl DragSession {
    /// Starts a session with the center content resting at `start_offset`.
    #[must_use]
    pub const fn new(
        side: PanelSide,
        origin_x: f64,
        start_offset: f64,
        began_expanded: bool,
    ) -> Self {
        Self {
            side,
            origin_x,
            start_offset,
            offset: start_offset,
            pointer_x: origin_x,
            began_expanded,
        }
    }

    /// Moves the center content by `delta_x`, returning the new offset.
    ///
    /// The pointer is assumed to have moved by the same amount.
    pub fn apply_delta(&mut self, delta_x: f64) -> f64 {
        self.pointer_x += delta_x;
        self.offset += delta_x;
        self.offset
    }

    /// Moves the pointer to `pointer_x` and the center content along with it,
    /// returning the new offset.
    pub fn move_pointer_to(&mut self, pointer_x: f64) -> f64 {
        self.apply_delta(pointer_x - self.pointer_x)
    }

    /// Total displacement since the session began.
    #[must_use]
    pub fn total_offset(&self) -> f64 {
        self.offset - self.start_offset
    }

    /// Decides whether releasing the gesture should leave the panel expanded.
    ///
    /// `final_center_x` is the horizontal center of the dragged content in
    /// container coordinates. The left panel stays open once that center has
    /// crossed the container's right edge; the right panel once it has crossed
    /// the left edge.
    #[must_use]
    pub fn settles_expanded(&self, final_center_x: f64, container_width: f64) -> bool {
        match self.side {
            PanelSide::Left => final_center_x > container_width,
            PanelSide::Right => final_center_x < 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_rests_at_start() {
        let drag = DragSession::new(PanelSide::Left, 12.0, 0.0, false);
        assert_eq!(drag.offset, drag.start_offset);
        assert_eq!(drag.total_offset(), 0.0);
    }

    #[test]
    fn deltas_accumulate() {
        let mut drag = DragSession::new(PanelSide::Left, 0.0, 0.0, false);
        assert_eq!(drag.apply_delta(30.0), 30.0);
        assert_eq!(drag.apply_delta(20.0), 50.0);
        assert_eq!(drag.apply_delta(-5.0), 45.0);
        assert_eq!(drag.total_offset(), 45.0);
    }

    #[test]
    fn pointer_deltas_follow_absolute_positions() {
        let mut drag = DragSession::new(PanelSide::Left, 20.0, 0.0, false);
        assert_eq!(drag.move_pointer_to(60.0), 40.0);
        assert_eq!(drag.move_pointer_to(50.0), 30.0);
        assert_eq!(drag.pointer_x, 50.0);
        assert_eq!(drag.total_offset(), 30.0);
    }

    #[test]
    fn applied_deltas_advance_the_pointer() {
        let mut drag = DragSession::new(PanelSide::Right, 200.0, 0.0, false);
        drag.apply_delta(-30.0);
        assert_eq!(drag.pointer_x, 170.0);
        // Mixing both forms measures from the advanced pointer.
        assert_eq!(drag.move_pointer_to(160.0), -40.0);
    }

    #[test]
    fn total_offset_is_relative_to_start() {
        let mut drag = DragSession::new(PanelSide::Right, 0.0, -210.0, true);
        drag.apply_delta(60.0);
        assert_eq!(drag.offset, -150.0);
        assert_eq!(drag.total_offset(), 60.0);
    }

    #[test]
    fn left_threshold_is_exclusive() {
        let drag = DragSession::new(PanelSide::Left, 0.0, 0.0, false);
        assert!(drag.settles_expanded(301.0, 300.0));
        assert!(!drag.settles_expanded(300.0, 300.0));
        assert!(!drag.settles_expanded(299.0, 300.0));
    }

    #[test]
    fn right_threshold_is_exclusive() {
        let drag = DragSession::new(PanelSide::Right, 0.0, 0.0, false);
        assert!(drag.settles_expanded(-1.0, 300.0));
        assert!(!drag.settles_expanded(0.0, 300.0));
        assert!(!drag.settles_expanded(150.0, 300.0));
    }
}
