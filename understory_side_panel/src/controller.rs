// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The side-panel state machine.

use core::fmt;

use kurbo::{Point, Vec2};

use crate::config::{ConfigError, Contention, PanelConfig};
use crate::drag::DragSession;
use crate::host::{Animation, PanelHost};
use crate::request::TransitionRequest;
use crate::state::{PanelSide, PanelState};

/// Decides which side panel is expanded and drives a [`PanelHost`] to match.
///
/// The controller reacts to two kinds of input:
///
/// - Discrete requests from UI controls: [`request_toggle`](Self::request_toggle)
///   and [`request_collapse`](Self::request_collapse).
/// - A continuous drag: [`begin_drag`](Self::begin_drag),
///   [`update_drag`](Self::update_drag) and [`end_drag`](Self::end_drag).
///   Hosts that see absolute pointer positions can use
///   [`begin_pointer_drag`](Self::begin_pointer_drag) and
///   [`drag_pointer_to`](Self::drag_pointer_to) instead of computing deltas.
///
/// Expanding takes effect immediately. Collapsing takes effect when the host
/// reports the animation finished, either by returning [`Animation::Finished`]
/// from [`PanelHost::animate`] or by calling
/// [`on_transition_completed`](Self::on_transition_completed) later. Until
/// then the controller is [collapsing](Self::is_collapsing) and ignores input
/// that would start another structural transition.
///
/// Every method is total: input that does not apply in the current state is
/// ignored.
pub struct PanelStateController<H: PanelHost> {
    host: H,
    config: PanelConfig,
    state: PanelState,
    drag: Option<DragSession>,
    pending_collapse: Option<PanelSide>,
    queued_toggle: Option<PanelSide>,
    left: Option<H::Handle>,
    right: Option<H::Handle>,
    shadow_visible: bool,
}

impl<H: PanelHost> fmt::Debug for PanelStateController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelStateController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("drag", &self.drag)
            .field("pending_collapse", &self.pending_collapse)
            .field("queued_toggle", &self.queued_toggle)
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("shadow_visible", &self.shadow_visible)
            .finish_non_exhaustive()
    }
}

impl<H: PanelHost> PanelStateController<H> {
    /// Creates a controller with [`PanelConfig::default`], both panels collapsed.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::from_valid_config(PanelConfig::default(), host)
    }

    /// Creates a controller with `config`, both panels collapsed.
    pub fn with_config(config: PanelConfig, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config, host))
    }

    fn from_valid_config(config: PanelConfig, host: H) -> Self {
        Self {
            host,
            config,
            state: PanelState::BothCollapsed,
            drag: None,
            pending_collapse: None,
            queued_toggle: None,
            left: None,
            right: None,
            shadow_visible: false,
        }
    }

    /// The current logical state.
    ///
    /// While a collapse is animating this still reports the expanded side.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Updates the container width used for expanded offsets.
    ///
    /// Takes effect on the next settle request; a panel that is already
    /// expanded is not moved.
    pub fn set_panel_width(&mut self, width: f64) -> Result<(), ConfigError> {
        let config = PanelConfig {
            panel_width: width,
            ..self.config
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Resting offset of the center content while `side` is expanded.
    #[must_use]
    pub fn expanded_offset(&self, side: PanelSide) -> f64 {
        self.config.expanded_offset(side)
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Returns `true` while a drag gesture is being tracked.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns `true` between a collapse request and its completion.
    #[must_use]
    pub fn is_collapsing(&self) -> bool {
        self.pending_collapse.is_some()
    }

    /// The side whose collapse is waiting for completion.
    #[must_use]
    pub fn collapsing_side(&self) -> Option<PanelSide> {
        self.pending_collapse
    }

    /// The toggle that will be replayed after the pending collapse, if any.
    ///
    /// Only ever set with [`Contention::Queue`].
    #[must_use]
    pub fn queued_toggle(&self) -> Option<PanelSide> {
        self.queued_toggle
    }

    /// Returns `true` if the host currently has content attached for `side`.
    #[must_use]
    pub fn is_materialized(&self, side: PanelSide) -> bool {
        match side {
            PanelSide::Left => self.left.is_some(),
            PanelSide::Right => self.right.is_some(),
        }
    }

    /// Returns `true` while the expanded-state shadow is shown.
    #[must_use]
    pub fn is_shadow_visible(&self) -> bool {
        self.shadow_visible
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller and returns the host.
    ///
    /// Materialized panel handles are dropped without calling
    /// [`PanelHost::release_panel`].
    pub fn into_host(self) -> H {
        self.host
    }

    /// Expands `side`, or collapses it if it is already expanded.
    ///
    /// Expanding materializes the panel first and updates the state right
    /// away. Collapsing waits for completion before the state becomes
    /// [`PanelState::BothCollapsed`] and the panel is released.
    ///
    /// Returns the request handed to the host, or `None` if the toggle was
    /// ignored: during a drag, while a collapse is animating, or while the
    /// opposite panel is expanded. See [`Contention`] for queuing instead.
    pub fn request_toggle(&mut self, side: PanelSide) -> Option<TransitionRequest> {
        if self.drag.is_some() {
            trace_event!(?side, "toggle ignored during drag");
            return None;
        }
        if self.pending_collapse.is_some() {
            self.block_toggle(side);
            return None;
        }
        match self.state.expanded_side() {
            None => Some(self.expand(side)),
            Some(open) if open == side => Some(self.collapse(side)),
            Some(open) => match self.config.contention {
                Contention::Ignore => {
                    trace_event!(?side, ?open, "toggle ignored while opposite panel is open");
                    None
                }
                Contention::Queue => {
                    self.queued_toggle = Some(side);
                    Some(self.collapse(open))
                }
            },
        }
    }

    /// Collapses whichever panel is expanded.
    ///
    /// Returns `None` without touching the host when nothing is expanded, a
    /// collapse is already animating, or a drag is in progress.
    pub fn request_collapse(&mut self) -> Option<TransitionRequest> {
        if self.drag.is_some() || self.pending_collapse.is_some() {
            return None;
        }
        let side = self.state.expanded_side()?;
        Some(self.collapse(side))
    }

    /// Starts tracking a drag gesture.
    ///
    /// With both panels collapsed, the sign of `velocity_x` picks the panel to
    /// reveal (positive reveals the left panel), which is materialized and
    /// the shadow is shown. When a panel is expanded the gesture is ignored,
    /// unless [`PanelConfig::drag_expanded_panels`] is set, in which case the
    /// drag is bound to the expanded panel.
    ///
    /// Returns `true` if a drag session started.
    pub fn begin_drag(&mut self, origin_x: f64, velocity_x: f64) -> bool {
        if self.drag.is_some() || self.pending_collapse.is_some() {
            trace_event!(origin_x, velocity_x, "drag start ignored");
            return false;
        }
        let session = match self.state.expanded_side() {
            None => {
                let side = PanelSide::from_velocity(velocity_x);
                self.materialize(side);
                self.set_shadow(true);
                DragSession::new(side, origin_x, 0.0, false)
            }
            Some(side) if self.config.drag_expanded_panels => {
                DragSession::new(side, origin_x, self.config.expanded_offset(side), true)
            }
            Some(_) => {
                trace_event!(origin_x, velocity_x, "drag start ignored while expanded");
                return false;
            }
        };
        debug_event!(side = ?session.side, origin_x, "drag started");
        self.drag = Some(session);
        true
    }

    /// Moves the center content by `delta_x` since the previous update.
    ///
    /// Emits a [`TransitionKind::Follow`](crate::TransitionKind::Follow)
    /// request, which expects no completion. Returns `None` without a drag.
    pub fn update_drag(&mut self, delta_x: f64) -> Option<TransitionRequest> {
        let drag = self.drag.as_mut()?;
        let request = TransitionRequest::follow(drag.side, drag.apply_delta(delta_x));
        // Follow updates are applied directly; their status carries nothing.
        let _ = self.host.animate(&request);
        Some(request)
    }

    /// Starts a drag from a pointer-down at `pos` moving with `velocity`.
    ///
    /// Same as [`begin_drag`](Self::begin_drag) with the horizontal components.
    /// Follow up with [`drag_pointer_to`](Self::drag_pointer_to).
    pub fn begin_pointer_drag(&mut self, pos: Point, velocity: Vec2) -> bool {
        self.begin_drag(pos.x, velocity.x)
    }

    /// Moves the center content with the pointer, now at `pos`.
    ///
    /// The displacement is measured horizontally from the previous pointer
    /// position of the session. Returns `None` without a drag.
    pub fn drag_pointer_to(&mut self, pos: Point) -> Option<TransitionRequest> {
        let drag = self.drag.as_mut()?;
        let request = TransitionRequest::follow(drag.side, drag.move_pointer_to(pos.x));
        let _ = self.host.animate(&request);
        Some(request)
    }

    /// Finishes the drag and settles the panel.
    ///
    /// `final_center_x` is the horizontal center of the dragged content and
    /// `container_width` the width of its container. The left panel settles
    /// expanded when `final_center_x > container_width`, the right panel when
    /// `final_center_x < 0`; otherwise the panel collapses.
    ///
    /// Returns the settle request, or `None` without a drag.
    pub fn end_drag(
        &mut self,
        final_center_x: f64,
        container_width: f64,
    ) -> Option<TransitionRequest> {
        let drag = self.drag.take()?;
        let expand = drag.settles_expanded(final_center_x, container_width);
        debug_event!(side = ?drag.side, final_center_x, container_width, expand, "drag ended");
        Some(self.settle(drag.side, expand))
    }

    /// Abandons the drag, returning the panel to where the gesture found it.
    ///
    /// A drag that began with both panels collapsed collapses; one that began
    /// on an expanded panel re-expands it. Returns `None` without a drag.
    pub fn cancel_drag(&mut self) -> Option<TransitionRequest> {
        let drag = self.drag.take()?;
        debug_event!(side = ?drag.side, "drag cancelled");
        Some(self.settle(drag.side, drag.began_expanded))
    }

    /// Reports that the host finished the last settle animation.
    ///
    /// Only a finished collapse has an effect: the state becomes
    /// [`PanelState::BothCollapsed`], the panel is released and the shadow is
    /// hidden. Completion of an expand, or with no collapse pending, is
    /// ignored.
    pub fn on_transition_completed(&mut self, was_collapse: bool) {
        if !was_collapse {
            return;
        }
        if self.pending_collapse.is_none() {
            trace_event!("collapse completion with nothing pending");
            return;
        }
        self.finish_collapse();
    }

    fn settle(&mut self, side: PanelSide, expand: bool) -> TransitionRequest {
        if expand {
            self.expand(side)
        } else {
            self.collapse(side)
        }
    }

    fn expand(&mut self, side: PanelSide) -> TransitionRequest {
        self.materialize(side);
        self.state = side.expanded_state();
        self.set_shadow(true);
        debug_event!(?side, "panel expanded");
        let request = TransitionRequest::expand(side, self.config.expanded_offset(side));
        // The state is already final, so there is nothing to do on completion.
        let _ = self.host.animate(&request);
        request
    }

    fn collapse(&mut self, side: PanelSide) -> TransitionRequest {
        self.pending_collapse = Some(side);
        debug_event!(?side, "panel collapsing");
        let request = TransitionRequest::collapse(side);
        if self.host.animate(&request) == Animation::Finished {
            self.finish_collapse();
        }
        request
    }

    fn finish_collapse(&mut self) {
        let Some(side) = self.pending_collapse.take() else {
            return;
        };
        self.state = PanelState::BothCollapsed;
        self.release(side);
        self.set_shadow(false);
        debug_event!(?side, "panel collapsed");
        if let Some(next) = self.queued_toggle.take() {
            self.request_toggle(next);
        }
    }

    fn block_toggle(&mut self, side: PanelSide) {
        match self.config.contention {
            Contention::Ignore => {
                trace_event!(?side, "toggle ignored while collapsing");
            }
            Contention::Queue => {
                trace_event!(?side, "toggle queued behind collapse");
                self.queued_toggle = Some(side);
            }
        }
    }

    fn materialize(&mut self, side: PanelSide) {
        let slot = match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        };
        if slot.is_none() {
            *slot = Some(self.host.materialize_panel(side));
        }
    }

    fn release(&mut self, side: PanelSide) {
        let slot = match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
        };
        if let Some(handle) = slot.take() {
            self.host.release_panel(side, handle);
        }
    }

    fn set_shadow(&mut self, visible: bool) {
        if self.shadow_visible != visible {
            self.shadow_visible = visible;
            self.host.set_shadow_visible(visible);
        }
    }
}
