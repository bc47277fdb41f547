// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_side_panel` crate.
//!
//! These drive `PanelStateController` through tap and drag scenarios against a
//! `RecordingHost`, checking both the logical state and the exact calls the
//! host receives.

use kurbo::{Point, Vec2};
use understory_side_panel::{
    Contention, HostCall, PanelConfig, PanelSide, PanelState, PanelStateController,
    RecordingHost, TransitionKind, TransitionRequest,
};

fn panels_with(config: PanelConfig, host: RecordingHost) -> PanelStateController<RecordingHost> {
    PanelStateController::with_config(config, host).unwrap()
}

fn panels() -> PanelStateController<RecordingHost> {
    panels_with(PanelConfig::new(300.0, 90.0), RecordingHost::new())
}

#[test]
fn tap_scenario() {
    let mut panels = panels();

    panels.request_toggle(PanelSide::Left);
    assert_eq!(panels.state(), PanelState::LeftExpanded);
    assert_eq!(
        panels.host_mut().take_calls(),
        vec![
            HostCall::Materialize(PanelSide::Left),
            HostCall::Shadow(true),
            HostCall::Animate(TransitionRequest::expand(PanelSide::Left, 210.0)),
        ]
    );

    panels.request_toggle(PanelSide::Left);
    assert_eq!(
        panels.host_mut().take_calls(),
        vec![HostCall::Animate(TransitionRequest::collapse(PanelSide::Left))]
    );
    assert_eq!(panels.state(), PanelState::LeftExpanded);

    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert_eq!(
        panels.host_mut().take_calls(),
        vec![HostCall::Release(PanelSide::Left), HostCall::Shadow(false)]
    );
}

#[test]
fn drag_scenario() {
    let mut panels = panels();

    assert!(panels.begin_drag(0.0, 5.0));
    assert!(panels.is_shadow_visible());

    let follow = panels.update_drag(50.0).unwrap();
    assert_eq!(follow.kind, TransitionKind::Follow);
    assert_eq!(panels.state(), PanelState::BothCollapsed);

    let settle = panels.end_drag(310.0, 300.0).unwrap();
    assert_eq!(settle, TransitionRequest::expand(PanelSide::Left, 210.0));
    assert_eq!(panels.state(), PanelState::LeftExpanded);
    assert!(!panels.is_dragging());
    assert!(panels.is_materialized(PanelSide::Left));

    // The full call log: one materialize, the follow update, the settle, and
    // no release.
    assert_eq!(
        panels.host().calls(),
        &[
            HostCall::Materialize(PanelSide::Left),
            HostCall::Shadow(true),
            HostCall::Animate(TransitionRequest::follow(PanelSide::Left, 50.0)),
            HostCall::Animate(TransitionRequest::expand(PanelSide::Left, 210.0)),
        ]
    );
    assert_eq!(panels.host().released_count(PanelSide::Left), 0);
}

#[test]
fn double_toggle_returns_to_collapsed() {
    let mut panels = panels_with(
        PanelConfig::new(300.0, 90.0),
        RecordingHost::finishing_immediately(),
    );

    panels.request_toggle(PanelSide::Left);
    panels.request_toggle(PanelSide::Left);

    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert!(!panels.is_collapsing());
    assert!(!panels.host().is_attached(PanelSide::Left));
}

#[test]
fn collapse_when_collapsed_is_noop() {
    let mut panels = panels();
    assert_eq!(panels.request_collapse(), None);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert!(panels.host().calls().is_empty());
}

#[test]
fn collapse_follows_expanded_side() {
    let mut panels = panels();
    panels.request_toggle(PanelSide::Right);

    let req = panels.request_collapse().unwrap();
    assert_eq!(req, TransitionRequest::collapse(PanelSide::Right));
    // Already collapsing.
    assert_eq!(panels.request_collapse(), None);

    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert_eq!(panels.host().released_count(PanelSide::Right), 1);
}

#[test]
fn left_drag_threshold() {
    let mut panels = panels();
    panels.begin_drag(0.0, 1.0);
    panels.end_drag(301.0, 300.0);
    assert_eq!(panels.state(), PanelState::LeftExpanded);

    let mut panels = self::panels();
    panels.begin_drag(0.0, 1.0);
    let req = panels.end_drag(299.0, 300.0).unwrap();
    assert_eq!(req.kind, TransitionKind::Collapse);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert!(panels.is_collapsing());
    assert!(panels.is_materialized(PanelSide::Left));

    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert!(!panels.is_materialized(PanelSide::Left));
}

#[test]
fn right_drag_threshold() {
    let mut panels = panels();
    panels.begin_drag(0.0, -1.0);
    let req = panels.end_drag(-1.0, 300.0).unwrap();
    assert_eq!(req, TransitionRequest::expand(PanelSide::Right, -210.0));
    assert_eq!(panels.state(), PanelState::RightExpanded);

    let mut panels = self::panels();
    panels.begin_drag(0.0, -1.0);
    panels.end_drag(0.0, 300.0);
    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert_eq!(panels.host().released_count(PanelSide::Right), 1);
}

#[test]
fn drag_updates_without_drag_are_noops() {
    let mut panels = panels();
    assert_eq!(panels.update_drag(10.0), None);
    assert_eq!(panels.end_drag(5.0, 300.0), None);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    assert!(panels.host().calls().is_empty());
}

#[test]
fn collapsed_drag_then_toggle_reexpands_once_settled() {
    let mut panels = panels();
    panels.begin_drag(0.0, 1.0);
    panels.end_drag(10.0, 300.0);

    // Still animating the collapse.
    assert_eq!(panels.request_toggle(PanelSide::Left), None);
    panels.on_transition_completed(true);

    panels.request_toggle(PanelSide::Left);
    assert_eq!(panels.state(), PanelState::LeftExpanded);
    assert_eq!(panels.host().materialized_count(PanelSide::Left), 2);
    assert_eq!(panels.host().released_count(PanelSide::Left), 1);
}

#[test]
fn queued_toggle_replays_after_collapse() {
    let config = PanelConfig::new(300.0, 90.0).with_contention(Contention::Queue);
    let mut panels = panels_with(config, RecordingHost::new());

    panels.request_toggle(PanelSide::Left);
    panels.request_toggle(PanelSide::Left);
    assert_eq!(panels.request_toggle(PanelSide::Right), None);
    assert_eq!(panels.queued_toggle(), Some(PanelSide::Right));

    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::RightExpanded);
    assert_eq!(panels.queued_toggle(), None);
    assert!(!panels.is_materialized(PanelSide::Left));
    assert!(panels.is_materialized(PanelSide::Right));
}

#[test]
fn queued_opposite_toggle_collapses_first() {
    let config = PanelConfig::new(300.0, 90.0).with_contention(Contention::Queue);
    let mut panels = panels_with(config, RecordingHost::new());
    panels.request_toggle(PanelSide::Left);
    panels.host_mut().take_calls();

    let req = panels.request_toggle(PanelSide::Right).unwrap();
    assert_eq!(req, TransitionRequest::collapse(PanelSide::Left));
    assert_eq!(panels.state(), PanelState::LeftExpanded);

    panels.on_transition_completed(true);
    assert_eq!(
        panels.host().calls(),
        &[
            HostCall::Animate(TransitionRequest::collapse(PanelSide::Left)),
            HostCall::Release(PanelSide::Left),
            HostCall::Shadow(false),
            HostCall::Materialize(PanelSide::Right),
            HostCall::Shadow(true),
            HostCall::Animate(TransitionRequest::expand(PanelSide::Right, -210.0)),
        ]
    );
    assert_eq!(panels.state(), PanelState::RightExpanded);
}

#[test]
fn queued_switch_with_immediate_host_completes_in_one_call() {
    let config = PanelConfig::new(300.0, 90.0).with_contention(Contention::Queue);
    let mut panels = panels_with(config, RecordingHost::finishing_immediately());
    panels.request_toggle(PanelSide::Right);
    panels.request_toggle(PanelSide::Left);

    assert_eq!(panels.state(), PanelState::LeftExpanded);
    assert!(!panels.is_materialized(PanelSide::Right));
    assert!(!panels.is_collapsing());
}

#[test]
fn dragging_an_expanded_panel_closed() {
    let config = PanelConfig::new(300.0, 90.0).with_drag_expanded_panels(true);
    let mut panels = panels_with(config, RecordingHost::new());
    panels.request_toggle(PanelSide::Left);

    assert!(panels.begin_drag(250.0, -4.0));
    let drag = *panels.drag().unwrap();
    assert_eq!(drag.side, PanelSide::Left);
    assert_eq!(drag.start_offset, 210.0);
    assert!(drag.began_expanded);

    let follow = panels.update_drag(-150.0).unwrap();
    assert_eq!(follow.target_offset, 60.0);

    panels.end_drag(210.0, 300.0);
    assert!(panels.is_collapsing());
    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
    // The expanded panel was not materialized a second time.
    assert_eq!(panels.host().materialized_count(PanelSide::Left), 1);
    assert_eq!(panels.host().released_count(PanelSide::Left), 1);
}

#[test]
fn cancelling_a_drag_on_an_expanded_panel_restores_it() {
    let config = PanelConfig::new(300.0, 90.0).with_drag_expanded_panels(true);
    let mut panels = panels_with(config, RecordingHost::new());
    panels.request_toggle(PanelSide::Right);
    panels.begin_drag(100.0, 2.0);
    panels.update_drag(80.0);

    let req = panels.cancel_drag().unwrap();
    assert_eq!(req, TransitionRequest::expand(PanelSide::Right, -210.0));
    assert_eq!(panels.state(), PanelState::RightExpanded);
    assert!(!panels.is_collapsing());
}

#[test]
fn pointer_positions_drive_the_drag() {
    let mut panels = panels();

    assert!(panels.begin_pointer_drag(Point::new(20.0, 200.0), Vec2::new(3.0, 0.5)));
    for x in [60.0, 140.0, 260.0] {
        panels.drag_pointer_to(Point::new(x, 205.0));
    }
    let drag = *panels.drag().unwrap();
    assert_eq!(drag.offset, 240.0);
    assert_eq!(drag.pointer_x, 260.0);
    assert_eq!(
        panels.host().animations().last(),
        Some(&TransitionRequest::follow(PanelSide::Left, 240.0))
    );

    // Center content is 300 wide, so its center sits at 150 + 240.
    panels.end_drag(150.0 + drag.offset, 300.0);
    assert_eq!(panels.state(), PanelState::LeftExpanded);
}

#[test]
fn expand_report_leaves_collapse_pending() {
    let mut panels = panels();
    panels.request_toggle(PanelSide::Right);
    panels.request_collapse();

    panels.on_transition_completed(false);
    assert!(panels.is_collapsing());
    assert_eq!(panels.collapsing_side(), Some(PanelSide::Right));
    assert_eq!(panels.state(), PanelState::RightExpanded);
    assert!(panels.is_materialized(PanelSide::Right));
    assert_eq!(panels.host().released_count(PanelSide::Right), 0);

    panels.on_transition_completed(true);
    assert_eq!(panels.state(), PanelState::BothCollapsed);
}

#[derive(Copy, Clone, Debug)]
enum Event {
    ToggleLeft,
    ToggleRight,
    Collapse,
    BeginDrag(f64),
    UpdateDrag(f64),
    EndDrag(f64),
    CancelDrag,
    Completed(bool),
}

const EVENTS: [Event; 11] = [
    Event::ToggleLeft,
    Event::ToggleRight,
    Event::Collapse,
    Event::BeginDrag(1.0),
    Event::BeginDrag(-1.0),
    Event::UpdateDrag(40.0),
    Event::EndDrag(400.0),
    Event::EndDrag(-50.0),
    Event::CancelDrag,
    Event::Completed(true),
    Event::Completed(false),
];

fn apply(panels: &mut PanelStateController<RecordingHost>, event: Event) {
    match event {
        Event::ToggleLeft => {
            panels.request_toggle(PanelSide::Left);
        }
        Event::ToggleRight => {
            panels.request_toggle(PanelSide::Right);
        }
        Event::Collapse => {
            panels.request_collapse();
        }
        Event::BeginDrag(velocity) => {
            panels.begin_drag(0.0, velocity);
        }
        Event::UpdateDrag(delta) => {
            panels.update_drag(delta);
        }
        Event::EndDrag(center) => {
            panels.end_drag(center, 300.0);
        }
        Event::CancelDrag => {
            panels.cancel_drag();
        }
        Event::Completed(was_collapse) => panels.on_transition_completed(was_collapse),
    }
}

fn check_invariants(panels: &PanelStateController<RecordingHost>, trail: &[Event]) {
    let left = panels.is_materialized(PanelSide::Left);
    let right = panels.is_materialized(PanelSide::Right);
    assert!(!(left && right), "both panels attached after {trail:?}");
    assert_eq!(left, panels.host().is_attached(PanelSide::Left), "{trail:?}");
    assert_eq!(right, panels.host().is_attached(PanelSide::Right), "{trail:?}");

    if let Some(side) = panels.state().expanded_side() {
        assert!(panels.is_materialized(side), "expanded without panel after {trail:?}");
    }
    if let Some(side) = panels.collapsing_side() {
        assert!(!panels.is_dragging(), "drag during collapse after {trail:?}");
        assert!(panels.is_materialized(side), "collapsing without panel after {trail:?}");
    }
    assert_eq!(
        panels.is_shadow_visible(),
        left || right,
        "shadow out of sync after {trail:?}"
    );
}

fn explore(config: PanelConfig, host: fn() -> RecordingHost, depth: usize) {
    fn walk(
        config: PanelConfig,
        host: fn() -> RecordingHost,
        trail: &mut Vec<Event>,
        depth: usize,
    ) {
        let mut panels = panels_with(config, host());
        for (i, event) in trail.iter().enumerate() {
            apply(&mut panels, *event);
            check_invariants(&panels, &trail[..=i]);
        }
        if depth == 0 {
            return;
        }
        for event in EVENTS {
            trail.push(event);
            walk(config, host, trail, depth - 1);
            trail.pop();
        }
    }

    walk(config, host, &mut Vec::new(), depth);
}

#[test]
fn invariants_hold_for_all_short_event_sequences() {
    let base = PanelConfig::new(300.0, 90.0);
    explore(base, RecordingHost::new, 4);
    explore(base, RecordingHost::finishing_immediately, 4);
    explore(
        base.with_contention(Contention::Queue)
            .with_drag_expanded_panels(true),
        RecordingHost::new,
        4,
    );
}
