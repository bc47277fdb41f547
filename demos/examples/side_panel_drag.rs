// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side panel drag.
//!
//! Feed a scripted pointer trace into the controller's pointer drag API,
//! once far enough to open the panel and once too short.
//!
//! Run:
//! - `cargo run -p understory_side_panel_demos --example side_panel_drag`

use kurbo::{Point, Vec2};
use tracing::info;
use understory_side_panel::{PanelConfig, PanelStateController};
use understory_side_panel_demos::{ConsoleHost, init_log};

const WIDTH: f64 = 375.0;

fn swipe(panels: &mut PanelStateController<ConsoleHost>, xs: &[f64]) {
    let Some((&first, rest)) = xs.split_first() else {
        return;
    };
    let velocity = Vec2::new(rest.first().map_or(0.0, |next| next - first), 0.0);
    if !panels.begin_pointer_drag(Point::new(first, 300.0), velocity) {
        info!("drag ignored");
        return;
    }

    for &x in rest {
        panels.drag_pointer_to(Point::new(x, 300.0));
    }

    // The center content spans the container, so its center is half a width
    // past its offset.
    let center_x = panels.host().offset + WIDTH / 2.0;
    panels.end_drag(center_x, WIDTH);
    let collapsing = panels.is_collapsing();
    panels.on_transition_completed(collapsing);
    info!(state = ?panels.state(), offset = panels.host().offset);
}

fn main() {
    init_log();

    let config = PanelConfig::new(WIDTH, 90.0).with_drag_expanded_panels(true);
    let mut panels = PanelStateController::with_config(config, ConsoleHost::default())
        .expect("demo geometry is valid");

    info!("long swipe right");
    swipe(&mut panels, &[10.0, 80.0, 190.0, 320.0]);

    info!("swipe back left");
    swipe(&mut panels, &[300.0, 250.0, 120.0, 40.0]);

    info!("short swipe left");
    swipe(&mut panels, &[300.0, 270.0, 240.0]);
}
