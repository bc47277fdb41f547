// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side panel taps.
//!
//! Drive `understory_side_panel` with toolbar-style toggles, the way a
//! navigation bar with "cats" and "dogs" buttons would.
//!
//! Run:
//! - `cargo run -p understory_side_panel_demos --example side_panel_taps`

use tracing::info;
use understory_side_panel::{Contention, PanelConfig, PanelSide, PanelStateController};
use understory_side_panel_demos::{ConsoleHost, init_log};

fn main() {
    init_log();

    let config = PanelConfig::new(375.0, 90.0).with_contention(Contention::Queue);
    let mut panels = PanelStateController::with_config(config, ConsoleHost::default())
        .expect("demo geometry is valid");

    info!("tap: cats");
    panels.request_toggle(PanelSide::Left);
    info!(state = ?panels.state());

    // The host reports the end of every settle animation.
    panels.on_transition_completed(false);

    info!("tap: dogs while cats are open");
    panels.request_toggle(PanelSide::Right);
    info!(state = ?panels.state(), collapsing = panels.is_collapsing());

    info!("collapse animation finished");
    panels.on_transition_completed(true);
    info!(state = ?panels.state(), offset = panels.host().offset);

    info!("tap on the center content");
    panels.request_collapse();
    panels.on_transition_completed(true);
    info!(state = ?panels.state(), offset = panels.host().offset);
}
