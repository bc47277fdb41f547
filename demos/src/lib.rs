// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the side panel demos.
//!
//! [`ConsoleHost`] stands in for a rendering layer: it keeps the center
//! content's offset and reports every host call through `tracing`.

use std::io::stdout;

use tracing::{Level, info};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};
use understory_side_panel::{Animation, PanelHost, PanelSide, TransitionKind, TransitionRequest};

/// Installs a stdout subscriber showing demo output and controller debug events.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_log() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,understory_side_panel=debug"));
    let formatting_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(stdout.with_max_level(Level::TRACE));

    Registry::default()
        .with(env_filter)
        .with(formatting_layer)
        .init();
}

/// Panel content attached by [`ConsoleHost`].
#[derive(Debug)]
pub struct PanelContent {
    /// Which side it was created for.
    pub side: PanelSide,
    /// What the panel lists.
    pub title: &'static str,
}

/// A headless host that logs what a real rendering layer would do.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    /// Current horizontal offset of the center content.
    pub offset: f64,
    /// Whether animations finish before `animate` returns.
    pub instant: bool,
}

impl PanelHost for ConsoleHost {
    type Handle = PanelContent;

    fn materialize_panel(&mut self, side: PanelSide) -> PanelContent {
        let title = match side {
            PanelSide::Left => "cats",
            PanelSide::Right => "dogs",
        };
        info!(?side, title, "attach panel");
        PanelContent { side, title }
    }

    fn release_panel(&mut self, side: PanelSide, handle: PanelContent) {
        info!(?side, title = handle.title, "detach panel");
    }

    fn animate(&mut self, request: &TransitionRequest) -> Animation {
        let from = self.offset;
        self.offset = request.target_offset;
        match request.kind {
            TransitionKind::Follow => {
                info!(from, to = self.offset, "follow pointer");
                Animation::Finished
            }
            kind => {
                info!(?kind, from, to = self.offset, instant = self.instant, "animate");
                if self.instant {
                    Animation::Finished
                } else {
                    Animation::Pending
                }
            }
        }
    }

    fn set_shadow_visible(&mut self, visible: bool) {
        info!(visible, "shadow");
    }
}
