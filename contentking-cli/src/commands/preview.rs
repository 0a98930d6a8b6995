// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Preview Command
//!
//! Renders a page inside a live preview session and renders it again after
//! every change notification read from stdin.

use std::sync::Arc;

use anyhow::{Context, Result};
use contentking_core::content::ContentStore;
use contentking_core::preview::{EntryChange, LivePreview};
use contentking_core::render::{Page, PageView};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::display;

/// Parses one stdin line into a change notification.
///
/// A blank line is a change without details.
pub fn parse_change(line: &str) -> Result<EntryChange> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(EntryChange::any());
    }
    serde_json::from_str(line).context("change notification is not valid JSON")
}

async fn read_changes(sender: mpsc::Sender<EntryChange>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_change(&line) {
            Ok(change) => {
                if sender.send(change).await.is_err() {
                    break;
                }
            }
            Err(e) => warn!(error = %e, "skipping change notification"),
        }
    }
    Ok(())
}

/// Renders `page` for the preview session in `url` until stdin closes.
pub async fn run(config: &CliConfig, url: &str, page: &str) -> Result<()> {
    let page: Page = page.parse()?;
    let stack = config.stack_config()?;
    let bridge = Arc::new(LivePreview::init(&stack, url));
    let store = ContentStore::with_preview(&stack, config.cache_options(), &bridge)?;

    let view = PageView::mount(&store, page);
    view.load().await;
    println!("{}", view.render());

    if !bridge.is_active() {
        display::warning("No live preview session in the page URL; rendered once");
        return Ok(());
    }
    display::info("Waiting for change notifications on stdin");

    // Subscribed after the store, so its refetches have started by the
    // time a change reaches the renderer.
    let (render_tx, mut render_rx) = mpsc::unbounded_channel();
    let subscription = bridge.subscribe(move |change| {
        let _ = render_tx.send(change);
    });

    let (change_tx, change_rx) = mpsc::channel(16);
    let pump = bridge.clone().listen(change_rx);
    let reader = tokio::spawn(read_changes(change_tx));

    let renderer = async {
        while let Some(change) = render_rx.recv().await {
            let refetched = store.wait_pending().await;
            info!(
                entry = change.entry_uid.as_deref().unwrap_or("-"),
                refetched, "re-rendering after editor change"
            );
            println!("{}", view.render());
        }
    };
    let closer = async {
        let read = reader.await;
        let pumped = pump.await;
        bridge.unsubscribe(subscription);
        (read, pumped)
    };

    let ((read, pumped), ()) = tokio::join!(closer, renderer);
    read??;
    pumped?;

    Ok(())
}
