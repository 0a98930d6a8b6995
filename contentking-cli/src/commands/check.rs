// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Check Command
//!
//! Validates the stack configuration and queries every content type once.

use anyhow::{bail, Result};
use contentking_core::content::{ContentClient, ContentSource, ContentType, Query};
use futures::future::join_all;

use crate::config::CliConfig;
use crate::display;

/// Reports configuration problems and unreachable content types.
pub async fn run(config: &CliConfig) -> Result<()> {
    let stack = config.stack_config()?;

    if let Err(e) = stack.validate() {
        display::error(&e.to_string());
        display::info("Pages will render from bundled content only.");
        bail!("content stack not configured");
    }
    display::success(&format!("Configured for {}", stack.delivery_base_url()));
    if stack.preview_enabled() {
        display::success("Live preview token present");
    } else {
        display::warning("No live preview token; preview sessions stay inactive");
    }

    let client = ContentClient::new(&stack)?;
    let results = join_all(ContentType::ALL.into_iter().map(|content_type| {
        let client = &client;
        async move {
            let result = client.fetch_entries(&Query::new(content_type)).await;
            (content_type, result)
        }
    }))
    .await;

    let mut failed = 0;
    for (content_type, result) in results {
        match result {
            Ok(entries) if entries.is_empty() => {
                display::warning(&format!("{}: no entries, bundled content shows", content_type));
            }
            Ok(entries) => {
                display::success(&format!("{}: {} entries", content_type, entries.len()));
            }
            Err(e) => {
                failed += 1;
                display::error(&format!("{}: {}", content_type, e));
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} content types failed", failed, ContentType::ALL.len());
    }
    Ok(())
}
