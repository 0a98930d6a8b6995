// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render Command
//!
//! Renders one page to HTML. Without credentials the page is built from
//! bundled content.

use anyhow::Result;
use contentking_core::content::ContentStore;
use contentking_core::render::{Page, PageView};

use crate::config::CliConfig;

/// Renders `page` to stdout.
pub async fn run(config: &CliConfig, page: &str) -> Result<()> {
    let page: Page = page.parse()?;
    let store = ContentStore::from_config(&config.stack_config()?, config.cache_options())?;

    let view = PageView::mount(&store, page);
    view.load().await;
    println!("{}", view.render());

    Ok(())
}
