// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for PageView rendering
//!
//! Scenarios:
//! - The careers hero renders CMS text verbatim, without CMS bookkeeping
//! - Bundled content never carries edit tags
//! - Live content carries edit tags addressing its fields

use std::sync::Arc;

use contentking_core::content::{ContentStore, ContentType, MockContentSource};
use contentking_core::render::{Page, PageView};
use serde_json::json;

use crate::common::{entry, feature_card, hero_section, store};

const CAREERS_DESCRIPTION: &str =
    "Become part of an incredible team where colleagues are friends and customers are fans.";

async fn render(store: &ContentStore, page: Page) -> String {
    let view = PageView::mount(store, page);
    view.load().await;
    view.render()
}

#[tokio::test]
async fn test_careers_hero_verbatim() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::HeroSection,
        vec![hero_section(
            "blt_careers",
            "careers",
            "Join Our Amazing Team Today",
            CAREERS_DESCRIPTION,
        )],
    );
    let html = render(&store(&source), Page::Careers).await;

    assert!(html.contains(
        "<h1 data-cslp=\"hero_section_v2.blt_careers.en-us.hero_title\">Join Our Amazing\
         <span class=\"hero-highlight\">Team Today</span></h1>"
    ));
    assert!(html.contains(CAREERS_DESCRIPTION));
    assert!(html.contains("We&#39;re hiring"));
    assert!(html.contains("bg-gradient-secondary"));
    assert!(html.contains("href=\"/careers#jobs\""));

    for bookkeeping in ["_metadata", "_version", "cs_meta_1", "ACL", "publish_details", "blt_editor"] {
        assert!(!html.contains(bookkeeping), "leaked {}", bookkeeping);
    }
}

#[tokio::test]
async fn test_offline_pages_have_no_edit_tags() {
    let store = ContentStore::offline();
    for page in Page::ALL {
        let html = render(&store, page).await;
        assert!(html.contains("Content King"), "{} lacks site title", page);
        assert!(!html.contains("data-cslp"), "{} has edit tags", page);
    }
}

#[tokio::test]
async fn test_live_cards_tagged_fallback_sections_not() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt_fc", "Edge <Delivery>", "Globe", "home_features")],
    );
    let html = render(&store(&source), Page::Home).await;

    assert!(html.contains("data-cslp=\"feature_card.blt_fc.en-us.feature_title\""));
    assert!(html.contains("Edge &lt;Delivery&gt;"));
    assert!(!html.contains("data-icon=\"BarChart3\""));

    // Statistics came back empty and fell back to bundled content
    assert!(html.contains("99.90%"));
    assert!(!html.contains("data-cslp=\"statistic."));
}

#[tokio::test]
async fn test_failed_section_falls_back_alone() {
    let source = Arc::new(MockContentSource::new());
    source.fail_with(ContentType::Footer, 502);
    source.set_entries(
        ContentType::GlobalSettings,
        vec![entry(
            ContentType::GlobalSettings,
            json!({ "uid": "blt_gs", "site_title": "Content King Live" }),
        )],
    );
    let html = render(&store(&source), Page::About).await;

    assert!(html.contains("<title>About | Content King Live</title>"));
    assert!(html.contains("© 2024 Content King. All rights reserved."));
    assert!(html.contains("Leadership Team"));
    assert!(html.contains("Neha Sampat"));
}

#[tokio::test]
async fn test_page_mount_registers_observers() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);
    {
        let view = PageView::mount(&store, Page::Features);
        view.load().await;
        assert_eq!(store.refetch_mounted().await, 7);
    }
    assert_eq!(store.refetch_mounted().await, 0);
}
