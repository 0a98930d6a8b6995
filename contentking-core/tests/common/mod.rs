// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Entry fixtures and store setup shared by the integration test targets.

#![allow(dead_code)]

use std::sync::Arc;

use contentking_core::content::{
    CacheOptions, ContentStore, ContentType, Entry, MockContentSource,
};
use serde_json::{json, Value};

/// Build an entry, panicking on malformed fixtures.
pub fn entry(content_type: ContentType, value: Value) -> Entry {
    Entry::from_json(content_type, value).expect("valid fixture entry")
}

/// Feature card entry as the delivery API returns it.
pub fn feature_card(uid: &str, title: &str, icon: &str, category: &str) -> Entry {
    entry(
        ContentType::FeatureCard,
        json!({
            "uid": uid,
            "locale": "en-us",
            "feature_title": title,
            "feature_description": format!("{} description", title),
            "feature_icon": icon,
            "feature_order": 1,
            "feature_category": category,
            "_version": 2,
            "ACL": {},
        }),
    )
}

/// Hero section entry including the CMS bookkeeping fields.
pub fn hero_section(uid: &str, slug: &str, title: &str, description: &str) -> Entry {
    entry(
        ContentType::HeroSection,
        json!({
            "uid": uid,
            "locale": "en-us",
            "page_slug": slug,
            "hero_title": title,
            "hero_subtitle": "We're hiring",
            "hero_description": description,
            "primary_cta": { "text": "See openings", "url": "/careers#jobs", "is_external": false },
            "background_style": "gradient_secondary",
            "_version": 7,
            "_in_progress": false,
            "ACL": {},
            "_metadata": { "uid": "cs_meta_1" },
            "created_by": "blt_editor",
            "publish_details": { "environment": "production", "locale": "en-us" },
        }),
    )
}

/// Footer entry with a recognisable copyright line.
pub fn footer(uid: &str, copyright: &str) -> Entry {
    let section = |title: &str| json!({ "title": title, "links": [{ "label": title, "url": "/" }] });
    entry(
        ContentType::Footer,
        json!({
            "uid": uid,
            "footer_sections": {
                "company_section": section("Company"),
                "products_section": section("Products"),
                "resources_section": section("Resources"),
            },
            "footer_bottom": { "copyright_text": copyright, "legal_links": [] },
        }),
    )
}

/// Store over a shared mock source with default cache timing.
pub fn store(source: &Arc<MockContentSource>) -> ContentStore {
    ContentStore::new(source.clone(), CacheOptions::default())
}
