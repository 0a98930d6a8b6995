// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for fallback resolution
//!
//! Properties:
//! - Resolution is total: every input yields renderable content
//! - Resolution is idempotent
//! - Live content passes through verbatim; nothing is merged

use std::sync::Arc;

use contentking_core::content::{
    resolve, resolve_state, ContentRecord, ContentType, FeatureCard, HeroSection,
    MockContentSource, QueryState, Resolved, Statistic,
};
use proptest::prelude::*;

use crate::common::store;

const FALLBACK_ICONS: [&str; 6] = ["Zap", "Shield", "Globe", "Code", "Users", "BarChart3"];

fn feature_card_strategy() -> impl Strategy<Value = FeatureCard> {
    (
        "blt[a-z0-9]{6}",
        "[A-Za-z][A-Za-z &<>']{0,30}",
        ".{0,60}",
        "[A-Z][A-Za-z0-9]{0,10}",
        0i64..20,
    )
        .prop_map(|(uid, title, description, icon, order)| FeatureCard {
            uid,
            feature_title: title,
            feature_description: description,
            feature_icon: icon,
            feature_order: order,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn prop_resolution_total_and_verbatim(cards in prop::collection::vec(feature_card_strategy(), 0..8)) {
        let resolved = resolve(Some(&cards));
        if cards.is_empty() {
            prop_assert!(!resolved.is_live());
            prop_assert_eq!(resolved.value().len(), 6);
        } else {
            prop_assert_eq!(resolved, Resolved::Live(cards));
        }
    }

    #[test]
    fn prop_resolution_idempotent(cards in prop::collection::vec(feature_card_strategy(), 0..8)) {
        let once = resolve(Some(&cards)).into_value();
        let twice = resolve(Some(&once)).into_value();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_failed_state_always_falls_back(status in 400u16..600) {
        let state = QueryState::<Vec<Statistic>>::failed(
            contentking_core::ContentError::Http(status),
        );
        let resolved = resolve_state(&state);
        prop_assert!(!resolved.is_live());
        prop_assert_eq!(resolved.into_value(), Statistic::fallback());
    }
}

#[test]
fn test_absent_data_falls_back() {
    let resolved = resolve::<Vec<FeatureCard>>(None);
    assert!(!resolved.is_live());

    let hero = resolve::<Option<HeroSection>>(None).into_value();
    assert_eq!(hero.primary_cta.text, "Start Free Trial");
}

#[test]
fn test_fallback_is_fresh_each_time() {
    let mut first = resolve::<Vec<FeatureCard>>(None).into_value();
    first.clear();
    assert_eq!(resolve::<Vec<FeatureCard>>(None).value().len(), 6);
}

#[tokio::test]
async fn test_empty_feature_cards_resolve_to_bundled_set() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(ContentType::FeatureCard, Vec::new());
    let store = store(&source);

    let state = store.feature_cards(Some("home_features")).load().await;
    assert!(state.error.is_none());
    let resolved = resolve_state(&state);

    assert!(!resolved.is_live());
    let icons: Vec<&str> = resolved
        .value()
        .iter()
        .map(|card| card.feature_icon.as_str())
        .collect();
    assert_eq!(icons, FALLBACK_ICONS);
}

#[test]
fn test_loading_state_resolves_to_fallback() {
    let state = QueryState::<Vec<FeatureCard>> {
        data: None,
        is_loading: true,
        error: None,
    };
    assert!(!resolve_state(&state).is_live());
}
