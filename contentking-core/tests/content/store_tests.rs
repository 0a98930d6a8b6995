// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ContentStore typed queries
//!
//! Scenarios:
//! - Concurrent requests for one key share a single fetch
//! - Fresh data is reused, stale data is refetched
//! - A later-issued request is never overwritten by an earlier one
//! - Failed refetches keep the last good data

use std::sync::Arc;
use std::time::Duration;

use contentking_core::content::{ContentType, MockContentSource, QueryKey};

use crate::common::{feature_card, hero_section, store};

fn titles(state: &contentking_core::content::QueryState<Vec<contentking_core::content::FeatureCard>>) -> Vec<String> {
    state
        .data
        .as_ref()
        .map(|cards| cards.iter().map(|c| c.feature_title.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_loads_coalesce() {
    let source = Arc::new(MockContentSource::new());
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Fast", "Zap", "home_features")],
        Duration::from_millis(100),
    );
    let store = store(&source);

    let handles: Vec<_> = (0..5)
        .map(|_| store.feature_cards(Some("home_features")))
        .collect();
    let states = futures::future::join_all(handles.iter().map(|h| h.load())).await;

    assert_eq!(source.calls(ContentType::FeatureCard), 1);
    assert!(states.iter().all(|s| titles(s) == vec!["Fast".to_string()]));
    assert_eq!(
        store
            .cache()
            .observers(&QueryKey::new(ContentType::FeatureCard).with("home_features")),
        5
    );
}

#[tokio::test(start_paused = true)]
async fn test_fresh_data_reused_then_refetched_when_stale() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Fast", "Zap", "home_features")],
    );
    let store = store(&source);
    let query = store.feature_cards(None);

    query.load().await;
    assert_eq!(source.calls(ContentType::FeatureCard), 1);

    tokio::time::advance(Duration::from_secs(2 * 60)).await;
    query.load().await;
    assert_eq!(source.calls(ContentType::FeatureCard), 1);

    tokio::time::advance(Duration::from_secs(4 * 60)).await;
    query.load().await;
    assert_eq!(source.calls(ContentType::FeatureCard), 2);
}

#[tokio::test(start_paused = true)]
async fn test_later_request_wins_when_it_resolves_first() {
    let source = Arc::new(MockContentSource::new());
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Earlier", "Zap", "x")],
        Duration::from_millis(200),
    );
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Later", "Zap", "x")],
        Duration::from_millis(50),
    );
    let store = store(&source);
    let query = store.feature_cards(None);

    let (first, second) = tokio::join!(query.refetch(), query.refetch());

    assert_eq!(source.calls(ContentType::FeatureCard), 2);
    assert_eq!(titles(&second), vec!["Later"]);
    assert_eq!(titles(&first), vec!["Later"]);
    assert_eq!(titles(&query.state()), vec!["Later"]);
}

#[tokio::test(start_paused = true)]
async fn test_later_request_wins_when_it_resolves_last() {
    let source = Arc::new(MockContentSource::new());
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Earlier", "Zap", "x")],
        Duration::from_millis(50),
    );
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Later", "Zap", "x")],
        Duration::from_millis(200),
    );
    let store = store(&source);
    let query = store.feature_cards(None);

    tokio::join!(query.refetch(), query.refetch());

    assert_eq!(titles(&query.state()), vec!["Later"]);
}

#[tokio::test(start_paused = true)]
async fn test_refetch_failure_keeps_data() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Fast", "Zap", "x")],
    );
    let store = store(&source);
    let query = store.feature_cards(None);
    query.load().await;

    source.push_error(ContentType::FeatureCard, 500, Duration::ZERO);
    let state = query.refetch().await;

    assert_eq!(source.calls(ContentType::FeatureCard), 2);
    assert_eq!(titles(&state), vec!["Fast"]);
    assert!(state.error.is_none());
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_error_reported_only_without_data() {
    let source = Arc::new(MockContentSource::new());
    source.fail_with(ContentType::Statistic, 503);
    let store = store(&source);
    let query = store.statistics(Some("home_stats"));

    let state = query.load().await;
    assert!(state.data.is_none());
    assert!(!state.is_loading);
    assert!(state.error.as_ref().is_some_and(|e| e.is_network()));

    source.recover(ContentType::Statistic);
    let state = query.refetch().await;
    assert!(state.error.is_none());
    assert_eq!(state.data.as_ref().map(|d| d.len()), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_loading_only_while_first_fetch_in_flight() {
    let source = Arc::new(MockContentSource::new());
    source.push_entries(
        ContentType::FeatureCard,
        vec![feature_card("blt1", "Fast", "Zap", "x")],
        Duration::from_millis(100),
    );
    let store = store(&source);
    let query = store.feature_cards(None);
    assert!(!query.state().is_loading);

    let background = query.clone();
    let task = tokio::spawn(async move { background.load().await });
    tokio::task::yield_now().await;
    assert!(query.state().is_loading);

    task.await.unwrap();
    let state = query.state();
    assert!(!state.is_loading);
    assert_eq!(titles(&state), vec!["Fast"]);

    source.push_entries(ContentType::FeatureCard, Vec::new(), Duration::from_millis(100));
    let background = query.clone();
    let task = tokio::spawn(async move { background.refetch().await });
    tokio::task::yield_now().await;
    assert!(!query.state().is_loading);
    task.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_category_applied_as_filter() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::FeatureCard,
        vec![
            feature_card("blt1", "Home card", "Zap", "home_features"),
            feature_card("blt2", "Pricing card", "Globe", "pricing"),
        ],
    );
    let store = store(&source);

    let pricing = store.feature_cards(Some("pricing")).load().await;
    assert_eq!(titles(&pricing), vec!["Pricing card"]);

    let all = store.feature_cards(None).load().await;
    assert_eq!(titles(&all).len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_hero_by_slug() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::HeroSection,
        vec![
            hero_section("blt_home", "home", "Welcome Home", "Home page"),
            hero_section("blt_careers", "careers", "Join Our Team", "Careers page"),
        ],
    );
    let store = store(&source);

    let state = store.hero_section_by_slug("careers").load().await;
    let hero = state.data.as_deref().and_then(Option::as_ref).unwrap();
    assert_eq!(hero.uid, "blt_careers");

    let state = store.hero_section_by_slug("pricing").load().await;
    assert!(state.data.is_none());
    assert!(matches!(
        state.error.as_deref(),
        Some(contentking_core::ContentError::NotFound {
            content_type: ContentType::HeroSection
        })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_hero_removed_on_refetch_keeps_last_record() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::HeroSection,
        vec![hero_section("blt_careers", "careers", "Join Our Team", "Careers page")],
    );
    let store = store(&source);
    let query = store.hero_section_by_slug("careers");
    query.load().await;

    source.set_entries(ContentType::HeroSection, Vec::new());
    let state = query.refetch().await;

    assert_eq!(source.calls(ContentType::HeroSection), 2);
    let hero = state.data.as_deref().and_then(Option::as_ref).unwrap();
    assert_eq!(hero.hero_title, "Join Our Team");
    assert!(state.error.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_empty_slug_never_fetches() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);
    let query = store.hero_section_by_slug("");

    let state = query.load().await;
    assert!(state.data.is_none());
    assert!(state.error.is_none());
    assert!(!state.is_loading);

    query.refetch().await;
    assert_eq!(source.total_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_schema_mismatch_absorbed_as_error() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(
        ContentType::FeatureCard,
        vec![crate::common::entry(
            ContentType::FeatureCard,
            serde_json::json!({ "uid": "blt1", "feature_title": "No icon" }),
        )],
    );
    let store = store(&source);

    let state = store.feature_cards(None).load().await;
    assert!(state.data.is_none());
    assert!(matches!(
        state.error.as_deref(),
        Some(contentking_core::ContentError::SchemaMismatch { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_unmounted_query_is_evicted() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);
    let key = QueryKey::new(ContentType::Footer);

    let footer = store.footer();
    footer.load().await;
    tokio::time::advance(Duration::from_secs(30 * 60)).await;
    assert_eq!(store.cache().evict_expired(), 0);

    drop(footer);
    assert_eq!(store.cache().observers(&key), 0);
    tokio::time::advance(Duration::from_secs(11 * 60)).await;
    assert_eq!(store.cache().evict_expired(), 1);
    assert!(!store.cache().contains(&key));
}

#[tokio::test(start_paused = true)]
async fn test_refetch_mounted_skips_unmounted() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);

    let footer = store.footer();
    footer.load().await;
    let navigation = store.navigation();
    navigation.load().await;
    drop(navigation);

    assert_eq!(store.refetch_mounted().await, 1);
    assert_eq!(source.calls(ContentType::Footer), 2);
    assert_eq!(source.calls(ContentType::Navigation), 1);
}

#[tokio::test(start_paused = true)]
async fn test_query_dropped_mid_fetch_settles_and_is_evicted() {
    let source = Arc::new(MockContentSource::new());
    source.push_entries(
        ContentType::Footer,
        vec![crate::common::footer("blt_f", "© 2025")],
        Duration::from_millis(100),
    );
    let store = store(&source);
    let key = QueryKey::new(ContentType::Footer);

    let footer = store.footer();
    let waited = tokio::time::timeout(Duration::from_millis(10), footer.load()).await;
    assert!(waited.is_err());
    drop(footer);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(source.calls(ContentType::Footer), 1);
    assert!(!store.cache().snapshot(&key).is_loading);
    assert_eq!(store.cache().observers(&key), 0);

    tokio::time::advance(Duration::from_secs(60 * 60)).await;
    assert_eq!(store.cache().evict_expired(), 1);
    assert!(!store.cache().contains(&key));
}
