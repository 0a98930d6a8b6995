// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for refetching mounted queries on editor changes
//!
//! Scenario: the editor reports a change while a section is mounted
//! - a successful refetch replaces what the section shows
//! - a failed refetch keeps what the section showed

use std::sync::Arc;
use std::time::Duration;

use contentking_core::content::{
    resolve_state, CacheOptions, ContentStore, ContentType, MockContentSource, StackConfig,
};
use contentking_core::preview::{EntryChange, LivePreview, PreviewSession};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{footer, store};

async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

fn copyright(query: &contentking_core::ContentQuery<Vec<contentking_core::content::Footer>>) -> String {
    resolve_state(&query.state()).value()[0]
        .footer_bottom
        .copyright_text
        .clone()
}

#[tokio::test(start_paused = true)]
async fn test_change_replaces_content_on_success() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v1")]);
    let store = store(&source);
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    store.attach_preview(&bridge);

    let query = store.footer();
    query.load().await;
    assert_eq!(copyright(&query), "© v1");

    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v2")]);
    bridge.notify(EntryChange::any());
    settle().await;

    assert_eq!(source.calls(ContentType::Footer), 2);
    assert_eq!(copyright(&query), "© v2");
    assert!(resolve_state(&query.state()).is_live());
}

#[tokio::test(start_paused = true)]
async fn test_change_keeps_content_on_failure() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v1")]);
    let store = store(&source);
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    store.attach_preview(&bridge);

    let query = store.footer();
    query.load().await;

    source.fail_with(ContentType::Footer, 500);
    bridge.notify(EntryChange::any());
    settle().await;

    assert_eq!(source.calls(ContentType::Footer), 2);
    let state = query.state();
    assert!(state.error.is_none());
    assert_eq!(copyright(&query), "© v1");
}

#[tokio::test(start_paused = true)]
async fn test_partial_payload_is_not_applied() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v1")]);
    let store = store(&source);
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    store.attach_preview(&bridge);

    let query = store.footer();
    query.load().await;

    bridge.notify(EntryChange {
        content_type_uid: Some("footer".to_string()),
        entry_uid: Some("blt_f".to_string()),
        partial: Some(serde_json::json!({
            "footer_bottom": { "copyright_text": "© from payload" }
        })),
    });
    settle().await;

    assert_eq!(source.calls(ContentType::Footer), 2);
    assert_eq!(copyright(&query), "© v1");
}

#[tokio::test(start_paused = true)]
async fn test_only_mounted_queries_refetch() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    store.attach_preview(&bridge);

    let footer = store.footer();
    footer.load().await;
    {
        let navigation = store.navigation();
        navigation.load().await;
    }

    bridge.notify(EntryChange::any());
    settle().await;

    assert_eq!(source.calls(ContentType::Footer), 2);
    assert_eq!(source.calls(ContentType::Navigation), 1);
}

#[tokio::test(start_paused = true)]
async fn test_inactive_bridge_triggers_nothing() {
    let source = Arc::new(MockContentSource::new());
    let store = store(&source);
    let bridge = LivePreview::inactive();
    store.attach_preview(&bridge);

    let footer = store.footer();
    footer.load().await;
    bridge.notify(EntryChange::any());
    settle().await;

    assert_eq!(source.calls(ContentType::Footer), 1);
}

#[tokio::test(start_paused = true)]
async fn test_listen_drives_refetch() {
    let source = Arc::new(MockContentSource::new());
    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v1")]);
    let store = store(&source);
    let bridge = Arc::new(LivePreview::active(PreviewSession::new("abc")));
    store.attach_preview(&bridge);

    let query = store.footer();
    query.load().await;

    let (tx, rx) = tokio::sync::mpsc::channel(4);
    let task = bridge.clone().listen(rx);
    source.set_entries(ContentType::Footer, vec![footer("blt_f", "© v2")]);
    tx.send(EntryChange::any()).await.unwrap();
    drop(tx);
    task.await.unwrap();
    settle().await;

    assert_eq!(copyright(&query), "© v2");
}

#[tokio::test]
async fn test_preview_store_routes_through_session_and_refetches() {
    let server = MockServer::start().await;
    let footers = |copyright: &str| {
        json!({ "entries": [footer("blt_f", copyright).into_json()] })
    };
    Mock::given(method("GET"))
        .and(path("/v3/content_types/footer/entries"))
        .and(header("preview_token", "cs_preview"))
        .and(query_param("live_preview", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(footers("© draft 1")))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/content_types/footer/entries"))
        .and(header("preview_token", "cs_preview"))
        .and(query_param("live_preview", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(footers("© draft 2")))
        .expect(1)
        .mount(&server)
        .await;

    let config = StackConfig {
        api_key: "blt_api_key".to_string(),
        delivery_token: "cs_delivery".to_string(),
        environment: "production".to_string(),
        ..Default::default()
    }
    .with_base_url(server.uri())
    .with_preview_token("cs_preview");
    let bridge = LivePreview::init(&config, "https://site.example/about?live_preview=abc");
    let store = ContentStore::with_preview(&config, CacheOptions::default(), &bridge).unwrap();

    let query = store.footer();
    query.load().await;
    assert_eq!(copyright(&query), "© draft 1");

    assert_eq!(bridge.notify(EntryChange::any()), 1);
    assert_eq!(store.wait_pending().await, 1);
    assert_eq!(copyright(&query), "© draft 2");
}

#[tokio::test]
async fn test_preview_store_without_credentials_serves_bundled_content() {
    let config = StackConfig::default().with_preview_token("cs_preview");
    let bridge = LivePreview::init(&config, "/?live_preview=abc");
    let store = ContentStore::with_preview(&config, CacheOptions::default(), &bridge).unwrap();

    let query = store.footer();
    let state = query.load().await;
    assert!(state.error.is_some());
    assert!(!resolve_state(&state).is_live());
}
