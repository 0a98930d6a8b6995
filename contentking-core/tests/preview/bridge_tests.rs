// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for LivePreview activation and delivery

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use contentking_core::content::StackConfig;
use contentking_core::preview::{
    EntryChange, LivePreview, PreviewHandler, PreviewSession, PreviewState,
};
use tokio::sync::mpsc;

fn preview_config() -> StackConfig {
    StackConfig {
        api_key: "blt_api_key".to_string(),
        delivery_token: "cs_delivery".to_string(),
        environment: "production".to_string(),
        ..Default::default()
    }
    .with_preview_token("cs_preview")
}

fn counting(bridge: &LivePreview) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    bridge.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    calls
}

#[test]
fn test_active_only_with_marker_and_token() {
    let url = "https://site.example/?live_preview=abc&entry_uid=blt1";

    assert_eq!(
        LivePreview::init(&preview_config(), url).state(),
        PreviewState::Active
    );
    assert_eq!(
        LivePreview::init(&preview_config(), "https://site.example/").state(),
        PreviewState::Inactive
    );

    let no_token = StackConfig {
        preview_token: None,
        ..preview_config()
    };
    assert_eq!(
        LivePreview::init(&no_token, url).state(),
        PreviewState::Inactive
    );
}

#[test]
fn test_unparsable_url_leaves_bridge_inactive() {
    let bridge = LivePreview::init(&preview_config(), "http://[::1?live_preview=abc");
    assert!(!bridge.is_active());
}

#[test]
fn test_inactive_bridge_never_delivers() {
    let bridge = LivePreview::inactive();
    let calls = counting(&bridge);

    assert_eq!(bridge.notify(EntryChange::any()), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(bridge.subscriber_count(), 1);
}

#[test]
fn test_every_subscriber_notified() {
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    let first = counting(&bridge);
    let second = counting(&bridge);

    assert_eq!(bridge.notify(EntryChange::any()), 2);
    assert_eq!(bridge.notify(EntryChange::any()), 2);
    assert_eq!(first.load(Ordering::SeqCst), 2);
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

struct Recorder(parking_lot::Mutex<Vec<Option<String>>>);

impl PreviewHandler for Recorder {
    fn on_change(&self, change: EntryChange) {
        self.0.lock().push(change.entry_uid);
    }
}

#[test]
fn test_trait_handler_receives_change() {
    let bridge = LivePreview::active(PreviewSession::new("abc"));
    let recorder = Arc::new(Recorder(parking_lot::Mutex::new(Vec::new())));
    bridge.add_handler(recorder.clone());

    bridge.notify(EntryChange {
        entry_uid: Some("blt9".to_string()),
        ..Default::default()
    });
    assert_eq!(*recorder.0.lock(), vec![Some("blt9".to_string())]);
}

#[tokio::test]
async fn test_listen_pumps_channel_until_closed() {
    let bridge = Arc::new(LivePreview::active(PreviewSession::new("abc")));
    let calls = counting(&bridge);
    let (tx, rx) = mpsc::channel(8);
    let task = bridge.clone().listen(rx);

    for _ in 0..3 {
        tx.send(EntryChange::any()).await.unwrap();
    }
    drop(tx);
    task.await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_listen_on_inactive_bridge_drops_changes() {
    let bridge = Arc::new(LivePreview::inactive());
    let calls = counting(&bridge);
    let (tx, rx) = mpsc::channel(8);
    let task = bridge.clone().listen(rx);

    tx.send(EntryChange::any()).await.unwrap();
    drop(tx);
    task.await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
