// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live-preview bridge
//!
//! Relays change notifications from the visual editor to subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::session::{PreviewError, PreviewSession};
use crate::content::StackConfig;

/// Whether the page runs inside the visual editor.
///
/// A bridge starts in one of the two states and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Regular page view.
    Inactive,
    /// Page loaded by the visual editor.
    Active,
}

/// Handle returned by [`LivePreview::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change notification from the editor.
///
/// The partial entry payload is informational; subscribers refetch instead
/// of applying it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EntryChange {
    /// Content type of the changed entry, if the editor reported it.
    #[serde(default)]
    pub content_type_uid: Option<String>,
    /// Uid of the changed entry, if the editor reported it.
    #[serde(default)]
    pub entry_uid: Option<String>,
    /// Partial entry data sent by the editor.
    #[serde(default, alias = "data")]
    pub partial: Option<Value>,
}

impl EntryChange {
    /// A change without any details.
    pub fn any() -> Self {
        Self::default()
    }
}

/// Preview handler trait.
///
/// Implement this trait to receive editor changes.
pub trait PreviewHandler: Send + Sync {
    /// Called for every change the editor reports.
    fn on_change(&self, change: EntryChange);
}

/// Closure-based preview handler.
pub struct CallbackHandler<F>
where
    F: Fn(EntryChange) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(EntryChange) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> PreviewHandler for CallbackHandler<F>
where
    F: Fn(EntryChange) + Send + Sync,
{
    fn on_change(&self, change: EntryChange) {
        (self.callback)(change);
    }
}

/// Bridge between the visual editor and the page.
pub struct LivePreview {
    state: PreviewState,
    session: Option<PreviewSession>,
    handlers: RwLock<Vec<(SubscriptionId, Arc<dyn PreviewHandler>)>>,
    next_id: AtomicU64,
}

impl LivePreview {
    /// A bridge that never delivers anything.
    pub fn inactive() -> Self {
        Self::with_session(None)
    }

    /// An active bridge for `session`.
    pub fn active(session: PreviewSession) -> Self {
        Self::with_session(Some(session))
    }

    fn with_session(session: Option<PreviewSession>) -> Self {
        let state = if session.is_some() {
            PreviewState::Active
        } else {
            PreviewState::Inactive
        };
        Self {
            state,
            session,
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Initialise from the stack config and the current page URL.
    ///
    /// The bridge is active only if the URL carries the `live_preview`
    /// marker and a preview token is configured. Anything else leaves it
    /// inactive.
    pub fn init(config: &StackConfig, page_url: &str) -> Self {
        if !config.preview_enabled() {
            debug!("live preview inactive: no preview token configured");
            return Self::inactive();
        }

        match PreviewSession::from_url(page_url) {
            Ok(session) => {
                info!(
                    hash = %session.hash(),
                    entry = session.entry_uid().unwrap_or("-"),
                    "live preview active"
                );
                Self::active(session)
            }
            Err(PreviewError::MissingMarker) => {
                debug!("live preview inactive: no marker in page URL");
                Self::inactive()
            }
            Err(e) => {
                debug!(error = %e, "live preview inactive");
                Self::inactive()
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> PreviewState {
        self.state
    }

    /// Whether the page runs inside the visual editor.
    pub fn is_active(&self) -> bool {
        self.state == PreviewState::Active
    }

    /// Session of an active bridge.
    pub fn session(&self) -> Option<&PreviewSession> {
        self.session.as_ref()
    }

    /// Register a closure called on every editor change.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(EntryChange) + Send + Sync + 'static,
    {
        self.add_handler(Arc::new(CallbackHandler::new(callback)))
    }

    /// Register a handler called on every editor change.
    pub fn add_handler(&self, handler: Arc<dyn PreviewHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().push((id, handler));
        id
    }

    /// Remove a subscription; returns whether it existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.write();
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    /// Returns the number of subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Deliver a change to every subscriber, returning how many were called.
    ///
    /// Does nothing on an inactive bridge.
    pub fn notify(&self, change: EntryChange) -> usize {
        if !self.is_active() {
            return 0;
        }
        if let Some(partial) = &change.partial {
            debug!(%partial, "ignoring partial entry payload");
        }

        // Handlers may subscribe or unsubscribe while being called.
        let handlers: Vec<_> = self
            .handlers
            .read()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        debug!(
            content_type = change.content_type_uid.as_deref().unwrap_or("-"),
            entry = change.entry_uid.as_deref().unwrap_or("-"),
            subscribers = handlers.len(),
            "entry changed in editor"
        );
        for handler in &handlers {
            handler.on_change(change.clone());
        }
        handlers.len()
    }

    /// Pump editor changes from `receiver` until the sender side closes.
    pub fn listen(self: Arc<Self>, mut receiver: mpsc::Receiver<EntryChange>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(change) = receiver.recv().await {
                self.notify(change);
            }
            debug!("live preview channel closed");
        })
    }
}

impl Default for LivePreview {
    fn default() -> Self {
        Self::inactive()
    }
}

impl std::fmt::Debug for LivePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivePreview")
            .field("state", &self.state)
            .field("session", &self.session)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
