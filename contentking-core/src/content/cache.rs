// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query cache for fetched content
//!
//! One process-wide map from [`QueryKey`] to the last good result of that
//! query. The cache:
//! - serves fresh data without touching the network (`stale_time`)
//! - coalesces concurrent requests for a key into one in-flight fetch
//! - tags every fetch with a sequence number and only applies a response if
//!   no later-issued fetch has been applied already
//! - keeps the last good data when a fetch fails
//! - evicts keys nobody observes once `gc_time` has passed
//!
//! Fetches run as detached tokio tasks, so a fetch abandoned by every
//! waiter still completes into the cache.
//!
//! Time is read from `tokio::time::Instant` so a paused test clock drives
//! staleness and eviction.

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::config::CacheOptions;
use super::error::ContentError;
use super::types::QueryKey;

/// Type-erased cached value; the typed layer downcasts it
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Result of a fetch as seen by every waiter
pub type FetchOutcome = Result<Payload, Arc<ContentError>>;

/// Produces a fresh fetch future for a key
pub type Fetcher = Arc<dyn Fn() -> BoxFuture<'static, Result<Payload, ContentError>> + Send + Sync>;

type SharedFetch = Shared<BoxFuture<'static, FetchOutcome>>;

/// Point-in-time view of one cache slot
#[derive(Clone, Default)]
pub struct SlotSnapshot {
    /// Last good data
    pub data: Option<Payload>,
    /// Error of the last fetch, only kept while there is no data
    pub error: Option<Arc<ContentError>>,
    /// A fetch is in flight and there is no data yet
    pub is_loading: bool,
    /// When `data` was fetched
    pub updated_at: Option<Instant>,
}

impl std::fmt::Debug for SlotSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotSnapshot")
            .field("has_data", &self.data.is_some())
            .field("error", &self.error)
            .field("is_loading", &self.is_loading)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

struct InFlight {
    seq: u64,
    future: SharedFetch,
}

struct Slot {
    data: Option<Payload>,
    updated_at: Option<Instant>,
    error: Option<Arc<ContentError>>,
    applied_seq: u64,
    in_flight: Option<InFlight>,
    last_used: Instant,
    observers: usize,
    fetcher: Option<Fetcher>,
}

impl Slot {
    fn new(now: Instant) -> Self {
        Self {
            data: None,
            updated_at: None,
            error: None,
            applied_seq: 0,
            in_flight: None,
            last_used: now,
            observers: 0,
            fetcher: None,
        }
    }

    fn fresh_data(&self, now: Instant, stale_time: std::time::Duration) -> Option<Payload> {
        let updated_at = self.updated_at?;
        if now.saturating_duration_since(updated_at) < stale_time {
            self.data.clone()
        } else {
            None
        }
    }

    fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            data: self.data.clone(),
            error: self.error.clone(),
            is_loading: self.in_flight.is_some() && self.data.is_none(),
            updated_at: self.updated_at,
        }
    }

    fn is_collectable(&self, now: Instant, gc_time: std::time::Duration) -> bool {
        self.observers == 0
            && self.in_flight.is_none()
            && now.saturating_duration_since(self.last_used) >= gc_time
    }
}

enum Lookup {
    Hit(Payload),
    Wait(SharedFetch),
}

struct CacheInner {
    slots: Mutex<HashMap<QueryKey, Slot>>,
    options: CacheOptions,
    next_seq: AtomicU64,
}

impl CacheInner {
    fn complete(&self, key: &QueryKey, seq: u64, outcome: &FetchOutcome) {
        let mut slots = self.slots.lock();
        let Some(slot) = slots.get_mut(key) else {
            debug!(%key, seq, "discarding response for evicted key");
            return;
        };

        if slot.in_flight.as_ref().is_some_and(|f| f.seq == seq) {
            slot.in_flight = None;
        }

        match outcome {
            Ok(data) if seq > slot.applied_seq => {
                slot.applied_seq = seq;
                slot.data = Some(data.clone());
                slot.updated_at = Some(Instant::now());
                slot.error = None;
                debug!(%key, seq, "applied response");
            }
            Ok(_) => {
                debug!(
                    %key,
                    seq,
                    applied = slot.applied_seq,
                    "discarding out-of-order response"
                );
            }
            Err(err) => {
                warn!(%key, seq, error = %err, "content fetch failed");
                if slot.data.is_none() && seq > slot.applied_seq {
                    slot.error = Some(err.clone());
                }
            }
        }
    }
}

/// Process-wide cache of typed query results
///
/// Cloning is cheap and shares the underlying map.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<CacheInner>,
}

impl QueryCache {
    /// Create an empty cache
    pub fn new(options: CacheOptions) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                slots: Mutex::new(HashMap::new()),
                options,
                next_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Cache timing options
    pub fn options(&self) -> CacheOptions {
        self.inner.options
    }

    /// Get data for `key`, fetching only if nothing fresh is cached
    ///
    /// Joins an in-flight fetch for the same key instead of starting a new
    /// one.
    pub async fn fetch(&self, key: &QueryKey, fetcher: &Fetcher) -> FetchOutcome {
        match self.lookup(key, fetcher, false) {
            Lookup::Hit(data) => Ok(data),
            Lookup::Wait(future) => future.await,
        }
    }

    /// Force a new fetch for `key` regardless of staleness
    ///
    /// On failure the cached data is left untouched.
    pub async fn refetch(&self, key: &QueryKey, fetcher: &Fetcher) -> FetchOutcome {
        match self.lookup(key, fetcher, true) {
            Lookup::Hit(data) => Ok(data),
            Lookup::Wait(future) => future.await,
        }
    }

    fn lookup(&self, key: &QueryKey, fetcher: &Fetcher, force: bool) -> Lookup {
        let now = Instant::now();
        let mut slots = self.inner.slots.lock();
        self.collect_locked(&mut slots, now);

        let slot = slots.entry(key.clone()).or_insert_with(|| Slot::new(now));
        slot.last_used = now;

        if !force {
            if let Some(data) = slot.fresh_data(now, self.inner.options.stale_time) {
                debug!(%key, "cache hit");
                return Lookup::Hit(data);
            }
            if let Some(in_flight) = &slot.in_flight {
                debug!(%key, seq = in_flight.seq, "joining in-flight fetch");
                return Lookup::Wait(in_flight.future.clone());
            }
        }

        Lookup::Wait(self.start_locked(slot, key, fetcher))
    }

    fn start_locked(&self, slot: &mut Slot, key: &QueryKey, fetcher: &Fetcher) -> SharedFetch {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let weak: Weak<CacheInner> = Arc::downgrade(&self.inner);
        let request = fetcher();
        let owned_key = key.clone();

        info!(%key, seq, "fetching content");
        let task = {
            let weak = weak.clone();
            let key = owned_key.clone();
            async move {
                let outcome = request.await.map_err(Arc::new);
                if let Some(inner) = weak.upgrade() {
                    inner.complete(&key, seq, &outcome);
                }
                outcome
            }
        };

        // The fetch completes into the cache even if every waiter goes away.
        let future = match Handle::try_current() {
            Ok(handle) => {
                let join = handle.spawn(task);
                async move {
                    match join.await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            let outcome: FetchOutcome =
                                Err(Arc::new(ContentError::Interrupted(e.to_string())));
                            if let Some(inner) = weak.upgrade() {
                                inner.complete(&owned_key, seq, &outcome);
                            }
                            outcome
                        }
                    }
                }
                .boxed()
            }
            Err(_) => {
                debug!(key = %owned_key, "no tokio runtime, fetch driven by its waiters");
                task.boxed()
            }
        };
        let future = future.shared();

        slot.in_flight = Some(InFlight {
            seq,
            future: future.clone(),
        });
        future
    }

    /// Current state of `key` without fetching
    pub fn snapshot(&self, key: &QueryKey) -> SlotSnapshot {
        self.inner
            .slots
            .lock()
            .get(key)
            .map(Slot::snapshot)
            .unwrap_or_default()
    }

    /// Register an observer of `key`
    ///
    /// Observed keys are never evicted and are refetched by
    /// [`QueryCache::refetch_observed`].
    pub fn observe(&self, key: &QueryKey, fetcher: Fetcher) {
        let now = Instant::now();
        let mut slots = self.inner.slots.lock();
        let slot = slots.entry(key.clone()).or_insert_with(|| Slot::new(now));
        slot.observers += 1;
        slot.last_used = now;
        slot.fetcher = Some(fetcher);
    }

    /// Unregister an observer of `key`
    pub fn unobserve(&self, key: &QueryKey) {
        let mut slots = self.inner.slots.lock();
        if let Some(slot) = slots.get_mut(key) {
            slot.observers = slot.observers.saturating_sub(1);
            slot.last_used = Instant::now();
        }
    }

    /// Number of observers of `key`
    pub fn observers(&self, key: &QueryKey) -> usize {
        self.inner
            .slots
            .lock()
            .get(key)
            .map_or(0, |slot| slot.observers)
    }

    /// Refetch every observed key, returning how many were refetched
    pub async fn refetch_observed(&self) -> usize {
        let pending = self.start_observed();
        let count = pending.len();
        futures::future::join_all(pending).await;
        count
    }

    /// Start a refetch of every observed key without waiting for it
    ///
    /// Must run inside a tokio runtime context for the fetches to proceed
    /// on their own.
    pub(crate) fn spawn_refetch_observed(&self) -> usize {
        self.start_observed().len()
    }

    fn start_observed(&self) -> Vec<SharedFetch> {
        let now = Instant::now();
        let mut slots = self.inner.slots.lock();
        let mut pending = Vec::new();
        for (key, slot) in slots.iter_mut().filter(|(_, slot)| slot.observers > 0) {
            let Some(fetcher) = slot.fetcher.clone() else {
                continue;
            };
            slot.last_used = now;
            pending.push(self.start_locked(slot, key, &fetcher));
        }
        info!(count = pending.len(), "refetching observed queries");
        pending
    }

    /// Wait for every fetch currently in flight, returning how many there were
    pub async fn wait_pending(&self) -> usize {
        let pending: Vec<SharedFetch> = self
            .inner
            .slots
            .lock()
            .values()
            .filter_map(|slot| slot.in_flight.as_ref().map(|f| f.future.clone()))
            .collect();
        let count = pending.len();
        futures::future::join_all(pending).await;
        count
    }

    /// Drop keys nobody observed for `gc_time`, returning how many went
    pub fn evict_expired(&self) -> usize {
        let mut slots = self.inner.slots.lock();
        self.collect_locked(&mut slots, Instant::now())
    }

    fn collect_locked(&self, slots: &mut HashMap<QueryKey, Slot>, now: Instant) -> usize {
        let gc_time = self.inner.options.gc_time;
        let before = slots.len();
        slots.retain(|_, slot| !slot.is_collectable(now, gc_time));
        let removed = before - slots.len();
        if removed > 0 {
            debug!(removed, "evicted unused queries");
        }
        removed
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        self.inner.slots.lock().len()
    }

    /// Whether the cache holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is cached
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.inner.slots.lock().contains_key(key)
    }

    /// Remove every key
    pub fn clear(&self) {
        self.inner.slots.lock().clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}
