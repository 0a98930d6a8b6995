// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed query handles
//!
//! A [`ContentQuery`] binds a query key to the shared [`QueryCache`]. Holding
//! the handle counts as observing the key (the section is "mounted");
//! dropping it releases the key for eviction. The handle itself holds no
//! data, so a handle dropped mid-fetch is never written to.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use super::cache::{FetchOutcome, Fetcher, QueryCache, SlotSnapshot};
use super::error::ContentError;
use super::types::QueryKey;

/// Snapshot of a query as seen by a section
#[derive(Debug)]
pub struct QueryState<T> {
    /// Last good data, if any
    pub data: Option<Arc<T>>,
    /// True only while the first fetch is in flight
    pub is_loading: bool,
    /// Last error, only while there is no data
    pub error: Option<Arc<ContentError>>,
}

impl<T> QueryState<T> {
    /// State with data and nothing else
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(Arc::new(data)),
            is_loading: false,
            error: None,
        }
    }

    /// State of a failed query without data
    pub fn failed(error: ContentError) -> Self {
        Self {
            data: None,
            is_loading: false,
            error: Some(Arc::new(error)),
        }
    }

    /// State of a query that has not produced anything yet
    pub fn empty() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> QueryState<T> {
    fn from_snapshot(snapshot: SlotSnapshot) -> Self {
        let data = snapshot.data.and_then(downcast::<T>);
        Self {
            data,
            is_loading: snapshot.is_loading,
            error: snapshot.error,
        }
    }
}

fn downcast<T: Send + Sync + 'static>(payload: Arc<dyn Any + Send + Sync>) -> Option<Arc<T>> {
    payload.downcast::<T>().ok()
}

/// Handle on one typed query
pub struct ContentQuery<T> {
    cache: QueryCache,
    key: QueryKey,
    fetcher: Fetcher,
    enabled: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync + 'static> ContentQuery<T> {
    /// Mount a query for `key`
    pub(crate) fn mount(cache: QueryCache, key: QueryKey, fetcher: Fetcher) -> Self {
        cache.observe(&key, fetcher.clone());
        Self {
            cache,
            key,
            fetcher,
            enabled: true,
            _marker: PhantomData,
        }
    }

    /// A query that never fetches (e.g. a lookup by an empty slug)
    pub(crate) fn disabled(cache: QueryCache, key: QueryKey, fetcher: Fetcher) -> Self {
        Self {
            cache,
            key,
            fetcher,
            enabled: false,
            _marker: PhantomData,
        }
    }

    /// Cache key of this query
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Whether the query fetches at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current state without fetching
    pub fn state(&self) -> QueryState<T> {
        if !self.enabled {
            return QueryState::empty();
        }
        QueryState::from_snapshot(self.cache.snapshot(&self.key))
    }

    /// Load the query, reusing fresh cached data
    pub async fn load(&self) -> QueryState<T> {
        if !self.enabled {
            return QueryState::empty();
        }
        let outcome = self.cache.fetch(&self.key, &self.fetcher).await;
        self.settle(outcome)
    }

    /// Force a new fetch; on failure the previous data stays
    pub async fn refetch(&self) -> QueryState<T> {
        if !self.enabled {
            return QueryState::empty();
        }
        let outcome = self.cache.refetch(&self.key, &self.fetcher).await;
        self.settle(outcome)
    }

    fn settle(&self, _outcome: FetchOutcome) -> QueryState<T> {
        // Cache state is authoritative; the raw outcome may be stale or a failure.
        self.state()
    }
}

impl<T> Clone for ContentQuery<T> {
    fn clone(&self) -> Self {
        if self.enabled {
            self.cache.observe(&self.key, self.fetcher.clone());
        }
        Self {
            cache: self.cache.clone(),
            key: self.key.clone(),
            fetcher: self.fetcher.clone(),
            enabled: self.enabled,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for ContentQuery<T> {
    fn drop(&mut self) {
        if self.enabled {
            self.cache.unobserve(&self.key);
        }
    }
}

impl<T> std::fmt::Debug for ContentQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentQuery")
            .field("key", &self.key)
            .field("enabled", &self.enabled)
            .finish()
    }
}
