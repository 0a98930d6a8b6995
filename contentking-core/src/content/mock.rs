// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Content Source
//!
//! In-memory implementation of [`ContentSource`] for testing.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::client::ContentSource;
use super::error::ContentError;
use super::types::{ContentType, Entry, Query};

/// One scripted reply
#[derive(Debug, Clone)]
struct ScriptedResponse {
    delay: Duration,
    result: Result<Vec<Entry>, u16>,
}

#[derive(Debug, Default)]
struct MockState {
    entries: HashMap<ContentType, Vec<Entry>>,
    scripted: HashMap<ContentType, VecDeque<ScriptedResponse>>,
    calls: HashMap<ContentType, usize>,
    failing: HashMap<ContentType, u16>,
}

/// Mock content source for testing.
///
/// Serves stored entries, or scripted replies queued per content type.
/// Every fetch is counted.
///
/// # Example
///
/// ```ignore
/// use contentking_core::content::{ContentType, MockContentSource};
///
/// let source = MockContentSource::new();
/// source.set_entries(ContentType::FeatureCard, vec![card]);
///
/// // Next fetch answers after 100ms with HTTP 503
/// source.push_error(ContentType::FeatureCard, 503, Duration::from_millis(100));
///
/// assert_eq!(source.calls(ContentType::FeatureCard), 0);
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    state: Mutex<MockState>,
}

impl MockContentSource {
    /// Creates an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored entries of a content type.
    pub fn set_entries(&self, content_type: ContentType, entries: Vec<Entry>) {
        self.state.lock().entries.insert(content_type, entries);
    }

    /// Queues entries returned by the next fetch of `content_type`.
    pub fn push_entries(&self, content_type: ContentType, entries: Vec<Entry>, delay: Duration) {
        self.push(
            content_type,
            ScriptedResponse {
                delay,
                result: Ok(entries),
            },
        );
    }

    /// Queues an HTTP error returned by the next fetch of `content_type`.
    pub fn push_error(&self, content_type: ContentType, status: u16, delay: Duration) {
        self.push(
            content_type,
            ScriptedResponse {
                delay,
                result: Err(status),
            },
        );
    }

    fn push(&self, content_type: ContentType, response: ScriptedResponse) {
        self.state
            .lock()
            .scripted
            .entry(content_type)
            .or_default()
            .push_back(response);
    }

    /// Makes every unscripted fetch of `content_type` fail with `status`.
    pub fn fail_with(&self, content_type: ContentType, status: u16) {
        self.state.lock().failing.insert(content_type, status);
    }

    /// Stops failing fetches of `content_type`.
    pub fn recover(&self, content_type: ContentType) {
        self.state.lock().failing.remove(&content_type);
    }

    /// Number of fetches of `content_type` so far.
    pub fn calls(&self, content_type: ContentType) -> usize {
        self.state
            .lock()
            .calls
            .get(&content_type)
            .copied()
            .unwrap_or(0)
    }

    /// Number of fetches of any content type so far.
    pub fn total_calls(&self) -> usize {
        self.state.lock().calls.values().sum()
    }

    /// Returns the number of scripted replies not yet consumed.
    pub fn pending_responses(&self) -> usize {
        self.state.lock().scripted.values().map(VecDeque::len).sum()
    }

    fn next_response(&self, content_type: ContentType) -> ScriptedResponse {
        let mut state = self.state.lock();
        *state.calls.entry(content_type).or_default() += 1;

        if let Some(response) = state
            .scripted
            .get_mut(&content_type)
            .and_then(VecDeque::pop_front)
        {
            return response;
        }

        let result = match state.failing.get(&content_type) {
            Some(status) => Err(*status),
            None => Ok(state
                .entries
                .get(&content_type)
                .cloned()
                .unwrap_or_default()),
        };
        ScriptedResponse {
            delay: Duration::ZERO,
            result,
        }
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch_entries(&self, query: &Query) -> Result<Vec<Entry>, ContentError> {
        let response = self.next_response(query.content_type());
        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }

        let entries = response.result.map_err(ContentError::Http)?;
        Ok(entries.into_iter().filter(|e| query.matches(e)).collect())
    }

    async fn fetch_entry(
        &self,
        content_type: ContentType,
        uid: &str,
    ) -> Result<Option<Entry>, ContentError> {
        let entries = self.fetch_entries(&Query::new(content_type)).await?;
        Ok(entries.into_iter().find(|e| e.uid() == uid))
    }
}
