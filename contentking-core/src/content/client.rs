// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content client for the delivery API
//!
//! This module provides HTTP-based entry fetching with:
//! - Header credentials (`api_key`, `access_token`, `branch`)
//! - Normalisation of list and single-entry responses
//! - Size limits and timeout configuration
//! - Live preview routing when a preview session is attached
//!
//! The client never caches; caching lives in [`QueryCache`](super::QueryCache).

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use super::config::StackConfig;
use super::error::ContentError;
use super::schema::ContentRecord;
use super::types::{ContentType, Entry, Query};
use crate::preview::PreviewSession;

/// Source of raw entries
///
/// Implemented by the HTTP [`ContentClient`], by [`UnconfiguredSource`] for
/// fallback-only mode and by [`MockContentSource`](super::MockContentSource)
/// in tests.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every entry matching `query`; no match is an empty vector
    async fn fetch_entries(&self, query: &Query) -> Result<Vec<Entry>, ContentError>;

    /// Fetch one entry by uid; `None` if it does not exist
    async fn fetch_entry(
        &self,
        content_type: ContentType,
        uid: &str,
    ) -> Result<Option<Entry>, ContentError>;

    /// Fetch the first entry whose `field` equals `value`
    async fn fetch_entry_by_field(
        &self,
        content_type: ContentType,
        field: &str,
        value: &str,
    ) -> Result<Option<Entry>, ContentError> {
        let query = Query::new(content_type).filter(field, value);
        Ok(self.fetch_entries(&query).await?.into_iter().next())
    }
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    entries: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct EntryResponse {
    entry: Value,
}

/// Fetches entries from the delivery API
pub struct ContentClient {
    client: Client,
    config: StackConfig,
    preview: Option<PreviewSession>,
}

impl ContentClient {
    /// Create a new content client from config
    ///
    /// Fails with [`ContentError::Configuration`] if required credentials
    /// are missing.
    pub fn new(config: &StackConfig) -> Result<Self, ContentError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "contentking/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            preview: None,
        })
    }

    /// Route requests through the live preview host for `session`
    ///
    /// Ignored (with the delivery host kept) when no preview token is
    /// configured.
    pub fn with_preview(mut self, session: PreviewSession) -> Self {
        if self.config.preview_enabled() {
            info!(hash = %session.hash(), "content client using live preview host");
            self.preview = Some(session);
        } else {
            debug!("preview session ignored: no preview token configured");
        }
        self
    }

    /// Whether requests go to the live preview host
    pub fn is_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> String {
        if self.preview.is_some() {
            self.config.preview_base_url()
        } else {
            self.config.delivery_base_url()
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/v3/{}", self.base_url(), path);
        let mut request = self
            .client
            .get(url)
            .header("api_key", &self.config.api_key)
            .header("branch", &self.config.branch)
            .query(&[("environment", self.config.environment.as_str())]);

        match (&self.preview, &self.config.preview_token) {
            (Some(session), Some(token)) => {
                request = request
                    .header("preview_token", token)
                    .query(&[("live_preview", session.hash())]);
            }
            _ => {
                request = request.header("access_token", &self.config.delivery_token);
            }
        }
        request
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ContentError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ContentError::Http(status.as_u16()));
        }

        let max = self.config.max_response_size;
        if let Some(len) = response.content_length() {
            if len > max {
                return Err(ContentError::TooLarge { size: len, max });
            }
        }

        let data = response.bytes().await?;
        if data.len() as u64 > max {
            return Err(ContentError::TooLarge {
                size: data.len() as u64,
                max,
            });
        }

        Ok(serde_json::from_slice(&data)?)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn fetch_entries(&self, query: &Query) -> Result<Vec<Entry>, ContentError> {
        let content_type = query.content_type();
        let mut request = self.get(&format!("content_types/{}/entries", content_type.uid()));
        if let Some(filters) = query.filter_json() {
            request = request.query(&[("query", filters)]);
        }

        debug!(%content_type, filters = query.filters().len(), "fetching entries");
        let body = self.send::<EntriesResponse>(request).await?;
        body.entries
            .into_iter()
            .map(|value| Entry::from_json(content_type, value))
            .collect()
    }

    async fn fetch_entry(
        &self,
        content_type: ContentType,
        uid: &str,
    ) -> Result<Option<Entry>, ContentError> {
        let request = self.get(&format!("content_types/{}/entries/{}", content_type.uid(), uid));

        debug!(%content_type, uid, "fetching entry");
        // A missing uid is absent; any other failure status is an error.
        match self.send::<EntryResponse>(request).await {
            Ok(body) => Entry::from_json(content_type, body.entry).map(Some),
            Err(ContentError::Http(status)) if status == StatusCode::NOT_FOUND.as_u16() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Source used when the stack is not configured
///
/// Every fetch fails with the configuration error, so queries resolve to
/// bundled content.
pub struct UnconfiguredSource {
    error: super::config::ConfigError,
}

impl UnconfiguredSource {
    /// Create a source failing with `error`
    pub fn new(error: super::config::ConfigError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ContentSource for UnconfiguredSource {
    async fn fetch_entries(&self, _query: &Query) -> Result<Vec<Entry>, ContentError> {
        Err(ContentError::Configuration(self.error.clone()))
    }

    async fn fetch_entry(
        &self,
        _content_type: ContentType,
        _uid: &str,
    ) -> Result<Option<Entry>, ContentError> {
        Err(ContentError::Configuration(self.error.clone()))
    }
}

/// Fetch and decode every record matching `query`
///
/// Fails with [`ContentError::SchemaMismatch`] if any entry does not decode.
pub async fn fetch_records<T: ContentRecord>(
    source: &dyn ContentSource,
    query: &Query,
) -> Result<Vec<T>, ContentError> {
    debug_assert_eq!(query.content_type(), T::CONTENT_TYPE);
    source
        .fetch_entries(query)
        .await?
        .iter()
        .map(T::from_entry)
        .collect()
}

/// Fetch and decode the first record whose `field` equals `value`
pub async fn fetch_record_by_field<T: ContentRecord>(
    source: &dyn ContentSource,
    field: &str,
    value: &str,
) -> Result<Option<T>, ContentError> {
    source
        .fetch_entry_by_field(T::CONTENT_TYPE, field, value)
        .await?
        .as_ref()
        .map(T::from_entry)
        .transpose()
}
