// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content store
//!
//! Entry point for sections: one typed query per content need, all sharing
//! a single [`QueryCache`] and [`ContentSource`].

use std::sync::Arc;

use futures::FutureExt;
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

use super::cache::{Fetcher, Payload, QueryCache};
use super::client::{
    fetch_record_by_field, fetch_records, ContentClient, ContentSource, UnconfiguredSource,
};
use super::config::{CacheOptions, ConfigError, StackConfig};
use super::error::ContentError;
use super::query::ContentQuery;
use super::schema::{
    ContentRecord, CoreProduct, FeatureCard, Footer, GlobalSettings, HeroSection, JobOpening,
    Navigation, RoleCard, Statistic, TeamMember, ValueCard,
};
use super::types::{ContentType, Query, QueryKey};
use crate::preview::{LivePreview, SubscriptionId};

/// Typed queries over a content source
#[derive(Clone)]
pub struct ContentStore {
    source: Arc<dyn ContentSource>,
    cache: QueryCache,
}

impl ContentStore {
    /// Create a store over `source`
    pub fn new(source: Arc<dyn ContentSource>, options: CacheOptions) -> Self {
        Self {
            source,
            cache: QueryCache::new(options),
        }
    }

    /// Create a store talking to the delivery API
    ///
    /// Missing credentials are logged and the store serves bundled content
    /// only. Other client setup failures are returned.
    pub fn from_config(config: &StackConfig, options: CacheOptions) -> Result<Self, ContentError> {
        Self::connect(config, options, None)
    }

    /// Like [`ContentStore::from_config`], routed through the preview host
    /// when `bridge` is active, and refetching on every editor change
    pub fn with_preview(
        config: &StackConfig,
        options: CacheOptions,
        bridge: &LivePreview,
    ) -> Result<Self, ContentError> {
        let store = Self::connect(config, options, bridge.session().cloned())?;
        if bridge.is_active() {
            store.attach_preview(bridge);
        }
        Ok(store)
    }

    fn connect(
        config: &StackConfig,
        options: CacheOptions,
        session: Option<crate::preview::PreviewSession>,
    ) -> Result<Self, ContentError> {
        match ContentClient::new(config) {
            Ok(client) => {
                let client = match session {
                    Some(session) => client.with_preview(session),
                    None => client,
                };
                info!(base_url = %client.base_url(), "content store connected");
                Ok(Self::new(Arc::new(client), options))
            }
            Err(ContentError::Configuration(e)) => {
                error!(error = %e, "content stack not configured, serving bundled content");
                Ok(Self::new(Arc::new(UnconfiguredSource::new(e)), options))
            }
            Err(e) => Err(e),
        }
    }

    /// A store that never fetches and always resolves to bundled content
    pub fn offline() -> Self {
        let missing = ConfigError::Missing(vec!["content source".to_string()]);
        Self::new(
            Arc::new(UnconfiguredSource::new(missing)),
            CacheOptions::default(),
        )
    }

    /// Shared query cache
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Mount a query for every record matching `query`
    pub fn entries<T: ContentRecord>(&self, key: QueryKey, query: Query) -> ContentQuery<Vec<T>> {
        let source = self.source.clone();
        let query = Arc::new(query);
        let fetcher: Fetcher = Arc::new(move || {
            let source = source.clone();
            let query = query.clone();
            async move {
                let records = fetch_records::<T>(source.as_ref(), &query).await?;
                Ok(Arc::new(records) as Payload)
            }
            .boxed()
        });
        ContentQuery::mount(self.cache.clone(), key, fetcher)
    }

    /// Mount a query for the first record whose `field` equals `value`
    ///
    /// No matching record is a [`ContentError::NotFound`] failure, so a
    /// refetch that finds nothing keeps the last good record. An empty
    /// `value` gives a disabled query that never fetches.
    pub fn entry_by_field<T: ContentRecord>(
        &self,
        key: QueryKey,
        field: &str,
        value: &str,
    ) -> ContentQuery<Option<T>> {
        let source = self.source.clone();
        let field: Arc<str> = Arc::from(field);
        let value: Arc<str> = Arc::from(value);
        let enabled = !value.is_empty();
        let fetcher: Fetcher = Arc::new(move || {
            let source = source.clone();
            let field = field.clone();
            let value = value.clone();
            async move {
                let record = fetch_record_by_field::<T>(source.as_ref(), &field, &value)
                    .await?
                    .ok_or(ContentError::NotFound {
                        content_type: T::CONTENT_TYPE,
                    })?;
                Ok(Arc::new(Some(record)) as Payload)
            }
            .boxed()
        });

        if enabled {
            ContentQuery::mount(self.cache.clone(), key, fetcher)
        } else {
            ContentQuery::disabled(self.cache.clone(), key, fetcher)
        }
    }

    fn all<T: ContentRecord>(&self) -> ContentQuery<Vec<T>> {
        self.entries(QueryKey::new(T::CONTENT_TYPE), Query::new(T::CONTENT_TYPE))
    }

    fn categorized<T: ContentRecord>(
        &self,
        field: &str,
        category: Option<&str>,
    ) -> ContentQuery<Vec<T>> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => self.entries(
                QueryKey::new(T::CONTENT_TYPE).with(category),
                Query::new(T::CONTENT_TYPE).filter(field, category),
            ),
            None => self.all(),
        }
    }

    /// Site-wide settings
    pub fn global_settings(&self) -> ContentQuery<Vec<GlobalSettings>> {
        self.all()
    }

    /// Header navigation
    pub fn navigation(&self) -> ContentQuery<Vec<Navigation>> {
        self.all()
    }

    /// Every hero section
    pub fn hero_sections(&self) -> ContentQuery<Vec<HeroSection>> {
        self.all()
    }

    /// Hero section of one page; disabled for an empty slug
    pub fn hero_section_by_slug(&self, slug: &str) -> ContentQuery<Option<HeroSection>> {
        self.entry_by_field(
            QueryKey::new(ContentType::HeroSection)
                .with("by_slug")
                .with(slug),
            "page_slug",
            slug,
        )
    }

    /// Feature cards, optionally restricted to one category
    pub fn feature_cards(&self, category: Option<&str>) -> ContentQuery<Vec<FeatureCard>> {
        self.categorized("feature_category", category)
    }

    /// Core product cards
    pub fn core_products(&self) -> ContentQuery<Vec<CoreProduct>> {
        self.all()
    }

    /// Statistics, optionally restricted to one category
    pub fn statistics(&self, category: Option<&str>) -> ContentQuery<Vec<Statistic>> {
        self.categorized("stat_category", category)
    }

    /// Role cards
    pub fn role_cards(&self) -> ContentQuery<Vec<RoleCard>> {
        self.all()
    }

    /// Company value cards
    pub fn value_cards(&self) -> ContentQuery<Vec<ValueCard>> {
        self.all()
    }

    /// Team members
    pub fn team_members(&self) -> ContentQuery<Vec<TeamMember>> {
        self.all()
    }

    /// Open positions
    pub fn job_openings(&self) -> ContentQuery<Vec<JobOpening>> {
        self.all()
    }

    /// Site footer
    pub fn footer(&self) -> ContentQuery<Vec<Footer>> {
        self.all()
    }

    /// Refetch every mounted query, returning how many were refetched
    pub async fn refetch_mounted(&self) -> usize {
        self.cache.refetch_observed().await
    }

    /// Wait for every fetch in flight, such as refetches started by an
    /// editor change
    pub async fn wait_pending(&self) -> usize {
        self.cache.wait_pending().await
    }

    /// Refetch every mounted query whenever the editor reports a change
    ///
    /// Refetches start before the notification returns and run on the tokio
    /// runtime current at subscription time, or at notification time if
    /// there was none.
    pub fn attach_preview(&self, bridge: &LivePreview) -> SubscriptionId {
        let cache = self.cache.clone();
        let runtime = Handle::try_current().ok();

        bridge.subscribe(move |_change| {
            let Some(handle) = runtime.clone().or_else(|| Handle::try_current().ok()) else {
                warn!("no tokio runtime, editor change not applied");
                return;
            };
            let _runtime = handle.enter();
            let started = cache.spawn_refetch_observed();
            debug!(started, "refetching after editor change");
        })
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("cached_queries", &self.cache.len())
            .finish()
    }
}
