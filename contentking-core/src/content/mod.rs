// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CMS content module
//!
//! Provides functionality for fetching, caching, and resolving site content
//! from the headless CMS:
//! - Entries of the registered content types, decoded into typed records
//! - A process-wide query cache with staleness, coalescing and eviction
//! - Typed queries per section, mounted through [`ContentStore`]
//!
//! Bundled content serves as fallback whenever the CMS returns nothing or
//! is unavailable.

mod bundled;
mod cache;
mod client;
mod config;
mod error;
mod fallback;
mod mock;
mod query;
mod schema;
mod store;
mod types;

pub use bundled::{SITE_TAGLINE, SITE_TITLE};
pub use cache::{FetchOutcome, Fetcher, Payload, QueryCache, SlotSnapshot};
pub use client::{
    fetch_record_by_field, fetch_records, ContentClient, ContentSource, UnconfiguredSource,
};
pub use config::{
    CacheOptions, ConfigError, Region, StackConfig, ENV_API_BASE_URL, ENV_API_KEY, ENV_BRANCH,
    ENV_DELIVERY_TOKEN, ENV_ENVIRONMENT, ENV_PREVIEW_TOKEN, ENV_REGION,
};
pub use error::ContentError;
pub use fallback::{resolve, resolve_state, Resolvable, Resolved};
pub use mock::MockContentSource;
pub use query::{ContentQuery, QueryState};
pub use schema::{
    split_list, Asset, CallToAction, ContentRecord, CoreProduct, CtaButtons, DropdownItem,
    DropdownMenu, FeatureCard, Footer, FooterBottom, FooterSections, GlobalSettings, HeroSection,
    JobOpening, LinkItem, LinkSection, MemberLinks, Navigation, NavigationItem, RoleCard,
    SimpleLink, SocialLinks, Statistic, TeamMember, ValueCard, DEFAULT_LOCALE,
};
pub use store::ContentStore;
pub use types::{ContentType, Entry, Query, QueryKey};
