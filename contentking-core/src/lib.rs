// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content King Core Library
//!
//! Content layer of the Content King marketing site: typed entries fetched
//! from the headless CMS, cached per query, resolved against bundled
//! fallback content, refreshed on live preview edits and rendered to HTML.

pub mod content;
pub mod preview;
pub mod render;

pub use content::{
    CacheOptions, ContentClient, ContentError, ContentQuery, ContentSource, ContentStore,
    ContentType, Entry, MockContentSource, Query, QueryKey, QueryState, Resolved, StackConfig,
};
pub use preview::{EditTag, EntryChange, LivePreview, PreviewSession, PreviewState, SubscriptionId};
pub use render::{Page, PageView};
