// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Preview session parsed from the page URL
//!
//! The visual editor loads the page with `live_preview=<hash>` plus the
//! entry being edited in the query string.

use thiserror::Error;
use url::Url;

/// Query parameter marking a live preview page load
pub const LIVE_PREVIEW_PARAM: &str = "live_preview";

/// Errors reading a preview marker
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Page URL does not parse
    #[error("invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Page URL carries no (or an empty) `live_preview` parameter
    #[error("page URL has no live_preview marker")]
    MissingMarker,
}

/// One live preview session of the visual editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSession {
    hash: String,
    content_type_uid: Option<String>,
    entry_uid: Option<String>,
    locale: Option<String>,
}

impl PreviewSession {
    /// Session for a known preview hash
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            content_type_uid: None,
            entry_uid: None,
            locale: None,
        }
    }

    /// Read the session from a page URL
    ///
    /// Accepts absolute URLs and site-relative paths such as
    /// `/careers?live_preview=abc`.
    pub fn from_url(page_url: &str) -> Result<Self, PreviewError> {
        let url = match Url::parse(page_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse("http://localhost/")?.join(page_url)?
            }
            Err(e) => return Err(e.into()),
        };

        let mut session = None::<PreviewSession>;
        let mut content_type_uid = None;
        let mut entry_uid = None;
        let mut locale = None;

        for (name, value) in url.query_pairs() {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name.as_ref() {
                LIVE_PREVIEW_PARAM => session = Some(PreviewSession::new(value)),
                "content_type_uid" => content_type_uid = Some(value.to_string()),
                "entry_uid" => entry_uid = Some(value.to_string()),
                "locale" => locale = Some(value.to_string()),
                _ => {}
            }
        }

        let mut session = session.ok_or(PreviewError::MissingMarker)?;
        session.content_type_uid = content_type_uid;
        session.entry_uid = entry_uid;
        session.locale = locale;
        Ok(session)
    }

    /// Preview hash sent along with preview requests
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Content type of the entry open in the editor
    pub fn content_type_uid(&self) -> Option<&str> {
        self.content_type_uid.as_deref()
    }

    /// Uid of the entry open in the editor
    pub fn entry_uid(&self) -> Option<&str> {
        self.entry_uid.as_deref()
    }

    /// Locale being edited
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}
