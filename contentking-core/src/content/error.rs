// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Error Types
//!
//! Every variant is absorbed at the query boundary: a failed fetch never
//! reaches a renderer, it only makes the fallback content show up.

use thiserror::Error;

use super::config::ConfigError;
use super::types::ContentType;

/// Errors that can occur while fetching or decoding content
#[derive(Debug, Error)]
pub enum ContentError {
    /// Required stack credentials are missing
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// Network/request error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Response body too large
    #[error("response too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Valid response without any matching entry
    #[error("no {content_type} entry found")]
    NotFound {
        /// Queried content type
        content_type: ContentType,
    },

    /// Entry does not match the record schema of its content type
    #[error("schema mismatch for {content_type}: {reason}")]
    SchemaMismatch {
        /// Content type being decoded
        content_type: ContentType,
        /// What did not match
        reason: String,
    },

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fetch task panicked or was cancelled by runtime shutdown
    #[error("fetch interrupted: {0}")]
    Interrupted(String),

    /// Name not present in the content type registry
    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    /// Slug does not name a page of the site
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl ContentError {
    /// Whether this error came from the transport (network or HTTP status)
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ContentError::Network(_) | ContentError::Http(_) | ContentError::TooLarge { .. }
        )
    }
}
