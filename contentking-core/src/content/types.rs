// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions
//!
//! These types describe what is asked of the delivery API (content types,
//! queries) and what comes back (raw entries), independent of any record
//! schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

use super::error::ContentError;

/// Registry of content types known to the site
///
/// Each variant maps a logical name to the content type uid configured in
/// the CMS stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Site title, logo, tagline and contact details
    GlobalSettings,
    /// Header navigation and call-to-action buttons
    Navigation,
    /// Per-page hero banners, looked up by `page_slug`
    HeroSection,
    /// Feature cards (home and features pages)
    FeatureCard,
    /// Core product cards on the features page
    CoreProduct,
    /// Headline statistics
    Statistic,
    /// "Built for every role" cards
    RoleCard,
    /// Company value cards on the about page
    ValueCard,
    /// Leadership team members
    TeamMember,
    /// Open positions on the careers page
    JobOpening,
    /// Footer link sections and legal links
    Footer,
}

impl ContentType {
    /// All registered content types, in declaration order
    pub const ALL: [ContentType; 11] = [
        ContentType::GlobalSettings,
        ContentType::Navigation,
        ContentType::HeroSection,
        ContentType::FeatureCard,
        ContentType::CoreProduct,
        ContentType::Statistic,
        ContentType::RoleCard,
        ContentType::ValueCard,
        ContentType::TeamMember,
        ContentType::JobOpening,
        ContentType::Footer,
    ];

    /// Get the content type uid used by the CMS
    pub fn uid(&self) -> &'static str {
        match self {
            ContentType::GlobalSettings => "global_settings",
            ContentType::Navigation => "navigation",
            ContentType::HeroSection => "hero_section_v2",
            ContentType::FeatureCard => "feature_card",
            ContentType::CoreProduct => "core_product",
            ContentType::Statistic => "statistic",
            ContentType::RoleCard => "role_card",
            ContentType::ValueCard => "value_card",
            ContentType::TeamMember => "team_member",
            ContentType::JobOpening => "job_opening",
            ContentType::Footer => "footer",
        }
    }

    /// Look up a content type by its CMS uid
    pub fn from_uid(uid: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ct| ct.uid() == uid)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uid())
    }
}

impl FromStr for ContentType {
    type Err = ContentError;

    /// Accepts either the CMS uid (`hero_section_v2`) or the logical
    /// snake_case name (`hero_section`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ct) = Self::from_uid(s) {
            return Ok(ct);
        }
        serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| ContentError::UnknownContentType(s.to_string()))
    }
}

/// A single entry as returned by the delivery API
///
/// Fields are kept as raw JSON; typed access goes through
/// [`ContentRecord`](super::schema::ContentRecord).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    content_type: ContentType,
    uid: String,
    fields: Map<String, Value>,
}

impl Entry {
    /// Build an entry from a JSON object returned for `content_type`
    ///
    /// The object must carry a string `uid`.
    pub fn from_json(content_type: ContentType, value: Value) -> Result<Self, ContentError> {
        let Value::Object(fields) = value else {
            return Err(ContentError::SchemaMismatch {
                content_type,
                reason: "entry is not a JSON object".into(),
            });
        };

        let uid = match fields.get("uid") {
            Some(Value::String(uid)) if !uid.is_empty() => uid.clone(),
            _ => {
                return Err(ContentError::SchemaMismatch {
                    content_type,
                    reason: "entry has no uid".into(),
                })
            }
        };

        Ok(Self {
            content_type,
            uid,
            fields,
        })
    }

    /// Content type this entry belongs to
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Unique identifier within the content type
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Entry locale, if the API reported one
    pub fn locale(&self) -> Option<&str> {
        self.fields.get("locale").and_then(Value::as_str)
    }

    /// Raw field value
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All raw fields (including `uid`)
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Whether `field` equals `value`
    pub fn matches(&self, field: &str, value: &Value) -> bool {
        self.fields.get(field) == Some(value)
    }

    /// Convert back into a JSON object
    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Content query: a content type plus field-equality filters
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    content_type: ContentType,
    filters: Vec<(String, Value)>,
}

impl Query {
    /// Query all entries of a content type
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            filters: Vec::new(),
        }
    }

    /// Add an equality filter
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Content type being queried
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Equality filters, in insertion order
    pub fn filters(&self) -> &[(String, Value)] {
        &self.filters
    }

    /// Whether an entry satisfies every filter
    pub fn matches(&self, entry: &Entry) -> bool {
        entry.content_type() == self.content_type
            && self
                .filters
                .iter()
                .all(|(field, value)| entry.matches(field, value))
    }

    /// Filters as the JSON object the delivery API expects in `query=`
    ///
    /// Returns `None` when there are no filters.
    pub fn filter_json(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }
        let map: Map<String, Value> = self.filters.iter().cloned().collect();
        Some(Value::Object(map).to_string())
    }
}

/// Cache key for a typed query: content type plus disambiguating parts
///
/// Parts carry whatever distinguishes two queries of the same content type,
/// e.g. `["by_slug", "careers"]` or `["home_features"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    content_type: ContentType,
    parts: Vec<String>,
}

impl QueryKey {
    /// Key covering every entry of a content type
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            parts: Vec::new(),
        }
    }

    /// Append a disambiguating part
    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.parts.push(part.into());
        self
    }

    /// Content type of the keyed query
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Disambiguating parts
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content_type)?;
        for part in &self.parts {
            write!(f, "/{}", part)?;
        }
        Ok(())
    }
}
