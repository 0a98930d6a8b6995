// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Edit tags for the visual editor
//!
//! A tag names one editable field of one entry:
//! `<content_type>.<entry_uid>.<locale>.<field_path>`. Renderers put it in a
//! `data-cslp` attribute.

use std::fmt;

use crate::content::{ContentRecord, ContentType};

/// HTML attribute the editor looks for
pub const EDIT_TAG_ATTRIBUTE: &str = "data-cslp";

/// Address of one editable field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTag {
    content_type: ContentType,
    entry_uid: String,
    locale: String,
    field_path: String,
}

impl EditTag {
    /// Create a tag
    pub fn new(
        content_type: ContentType,
        entry_uid: impl Into<String>,
        locale: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Self {
        Self {
            content_type,
            entry_uid: entry_uid.into(),
            locale: locale.into(),
            field_path: field_path.into(),
        }
    }

    /// Tag for `field_path` of a fetched record
    ///
    /// Bundled records have no uid and get no tag.
    pub fn for_record<R: ContentRecord>(record: &R, field_path: &str) -> Option<Self> {
        if record.uid().is_empty() {
            return None;
        }
        Some(Self::new(
            R::CONTENT_TYPE,
            record.uid(),
            record.locale(),
            field_path,
        ))
    }

    /// Field path within the entry (e.g. `primary_cta.text`)
    pub fn field_path(&self) -> &str {
        &self.field_path
    }

    /// Tag for a nested field of the same entry
    pub fn child(&self, field: &str) -> Self {
        Self {
            field_path: format!("{}.{}", self.field_path, field),
            ..self.clone()
        }
    }
}

impl fmt::Display for EditTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.content_type, self.entry_uid, self.locale, self.field_path
        )
    }
}
