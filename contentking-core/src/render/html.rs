// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTML helpers shared by the section renderers

use std::borrow::Cow;

use crate::content::{CallToAction, ContentRecord};
use crate::preview::{EditTag, EDIT_TAG_ATTRIBUTE};

/// Escape HTML special characters.
///
/// Borrows the input when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// ` data-cslp="..."` for a field of a live record, empty otherwise
pub(crate) fn edit_attr<R: ContentRecord>(live: bool, record: &R, field_path: &str) -> String {
    if !live {
        return String::new();
    }
    match EditTag::for_record(record, field_path) {
        Some(tag) => format!(" {}=\"{}\"", EDIT_TAG_ATTRIBUTE, escape(&tag.to_string())),
        None => String::new(),
    }
}

/// Link button for a call to action; empty if there is no text
pub(crate) fn cta_link(cta: &CallToAction, class: &str, attrs: &str) -> String {
    if !cta.is_present() {
        return String::new();
    }
    let target = if cta.is_external {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    };
    format!(
        "<a class=\"{}\" href=\"{}\"{}{}>{}</a>",
        class,
        escape(&cta.url),
        target,
        attrs,
        escape(&cta.text)
    )
}

/// Section heading shown above a card grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    /// Heading text
    pub title: String,
    /// Lead paragraph
    pub description: String,
}

impl SectionHeading {
    /// Create a heading
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub(crate) fn render(&self) -> String {
        format!(
            "<header class=\"section-heading\"><h2>{}</h2><p>{}</p></header>",
            escape(&self.title),
            escape(&self.description)
        )
    }
}
