// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types Command

use anyhow::Result;
use contentking_core::content::ContentType;
use serde_json::Value;

/// Logical name of a content type, as accepted by `fetch`.
fn logical_name(content_type: ContentType) -> Result<String> {
    match serde_json::to_value(content_type)? {
        Value::String(name) => Ok(name),
        other => Ok(other.to_string()),
    }
}

/// Lists every content type with its CMS uid.
pub fn run() -> Result<()> {
    println!("{:<18} CMS UID", "NAME");
    for content_type in ContentType::ALL {
        println!("{:<18} {}", logical_name(content_type)?, content_type.uid());
    }
    Ok(())
}
