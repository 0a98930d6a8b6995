// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fetch Command
//!
//! Prints raw entries exactly as the delivery API returned them.

use anyhow::{Context, Result};
use contentking_core::content::{ContentClient, ContentSource, ContentType, Query};
use serde_json::Value;
use tracing::info;

use crate::config::CliConfig;

/// Parses a `field=value` filter.
pub fn parse_where(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("empty field name in '{}'", s));
    }
    Ok((field.to_string(), value.to_string()))
}

/// Fetches every entry of `content_type` matching `filters` and prints them
/// as a JSON array.
pub async fn run(config: &CliConfig, content_type: &str, filters: &[(String, String)]) -> Result<()> {
    let content_type: ContentType = content_type.parse()?;
    let client = ContentClient::new(&config.stack_config()?)
        .context("fetching needs a configured content stack")?;

    let query = filters
        .iter()
        .fold(Query::new(content_type), |query, (field, value)| {
            query.filter(field.as_str(), value.as_str())
        });

    let entries = client.fetch_entries(&query).await?;
    info!(%content_type, count = entries.len(), "fetched entries");

    let json = Value::Array(entries.into_iter().map(|e| e.into_json()).collect());
    println!("{}", serde_json::to_string_pretty(&json)?);

    Ok(())
}
