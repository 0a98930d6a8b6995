// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use anyhow::Result;
use contentking_core::content::{CacheOptions, Region, StackConfig};

/// CLI configuration.
///
/// Every field comes from a flag or its environment variable; unset fields
/// keep the library defaults.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Stack API key.
    pub api_key: Option<String>,
    /// Delivery token.
    pub delivery_token: Option<String>,
    /// Publishing environment.
    pub environment: Option<String>,
    /// Stack region name.
    pub region: Option<String>,
    /// Live preview token.
    pub preview_token: Option<String>,
    /// Stack branch.
    pub branch: Option<String>,
    /// Delivery API base URL override.
    pub base_url: Option<String>,
}

impl CliConfig {
    /// Builds the stack configuration.
    ///
    /// Missing credentials are not an error here; only an unknown region is.
    pub fn stack_config(&self) -> Result<StackConfig> {
        let set = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());
        let defaults = StackConfig::default();

        let region = match set(&self.region) {
            Some(region) => region.parse::<Region>()?,
            None => defaults.region,
        };

        Ok(StackConfig {
            api_key: set(&self.api_key).unwrap_or_default(),
            delivery_token: set(&self.delivery_token).unwrap_or_default(),
            environment: set(&self.environment).unwrap_or_default(),
            region,
            preview_token: set(&self.preview_token),
            branch: set(&self.branch).unwrap_or(defaults.branch.clone()),
            api_base_url: set(&self.base_url),
            ..defaults
        })
    }

    /// Returns the cache timing used by every command.
    pub fn cache_options(&self) -> CacheOptions {
        CacheOptions::default()
    }
}
