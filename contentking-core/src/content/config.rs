// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the content delivery stack

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the stack API key
pub const ENV_API_KEY: &str = "CONTENTSTACK_API_KEY";
/// Environment variable holding the delivery token
pub const ENV_DELIVERY_TOKEN: &str = "CONTENTSTACK_DELIVERY_TOKEN";
/// Environment variable holding the publishing environment name
pub const ENV_ENVIRONMENT: &str = "CONTENTSTACK_ENVIRONMENT";
/// Environment variable holding the stack region
pub const ENV_REGION: &str = "CONTENTSTACK_REGION";
/// Environment variable holding the live preview token
pub const ENV_PREVIEW_TOKEN: &str = "CONTENTSTACK_PREVIEW_TOKEN";
/// Environment variable holding the stack branch
pub const ENV_BRANCH: &str = "CONTENTSTACK_BRANCH";
/// Environment variable overriding the delivery base URL
pub const ENV_API_BASE_URL: &str = "CONTENTSTACK_API_BASE_URL";

/// Region a stack is hosted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// AWS North America
    #[default]
    Us,
    /// AWS Europe
    Eu,
    /// Azure North America
    AzureNa,
    /// Azure Europe
    AzureEu,
    /// Google Cloud North America
    GcpNa,
}

impl Region {
    /// Delivery (CDN) host for this region
    pub fn delivery_host(&self) -> &'static str {
        match self {
            Region::Us => "cdn.contentstack.io",
            Region::Eu => "eu-cdn.contentstack.com",
            Region::AzureNa => "azure-na-cdn.contentstack.com",
            Region::AzureEu => "azure-eu-cdn.contentstack.com",
            Region::GcpNa => "gcp-na-cdn.contentstack.com",
        }
    }

    /// Live preview host for this region
    pub fn preview_host(&self) -> &'static str {
        match self {
            Region::Us => "rest-preview.contentstack.com",
            Region::Eu => "eu-rest-preview.contentstack.com",
            Region::AzureNa => "azure-na-rest-preview.contentstack.com",
            Region::AzureEu => "azure-eu-rest-preview.contentstack.com",
            Region::GcpNa => "gcp-na-rest-preview.contentstack.com",
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "us" | "na" | "aws-na" => Ok(Region::Us),
            "eu" | "aws-eu" => Ok(Region::Eu),
            "azure-na" => Ok(Region::AzureNa),
            "azure-eu" => Ok(Region::AzureEu),
            "gcp-na" => Ok(Region::GcpNa),
            _ => Err(ConfigError::InvalidRegion(s.to_string())),
        }
    }
}

/// Configuration for the content delivery client
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Stack API key (sent as the `api_key` header)
    pub api_key: String,

    /// Delivery token (sent as the `access_token` header)
    pub delivery_token: String,

    /// Publishing environment (e.g., "production")
    pub environment: String,

    /// Stack region
    pub region: Region,

    /// Live preview token, required for preview sessions
    pub preview_token: Option<String>,

    /// Stack branch
    pub branch: String,

    /// Override for the delivery base URL (e.g., "http://127.0.0.1:8080")
    pub api_base_url: Option<String>,

    /// HTTP timeout for fetches
    pub timeout: Duration,

    /// Maximum response body size (bytes)
    pub max_response_size: u64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            delivery_token: String::new(),
            environment: String::new(),
            region: Region::Us,
            preview_token: None,
            branch: "main".to_string(),
            api_base_url: None,
            timeout: Duration::from_secs(30),
            max_response_size: 5 * 1024 * 1024, // 5 MB
        }
    }
}

impl StackConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Missing credentials are not an error here; see [`StackConfig::validate`].
    /// Only an unparsable region fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let region = match get(ENV_REGION) {
            Some(region) => region.parse()?,
            None => Region::Us,
        };

        Ok(Self {
            api_key: get(ENV_API_KEY).unwrap_or_default(),
            delivery_token: get(ENV_DELIVERY_TOKEN).unwrap_or_default(),
            environment: get(ENV_ENVIRONMENT).unwrap_or_default(),
            region,
            preview_token: get(ENV_PREVIEW_TOKEN),
            branch: get(ENV_BRANCH).unwrap_or(defaults.branch),
            api_base_url: get(ENV_API_BASE_URL),
            ..defaults
        })
    }

    /// Check that the required credentials are present
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<String> = [
            (ENV_API_KEY, &self.api_key),
            (ENV_DELIVERY_TOKEN, &self.delivery_token),
            (ENV_ENVIRONMENT, &self.environment),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }

    /// Whether live preview requests can be made
    pub fn preview_enabled(&self) -> bool {
        self.preview_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Base URL for delivery requests
    pub fn delivery_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.region.delivery_host()),
        }
    }

    /// Base URL for live preview requests
    pub fn preview_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.region.preview_host()),
        }
    }

    /// Set the delivery base URL (tests, proxies)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the live preview token
    pub fn with_preview_token(mut self, token: impl Into<String>) -> Self {
        self.preview_token = Some(token.into());
        self
    }
}

/// Cache timing for typed queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// How long fetched data counts as fresh
    pub stale_time: Duration,

    /// How long an unobserved entry stays cached
    pub gc_time: Duration,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            gc_time: Duration::from_secs(10 * 60),
        }
    }
}

/// Errors in stack configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required variables are missing or empty
    #[error("missing required variables: {}", .0.join(", "))]
    Missing(Vec<String>),

    /// Region name not recognised
    #[error("invalid region: {0}")]
    InvalidRegion(String),
}
