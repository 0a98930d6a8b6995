// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for StackConfig

use std::collections::HashMap;
use std::time::Duration;

use contentking_core::content::{
    CacheOptions, ConfigError, Region, StackConfig, ENV_API_KEY, ENV_BRANCH, ENV_DELIVERY_TOKEN,
    ENV_ENVIRONMENT, ENV_PREVIEW_TOKEN, ENV_REGION,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = StackConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.region, Region::Us);
    assert_eq!(config.branch, "main");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.preview_token.is_none());
    assert_eq!(config.delivery_base_url(), "https://cdn.contentstack.io");
}

#[test]
fn test_missing_credentials_are_listed() {
    let config = StackConfig::from_lookup(lookup(&[(ENV_API_KEY, "blt123")])).unwrap();
    match config.validate() {
        Err(ConfigError::Missing(vars)) => {
            assert_eq!(vars, vec![ENV_DELIVERY_TOKEN, ENV_ENVIRONMENT]);
        }
        other => panic!("expected missing variables, got {:?}", other),
    }
}

#[test]
fn test_complete_config_validates() {
    let config = StackConfig::from_lookup(lookup(&[
        (ENV_API_KEY, "blt123"),
        (ENV_DELIVERY_TOKEN, "cs-delivery"),
        (ENV_ENVIRONMENT, "production"),
        (ENV_REGION, "eu"),
        (ENV_BRANCH, "staging"),
        (ENV_PREVIEW_TOKEN, "cs-preview"),
    ]))
    .unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.region, Region::Eu);
    assert_eq!(config.branch, "staging");
    assert!(config.preview_enabled());
}

#[test]
fn test_blank_values_count_as_missing() {
    let config = StackConfig::from_lookup(lookup(&[
        (ENV_API_KEY, "  "),
        (ENV_DELIVERY_TOKEN, "cs-delivery"),
        (ENV_ENVIRONMENT, "production"),
        (ENV_PREVIEW_TOKEN, ""),
    ]))
    .unwrap();

    assert_eq!(
        config.validate(),
        Err(ConfigError::Missing(vec![ENV_API_KEY.to_string()]))
    );
    assert!(!config.preview_enabled());
}

#[test]
fn test_invalid_region() {
    let result = StackConfig::from_lookup(lookup(&[(ENV_REGION, "moon")]));
    assert!(matches!(result, Err(ConfigError::InvalidRegion(_))));
}

#[test]
fn test_base_url_override_applies_to_both_hosts() {
    let config = StackConfig::default().with_base_url("http://127.0.0.1:9000/");
    assert_eq!(config.delivery_base_url(), "http://127.0.0.1:9000");
    assert_eq!(config.preview_base_url(), "http://127.0.0.1:9000");
}

#[test]
fn test_cache_defaults() {
    let options = CacheOptions::default();
    assert_eq!(options.stale_time, Duration::from_secs(300));
    assert_eq!(options.gc_time, Duration::from_secs(600));
}
