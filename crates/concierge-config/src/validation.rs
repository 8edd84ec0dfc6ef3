// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as numeric ranges, non-empty identifiers, and endpoint URLs.

use crate::diagnostic::ConfigError;
use crate::model::ConciergeConfig;

/// Largest accepted `assistant.max_search_results`.
pub const MAX_SEARCH_RESULTS_LIMIT: usize = 25;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &ConciergeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let max_results = config.assistant.max_search_results;
    if !(1..=MAX_SEARCH_RESULTS_LIMIT).contains(&max_results) {
        fail(format!(
            "assistant.max_search_results must be between 1 and {MAX_SEARCH_RESULTS_LIMIT}, got {max_results}"
        ));
    }

    if config.assistant.request_timeout_secs == 0 {
        fail("assistant.request_timeout_secs must be greater than 0".to_string());
    }

    if config.assistant.examples_dir.trim().is_empty() {
        fail("assistant.examples_dir must not be empty".to_string());
    }

    if config.openai.model.trim().is_empty() {
        fail("openai.model must not be empty".to_string());
    }

    let temperature = config.openai.temperature;
    if !temperature.is_finite() || !(0.0..=2.0).contains(&temperature) {
        fail(format!(
            "openai.temperature must be between 0 and 2, got {temperature}"
        ));
    }

    if config.openai.timeout_secs == 0 {
        fail("openai.timeout_secs must be greater than 0".to_string());
    }

    if config.search.timeout_secs == 0 {
        fail("search.timeout_secs must be greater than 0".to_string());
    }

    if config.gateway.host.trim().is_empty() {
        fail("gateway.host must not be empty".to_string());
    }

    for (key, url) in [
        ("openai.base_url", &config.openai.base_url),
        ("search.base_url", &config.search.base_url),
    ] {
        if let Some(problem) = check_http_url(url) {
            fail(format!("{key} `{url}` {problem}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(url: &str) -> Option<String> {
    match reqwest::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => None,
        Ok(parsed) => Some(format!(
            "must use http or https, not `{}`",
            parsed.scheme()
        )),
        Err(e) => Some(format!("is not a valid URL: {e}")),
    }
}
