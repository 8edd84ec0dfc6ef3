// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Concierge configuration.
///
/// Read once at startup and treated as immutable afterwards.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConciergeConfig {
    /// Classifier behavior settings.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Hosted model settings.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Web search provider settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// HTTP front-end settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Classifier behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path to a file replacing the built-in instruction template.
    /// The date/time grounding block is appended either way.
    #[serde(default)]
    pub instructions_file: Option<String>,

    /// Number of web search hits attached to `other` responses.
    #[serde(default = "default_max_search_results")]
    pub max_search_results: usize,

    /// Upper bound on one classification, model and search calls included.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Directory that `classify --save` writes example captures into.
    #[serde(default = "default_examples_dir")]
    pub examples_dir: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            instructions_file: None,
            max_search_results: default_max_search_results(),
            request_timeout_secs: default_request_timeout_secs(),
            examples_dir: default_examples_dir(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_search_results() -> usize {
    5
}

fn default_request_timeout_secs() -> u64 {
    120
}

fn default_examples_dir() -> String {
    "examples".to_string()
}

/// OpenAI Chat Completions configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// API key. `None` falls back to `OPENAI_API_KEY` at call time.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Chat Completions endpoint.
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Retries after a transient status (429, 500, 503, 529).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-request HTTP timeout.
    #[serde(default = "default_openai_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            base_url: default_openai_base_url(),
            max_retries: default_max_retries(),
            timeout_secs: default_openai_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_max_retries() -> u32 {
    1
}

fn default_openai_timeout_secs() -> u64 {
    60
}

/// DuckDuckGo search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// HTML search endpoint.
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// DuckDuckGo region code (`kl` parameter).
    #[serde(default = "default_region")]
    pub region: String,

    /// Per-request HTTP timeout.
    #[serde(default = "default_search_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with search requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            region: default_region(),
            timeout_secs: default_search_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_search_base_url() -> String {
    "https://html.duckduckgo.com/html/".to_string()
}

fn default_region() -> String {
    "wt-wt".to_string()
}

fn default_search_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("concierge/", env!("CARGO_PKG_VERSION")).to_string()
}

/// HTTP front-end configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}
