// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Concierge configuration system.

use std::io::Write;

use concierge_config::diagnostic::ConfigError;
use concierge_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_concierge_config() {
    let toml = r#"
[assistant]
log_level = "debug"
instructions_file = "/etc/concierge/instructions.md"
max_search_results = 8
request_timeout_secs = 30
examples_dir = "captures"

[openai]
api_key = "sk-test-123"
model = "gpt-4o-mini"
temperature = 0.0
base_url = "http://localhost:9000/v1/chat/completions"
max_retries = 2
timeout_secs = 15

[search]
base_url = "http://localhost:9001/html/"
region = "us-en"
timeout_secs = 5
user_agent = "test-agent"

[gateway]
host = "127.0.0.1"
port = 8080
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.assistant.log_level, "debug");
    assert_eq!(
        config.assistant.instructions_file.as_deref(),
        Some("/etc/concierge/instructions.md")
    );
    assert_eq!(config.assistant.max_search_results, 8);
    assert_eq!(config.assistant.request_timeout_secs, 30);
    assert_eq!(config.assistant.examples_dir, "captures");
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-test-123"));
    assert_eq!(config.openai.model, "gpt-4o-mini");
    assert_eq!(config.openai.temperature, 0.0);
    assert_eq!(config.openai.max_retries, 2);
    assert_eq!(config.openai.timeout_secs, 15);
    assert_eq!(config.search.region, "us-en");
    assert_eq!(config.search.user_agent, "test-agent");
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 8080);
}

/// Missing sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.assistant.log_level, "info");
    assert!(config.assistant.instructions_file.is_none());
    assert_eq!(config.assistant.max_search_results, 5);
    assert_eq!(config.assistant.request_timeout_secs, 120);
    assert_eq!(config.assistant.examples_dir, "examples");
    assert!(config.openai.api_key.is_none());
    assert_eq!(config.openai.model, "gpt-4o");
    assert!((config.openai.temperature - 0.1).abs() < f32::EPSILON);
    assert_eq!(
        config.openai.base_url,
        "https://api.openai.com/v1/chat/completions"
    );
    assert_eq!(config.openai.max_retries, 1);
    assert_eq!(config.search.base_url, "https://html.duckduckgo.com/html/");
    assert_eq!(config.search.region, "wt-wt");
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 8000);
}

/// An unknown key is rejected with a suggestion for the closest valid key.
#[test]
fn unknown_key_produces_suggestion() {
    let toml = r#"
[openai]
modle = "gpt-4o"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("should produce an UnknownKey error");
    assert_eq!(unknown.0, "modle");
    assert_eq!(unknown.1.as_deref(), Some("model"));
}

/// A value of the wrong type is reported against its dotted key.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[gateway]
port = "eighty"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject string port");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_through_load_and_validate() {
    let toml = r#"
[assistant]
max_search_results = 0
"#;
    let errors = load_and_validate_str(toml).expect_err("zero results is invalid");
    assert!(matches!(&errors[0], ConfigError::Validation { message } if message.contains("max_search_results")));
}

/// An explicit config file is loaded and validated.
#[test]
fn explicit_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[gateway]\nport = 9999").unwrap();

    let config = load_and_validate_path(file.path()).expect("file config should load");
    assert_eq!(config.gateway.port, 9999);
}

/// Unknown keys inside an explicit file are reported with a suggestion.
#[test]
fn unknown_key_in_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[search]\nregoin = \"us-en\"").unwrap();

    let errors = load_and_validate_path(file.path()).expect_err("typo should be rejected");
    match &errors[0] {
        ConfigError::UnknownKey { suggestion, .. } => {
            assert_eq!(suggestion.as_deref(), Some("region"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}
